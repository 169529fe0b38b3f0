use super::api::ReferenceParser;
use super::api::Rule;
use super::ast::ReferencePath;
use crate::runner::ds::error::DqError;

use pest::consumes_to;
use pest::parses_to;
use pest::Parser;

#[test]
fn test_identifier_token() {
    parses_to! {
        parser: ReferenceParser,
        input: "moduleSpy",
        rule: Rule::identifier,
        tokens: [
            identifier(0, 9)
        ]
    };
}

#[test]
fn test_identifier_with_dollar_and_underscore() {
    parses_to! {
        parser: ReferenceParser,
        input: "$_q1",
        rule: Rule::identifier,
        tokens: [
            identifier(0, 4)
        ]
    };
}

#[test]
fn test_identifier_cannot_start_with_digit() {
    assert!(ReferenceParser::parse(Rule::identifier, "1abc").is_err());
}

#[test]
fn test_single_segment_reference() {
    let path = ReferencePath::parse("globalSpy").unwrap();
    assert_eq!(path.segments(), &["globalSpy".to_string()]);
    assert_eq!(path.depth(), 1);
    assert_eq!(path.as_str(), "globalSpy");
}

#[test]
fn test_period_delimited_reference() {
    let path = ReferencePath::parse("path.to.method").unwrap();
    assert_eq!(
        path.segments(),
        &["path".to_string(), "to".to_string(), "method".to_string()]
    );
    let (parents, leaf) = path.split_leaf();
    assert_eq!(parents, &["path".to_string(), "to".to_string()]);
    assert_eq!(leaf, "method");
}

#[test]
fn test_display_keeps_source_text() {
    let path = ReferencePath::parse("module.moduleSpy").unwrap();
    assert_eq!(path.to_string(), "module.moduleSpy");
}

#[test]
fn test_rejects_malformed_references() {
    for source in &["", ".", "a.", ".a", "a..b", "a b", "a[0]", "a.0", " a", "a-b"] {
        match ReferencePath::parse(source) {
            Err(DqError::InvalidReferenceType(message)) => {
                assert!(message.contains(&format!("{:?}", source)), "{}", message)
            }
            other => panic!("expected {:?} to be rejected, got {:?}", source, other),
        }
    }
}
