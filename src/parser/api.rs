use log::trace;
use pest::Parser;
use pest_derive::Parser;

use super::ast::ReferencePath;
use crate::runner::ds::error::DqError;

#[derive(Parser)]
#[grammar = "parser/reference_grammar.pest"] // relative to src
pub struct ReferenceParser;

/// Parse `source` into its ordered identifier segments.
///
/// Anything that is not a non-empty, dot-separated list of identifiers
/// (`a..b`, `a.`, `a[0]`, `""`) is rejected as an invalid reference.
pub fn parse_reference(source: &str) -> Result<ReferencePath, DqError> {
    let mut pairs = ReferenceParser::parse(Rule::reference, source).map_err(|e| {
        trace!("reference {:?} rejected: {}", source, e);
        invalid_reference(source)
    })?;

    let reference = pairs.next().ok_or_else(|| invalid_reference(source))?;
    let segments: Vec<String> = reference
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::identifier)
        .map(|pair| pair.as_str().to_string())
        .collect();

    if segments.is_empty() {
        return Err(invalid_reference(source));
    }

    Ok(ReferencePath::from_parts(source.to_string(), segments))
}

fn invalid_reference(source: &str) -> DqError {
    DqError::InvalidReferenceType(format!(
        "{:?} is not a dot-delimited identifier path",
        source
    ))
}
