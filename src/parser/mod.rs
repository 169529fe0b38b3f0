//! Reference path parsing.
//!
//! A reference is a dot-delimited chain of identifiers such as
//! `module.sub.method`. The grammar lives in `reference_grammar.pest`;
//! [`ReferencePath`] is the parsed form the resolver walks.

mod api;
pub mod ast;
#[cfg(test)]
mod unit_tests;

pub use api::{parse_reference, ReferenceParser};
pub use ast::ReferencePath;
