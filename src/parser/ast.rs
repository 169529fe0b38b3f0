use std::fmt;
use std::fmt::{Display, Formatter};

use crate::runner::ds::error::DqError;

/// A parsed method reference.
///
/// Keeps the literal source text so errors can quote exactly what the
/// caller queued.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferencePath {
    source: String,
    segments: Vec<String>,
}

impl ReferencePath {
    pub fn parse(source: &str) -> Result<Self, DqError> {
        super::api::parse_reference(source)
    }

    pub(crate) fn from_parts(source: String, segments: Vec<String>) -> Self {
        ReferencePath { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of identifiers in the chain. Always at least one.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Splits into the enclosing chain and the final member name.
    pub fn split_leaf(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((leaf, parents)) => (parents, leaf.as_str()),
            None => (&self.segments[..0], ""),
        }
    }
}

impl Display for ReferencePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
