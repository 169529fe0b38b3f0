use thiserror::Error;

/// Every failure the dispatch core can surface.
///
/// Nothing is swallowed or retried: whichever call triggered a dispatch
/// (`drain`, or an append once the queue dispatches immediately) receives
/// the error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DqError {
    /// No candidate namespace holds a callable at the path.
    #[error("No such method: {0}")]
    ReferenceNotFound(String),

    /// The queued reference is not a string, or not a dot path.
    #[error("Not a valid reference: {0}")]
    InvalidReferenceType(String),

    /// Raised by a dispatched callable and passed through unchanged.
    #[error("{0}")]
    Thrown(String),
}

impl DqError {
    pub fn thrown(message: impl Into<String>) -> Self {
        DqError::Thrown(message.into())
    }

    /// The reference path, for errors that carry one.
    pub fn reference(&self) -> Option<&str> {
        match self {
            DqError::ReferenceNotFound(path) => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_not_found_message() {
        let err = DqError::ReferenceNotFound("bork".to_string());
        assert_eq!(err.to_string(), "No such method: bork");
        assert_eq!(err.reference(), Some("bork"));
    }

    #[test]
    fn test_thrown_passes_message_through() {
        let err = DqError::thrown("boom");
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.reference(), None);
    }
}
