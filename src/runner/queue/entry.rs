use crate::parser::ReferencePath;
use crate::runner::ds::error::DqError;
use crate::runner::ds::value::DqValue;

/// One recorded call: a reference path plus its positional arguments.
///
/// The reference is validated when the entry is built, so a queue never
/// holds a malformed path.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    reference: ReferencePath,
    args: Vec<DqValue>,
}

impl QueueEntry {
    pub fn new(reference: &str, args: Vec<DqValue>) -> Result<Self, DqError> {
        Ok(QueueEntry {
            reference: ReferencePath::parse(reference)?,
            args,
        })
    }

    /// Build from a call record whose first element is the reference,
    /// e.g. `["log", 1]`.
    pub fn from_values(values: Vec<DqValue>) -> Result<Self, DqError> {
        let mut values = values.into_iter();
        match values.next() {
            Some(first) => match first.as_str() {
                Some(reference) => Self::new(reference, values.collect()),
                None => Err(DqError::InvalidReferenceType(format!(
                    "not a string: {} ({})",
                    first,
                    first.type_name()
                ))),
            },
            None => Err(DqError::InvalidReferenceType(
                "empty call record".to_string(),
            )),
        }
    }

    /// Build from a JSON call record such as `["module.method", 1, {"x": 2}]`.
    pub fn from_json(json: serde_json::Value) -> Result<Self, DqError> {
        match json {
            serde_json::Value::Array(items) => {
                Self::from_values(items.into_iter().map(DqValue::from).collect())
            }
            other => Err(DqError::InvalidReferenceType(format!(
                "call record must be an array, got {}",
                other
            ))),
        }
    }

    pub fn reference(&self) -> &ReferencePath {
        &self.reference
    }

    pub fn args(&self) -> &[DqValue] {
        &self.args
    }
}
