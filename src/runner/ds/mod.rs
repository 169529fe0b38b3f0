//! Value model: dynamic values, namespace objects, callables, errors.

pub mod error;
pub mod function_object;
pub mod object;
pub mod value;

pub use error::DqError;
pub use function_object::{FunctionObject, FunctionRef, NativeFn};
pub use object::{NamespaceObject, ObjectRef, OrdinaryNamespace};
pub use value::{DqNumberType, DqValue};
