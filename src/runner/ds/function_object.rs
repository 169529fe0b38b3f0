use std::fmt;
use std::rc::Rc;

use crate::runner::ds::error::DqError;
use crate::runner::ds::value::DqValue;

/// Signature for native methods.
/// Receives the receiver (`this`) and the positional arguments.
pub type NativeFn = fn(this: DqValue, args: Vec<DqValue>) -> Result<DqValue, DqError>;

pub type ClosureFn = Box<dyn Fn(DqValue, Vec<DqValue>) -> Result<DqValue, DqError>>;

pub enum NativeFunction {
    /// Direct function pointer.
    Native(NativeFn),

    /// Boxed closure, for methods that capture host state.
    Closure(ClosureFn),
}

/// An invocable namespace member.
pub struct FunctionObject {
    name: String,
    body: NativeFunction,
}

pub type FunctionRef = Rc<FunctionObject>;

impl FunctionObject {
    pub fn native(name: &str, func: NativeFn) -> Self {
        FunctionObject {
            name: name.to_string(),
            body: NativeFunction::Native(func),
        }
    }

    pub fn closure<F>(name: &str, func: F) -> Self
    where
        F: Fn(DqValue, Vec<DqValue>) -> Result<DqValue, DqError> + 'static,
    {
        FunctionObject {
            name: name.to_string(),
            body: NativeFunction::Closure(Box::new(func)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with `this` bound to `receiver`. Errors from the body are
    /// returned as-is.
    pub fn call(&self, receiver: DqValue, args: Vec<DqValue>) -> Result<DqValue, DqError> {
        match &self.body {
            NativeFunction::Native(f) => f(receiver, args),
            NativeFunction::Closure(f) => f(receiver, args),
        }
    }

    pub fn into_ref(self) -> FunctionRef {
        Rc::new(self)
    }
}

impl fmt::Debug for FunctionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionObject({})", self.name)
    }
}
