use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::DqError;
use crate::runner::ds::function_object::{FunctionObject, NativeFn};
use crate::runner::ds::value::DqValue;

/// Anything exposing key-based member access.
///
/// The resolver walks reference paths through this trait only, so hosts
/// can plug in their own module objects (lazily populated registries,
/// read-only facades) next to [`OrdinaryNamespace`].
pub trait NamespaceObject {
    /// The member stored under `key`, if any.
    fn get_member(&self, key: &str) -> Option<DqValue>;

    /// Store `value` under `key`. Read-only namespaces return `false`.
    fn set_member(&mut self, _key: &str, _value: DqValue) -> bool {
        false
    }

    fn member_names(&self) -> Vec<String>;
}

pub type ObjectRef = Rc<RefCell<dyn NamespaceObject>>;

/// Identity comparison for object handles.
pub fn same_object(a: &ObjectRef, b: &ObjectRef) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// A plain mutable mapping from member name to value.
pub struct OrdinaryNamespace {
    members: HashMap<String, DqValue>,
}

impl OrdinaryNamespace {
    pub fn new() -> Self {
        OrdinaryNamespace {
            members: HashMap::new(),
        }
    }

    /// Add a member of any kind: nested namespace, function or plain data.
    pub fn with_member(mut self, name: &str, value: impl Into<DqValue>) -> Self {
        self.members.insert(name.to_string(), value.into());
        self
    }

    /// Add a native method.
    pub fn with_method(self, name: &str, func: NativeFn) -> Self {
        let function = FunctionObject::native(name, func);
        self.with_member(name, function)
    }

    /// Add a closure-backed method.
    pub fn with_closure<F>(self, name: &str, func: F) -> Self
    where
        F: Fn(DqValue, Vec<DqValue>) -> Result<DqValue, DqError> + 'static,
    {
        let function = FunctionObject::closure(name, func);
        self.with_member(name, function)
    }

    pub fn into_ref(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    pub fn into_value(self) -> DqValue {
        DqValue::Object(self.into_ref())
    }
}

impl Default for OrdinaryNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceObject for OrdinaryNamespace {
    fn get_member(&self, key: &str) -> Option<DqValue> {
        self.members.get(key).cloned()
    }

    fn set_member(&mut self, key: &str, value: DqValue) -> bool {
        self.members.insert(key.to_string(), value);
        true
    }

    fn member_names(&self) -> Vec<String> {
        self.members.keys().cloned().collect()
    }
}
