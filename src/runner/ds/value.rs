use std::fmt;
use std::fmt::{Display, Formatter};

use crate::runner::ds::function_object::{FunctionObject, FunctionRef};
use crate::runner::ds::object::{same_object, ObjectRef, OrdinaryNamespace};

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";

/// A dynamically typed value: call arguments, namespace members, results.
pub enum DqValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(DqNumberType),
    String(String),
    Array(Vec<DqValue>),
    Object(ObjectRef),
    Function(FunctionRef),
}

impl DqValue {
    /// An empty ordinary namespace.
    pub fn new_object() -> Self {
        OrdinaryNamespace::new().into_value()
    }

    /// Everything except `undefined` counts as present, falsy values included.
    pub fn is_present(&self) -> bool {
        !matches!(self, DqValue::Undefined)
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, DqValue::Function(_))
    }

    pub fn as_function(&self) -> Option<&FunctionRef> {
        match self {
            DqValue::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            DqValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DqValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Present member `key` of an object value. Non-objects have no members.
    pub fn get_member(&self, key: &str) -> Option<DqValue> {
        match self {
            DqValue::Object(o) => o.borrow().get_member(key).filter(DqValue::is_present),
            _ => None,
        }
    }

    /// Sets member `key` on an object value. Returns false for non-objects
    /// and for namespaces that refuse the write.
    pub fn set_member(&self, key: &str, value: DqValue) -> bool {
        match self {
            DqValue::Object(o) => o.borrow_mut().set_member(key, value),
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            DqValue::Undefined => TYPE_STR_UNDEFINED,
            DqValue::Null => TYPE_STR_NULL,
            DqValue::Boolean(_) => "boolean",
            DqValue::Number(_) => "number",
            DqValue::String(_) => "string",
            DqValue::Array(_) => "array",
            DqValue::Object(_) => "object",
            DqValue::Function(_) => "function",
        }
    }
}

impl Clone for DqValue {
    fn clone(&self) -> Self {
        match self {
            DqValue::Undefined => DqValue::Undefined,
            DqValue::Null => DqValue::Null,
            DqValue::Boolean(b) => DqValue::Boolean(*b),
            DqValue::Number(n) => DqValue::Number(n.clone()),
            DqValue::String(s) => DqValue::String(s.to_string()),
            DqValue::Array(items) => DqValue::Array(items.clone()),
            DqValue::Object(o) => DqValue::Object(o.clone()),
            DqValue::Function(f) => DqValue::Function(f.clone()),
        }
    }
}

impl Display for DqValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DqValue::Undefined => write!(f, "{}", TYPE_STR_UNDEFINED),
            DqValue::Null => write!(f, "{}", TYPE_STR_NULL),
            DqValue::Boolean(b) => write!(f, "{}", b),
            DqValue::Number(n) => write!(f, "{}", n),
            DqValue::String(s) => write!(f, "\"{}\"", s),
            DqValue::Array(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            DqValue::Object(o) => {
                let mut names = o.borrow().member_names();
                names.sort();
                write!(f, "{{{}}}", names.join(", "))
            }
            DqValue::Function(func) => write!(f, "function {}()", func.name()),
        }
    }
}

impl fmt::Debug for DqValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DqValue::Undefined => write!(f, "DqValue::Undefined"),
            DqValue::Null => write!(f, "DqValue::Null"),
            DqValue::Boolean(b) => write!(f, "DqValue::Boolean({})", b),
            DqValue::Number(n) => write!(f, "DqValue::Number({:?})", n),
            DqValue::String(s) => write!(f, "DqValue::String({:?})", s),
            DqValue::Array(items) => write!(f, "DqValue::Array({:?})", items),
            DqValue::Object(_) => write!(f, "DqValue::Object({})", self),
            DqValue::Function(func) => write!(f, "DqValue::Function({})", func.name()),
        }
    }
}

impl PartialEq for DqValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DqValue::Undefined, DqValue::Undefined) => true,
            (DqValue::Null, DqValue::Null) => true,
            (DqValue::Boolean(a), DqValue::Boolean(b)) => a == b,
            (DqValue::Number(a), DqValue::Number(b)) => a == b,
            (DqValue::String(a), DqValue::String(b)) => a == b,
            (DqValue::Array(a), DqValue::Array(b)) => a == b,
            (DqValue::Object(a), DqValue::Object(b)) => same_object(a, b),
            (DqValue::Function(a), DqValue::Function(b)) => std::rc::Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DqNumberType {
    Integer(i64),
    Float(f64),
}

impl Display for DqNumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DqNumberType::Integer(i) => write!(f, "{}", i),
            DqNumberType::Float(nf) => write!(f, "{}", nf),
        }
    }
}

impl From<bool> for DqValue {
    fn from(b: bool) -> Self {
        DqValue::Boolean(b)
    }
}

impl From<i32> for DqValue {
    fn from(n: i32) -> Self {
        DqValue::Number(DqNumberType::Integer(n as i64))
    }
}

impl From<i64> for DqValue {
    fn from(n: i64) -> Self {
        DqValue::Number(DqNumberType::Integer(n))
    }
}

impl From<f64> for DqValue {
    fn from(n: f64) -> Self {
        DqValue::Number(DqNumberType::Float(n))
    }
}

impl From<&str> for DqValue {
    fn from(s: &str) -> Self {
        DqValue::String(s.to_string())
    }
}

impl From<String> for DqValue {
    fn from(s: String) -> Self {
        DqValue::String(s)
    }
}

impl From<Vec<DqValue>> for DqValue {
    fn from(items: Vec<DqValue>) -> Self {
        DqValue::Array(items)
    }
}

impl From<ObjectRef> for DqValue {
    fn from(o: ObjectRef) -> Self {
        DqValue::Object(o)
    }
}

impl From<OrdinaryNamespace> for DqValue {
    fn from(ns: OrdinaryNamespace) -> Self {
        ns.into_value()
    }
}

impl From<FunctionObject> for DqValue {
    fn from(f: FunctionObject) -> Self {
        DqValue::Function(f.into_ref())
    }
}

impl From<FunctionRef> for DqValue {
    fn from(f: FunctionRef) -> Self {
        DqValue::Function(f)
    }
}

/// JSON objects become ordinary namespaces, so a host can hand over
/// arguments (or whole modules of plain data) as JSON.
impl From<serde_json::Value> for DqValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => DqValue::Null,
            serde_json::Value::Bool(b) => DqValue::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => DqValue::Number(DqNumberType::Integer(i)),
                None => DqValue::Number(DqNumberType::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => DqValue::String(s),
            serde_json::Value::Array(items) => {
                DqValue::Array(items.into_iter().map(DqValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut ns = OrdinaryNamespace::new();
                for (key, value) in map {
                    ns = ns.with_member(&key, DqValue::from(value));
                }
                ns.into_value()
            }
        }
    }
}
