mod coercion;
mod display;
pub mod object;

use std::cell::RefCell;
use std::rc::Rc;

use crate::embedding::callback::NativeFunctionBoxed;
use object::JsObject;

/// Shared handle to a heap object. Identity is pointer identity.
pub type ObjectRef = Rc<RefCell<JsObject>>;

#[derive(Debug, Clone)]
pub enum JsValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// Plain objects and callables alike; callables carry a native handler.
    Object(ObjectRef),
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl JsValue {
    /// Wrap a host closure as a callable function object.
    pub fn native_function(name: impl Into<String>, handler: NativeFunctionBoxed) -> Self {
        JsValue::Object(JsObject::function(name, handler).wrapped())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    pub fn is_callable(&self) -> bool {
        match self {
            JsValue::Object(obj) => obj.borrow().is_callable(),
            _ => false,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The `typeof` result for this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object",
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Object(obj) if obj.borrow().is_callable() => "function",
            JsValue::Object(_) => "object",
        }
    }

    /// Read a property through the prototype chain. Accessor properties
    /// read as `undefined`; invoking getters is the host's job.
    pub fn get(&self, key: &str) -> JsValue {
        match self {
            JsValue::Object(obj) => JsObject::lookup(obj, key).unwrap_or(JsValue::Undefined),
            _ => JsValue::Undefined,
        }
    }
}

impl From<bool> for JsValue {
    fn from(value: bool) -> Self {
        JsValue::Boolean(value)
    }
}

impl From<f64> for JsValue {
    fn from(value: f64) -> Self {
        JsValue::Number(value)
    }
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        JsValue::String(value.to_string())
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        JsValue::String(value)
    }
}

impl From<ObjectRef> for JsValue {
    fn from(value: ObjectRef) -> Self {
        JsValue::Object(value)
    }
}
