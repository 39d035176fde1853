use thiserror::Error;

use super::JsObject;
use crate::runtime::value::{JsValue, ObjectRef};

/// A property descriptor with every field optional, so generic and partial
/// descriptors are representable. Defaults built for declarations populate
/// every field their kind uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDescriptor {
    pub value: Option<JsValue>,
    pub writable: Option<bool>,
    pub get: Option<JsValue>,
    pub set: Option<JsValue>,
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorReadError {
    #[error("expected a descriptor object but got {0}")]
    NotAnObject(&'static str),
    #[error("expected a descriptor object but got a function")]
    Callable,
    #[error("getter must be a function or undefined")]
    GetterNotCallable,
    #[error("setter must be a function or undefined")]
    SetterNotCallable,
}

impl PropertyDescriptor {
    pub fn data(value: JsValue, writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self {
            value: Some(value),
            writable: Some(writable),
            enumerable: Some(enumerable),
            configurable: Some(configurable),
            ..Self::default()
        }
    }

    pub fn accessor(
        get: Option<JsValue>,
        set: Option<JsValue>,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        Self {
            get,
            set,
            enumerable: Some(enumerable),
            configurable: Some(configurable),
            ..Self::default()
        }
    }

    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_data_descriptor() && !self.is_accessor_descriptor()
    }

    /// Carries both data and accessor fields; never installable.
    pub fn is_mixed(&self) -> bool {
        self.is_data_descriptor() && self.is_accessor_descriptor()
    }

    pub fn with_enumerable(self, enumerable: bool) -> Self {
        Self {
            enumerable: Some(enumerable),
            ..self
        }
    }

    pub fn with_configurable(self, configurable: bool) -> Self {
        Self {
            configurable: Some(configurable),
            ..self
        }
    }

    pub fn with_writable(self, writable: bool) -> Self {
        Self {
            writable: Some(writable),
            ..self
        }
    }

    /// Materialize as a fresh plain object holding exactly the present fields.
    pub fn to_object(&self) -> ObjectRef {
        let mut obj = JsObject::new();
        if let Some(value) = &self.value {
            obj.set("value".to_string(), value.clone());
        }
        if let Some(writable) = self.writable {
            obj.set("writable".to_string(), JsValue::Boolean(writable));
        }
        if let Some(get) = &self.get {
            obj.set("get".to_string(), get.clone());
        }
        if let Some(set) = &self.set {
            obj.set("set".to_string(), set.clone());
        }
        if let Some(enumerable) = self.enumerable {
            obj.set("enumerable".to_string(), JsValue::Boolean(enumerable));
        }
        if let Some(configurable) = self.configurable {
            obj.set("configurable".to_string(), JsValue::Boolean(configurable));
        }
        obj.wrapped()
    }

    pub fn to_value(&self) -> JsValue {
        JsValue::Object(self.to_object())
    }

    /// Read a descriptor back from an object. Presence of each field is
    /// significant; booleans are coerced with ToBoolean. Accessor fields read
    /// as `undefined`; use [`PropertyDescriptor::read_with`] to run getters.
    pub fn from_value(value: &JsValue) -> Result<Self, DescriptorReadError> {
        Self::read_with(value, |name| Ok(value.get(name)))
    }

    /// Like [`PropertyDescriptor::from_value`], with field values produced
    /// by `get`. Fields are read in the order value, writable, get, set,
    /// enumerable, configurable.
    pub fn read_with<E>(
        value: &JsValue,
        mut get: impl FnMut(&str) -> Result<JsValue, E>,
    ) -> Result<Self, E>
    where
        E: From<DescriptorReadError>,
    {
        let obj = match value {
            JsValue::Object(obj) if obj.borrow().is_callable() => {
                return Err(DescriptorReadError::Callable.into());
            }
            JsValue::Object(obj) => obj,
            other => return Err(DescriptorReadError::NotAnObject(other.type_of()).into()),
        };

        let mut field = |name: &str| -> Result<Option<JsValue>, E> {
            if JsObject::has_property(obj, name) {
                get(name).map(Some)
            } else {
                Ok(None)
            }
        };
        let desc = Self {
            value: field("value")?,
            writable: field("writable")?.map(|v| v.to_boolean()),
            get: field("get")?,
            set: field("set")?,
            enumerable: field("enumerable")?.map(|v| v.to_boolean()),
            configurable: field("configurable")?.map(|v| v.to_boolean()),
        };

        if desc.get.as_ref().is_some_and(not_callable) {
            return Err(DescriptorReadError::GetterNotCallable.into());
        }
        if desc.set.as_ref().is_some_and(not_callable) {
            return Err(DescriptorReadError::SetterNotCallable.into());
        }
        Ok(desc)
    }
}

fn not_callable(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_callable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_absent_when_read_back() {
        let partial = PropertyDescriptor {
            enumerable: Some(false),
            ..PropertyDescriptor::default()
        };
        let read = PropertyDescriptor::from_value(&partial.to_value()).expect("descriptor");
        assert_eq!(read, partial);
        assert!(read.is_generic_descriptor());
    }

    #[test]
    fn mixed_fields_are_detected() {
        let obj = JsObject::new().wrapped();
        obj.borrow_mut().set("value".into(), JsValue::Number(1.0));
        obj.borrow_mut().set("get".into(), JsValue::Undefined);
        let read = PropertyDescriptor::from_value(&JsValue::Object(obj)).expect("descriptor");
        assert!(read.is_mixed());
    }

    #[test]
    fn primitives_and_getters_that_are_not_functions_are_rejected() {
        assert_eq!(
            PropertyDescriptor::from_value(&JsValue::Number(3.0)),
            Err(DescriptorReadError::NotAnObject("number"))
        );

        let obj = JsObject::new().wrapped();
        obj.borrow_mut().set("get".into(), JsValue::String("nope".into()));
        assert_eq!(
            PropertyDescriptor::from_value(&JsValue::Object(obj)),
            Err(DescriptorReadError::GetterNotCallable)
        );
    }

    #[test]
    fn boolean_fields_use_truthiness() {
        let obj = JsObject::new().wrapped();
        obj.borrow_mut().set("writable".into(), JsValue::Number(0.0));
        obj.borrow_mut().set("enumerable".into(), JsValue::String("yes".into()));
        let read = PropertyDescriptor::from_value(&JsValue::Object(obj)).expect("descriptor");
        assert_eq!(read.writable, Some(false));
        assert_eq!(read.enumerable, Some(true));
    }
}
