use super::property_descriptor::PropertyDescriptor;
use crate::runtime::value::JsValue;

/// A property slot as stored on an object.
#[derive(Debug, Clone)]
pub struct Property {
    pub value: JsValue,
    pub getter: Option<JsValue>,
    pub setter: Option<JsValue>,
    /// Set for accessor slots even when both halves are `undefined`.
    pub accessor: bool,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Property {
    /// Plain assignment semantics: writable, enumerable, configurable.
    pub fn new(value: JsValue) -> Self {
        Self {
            value,
            getter: None,
            setter: None,
            accessor: false,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Define-property semantics for a fresh slot: absent attributes are `false`.
    pub fn from_descriptor(desc: &PropertyDescriptor) -> Self {
        Self {
            value: desc.value.clone().unwrap_or(JsValue::Undefined),
            getter: desc.get.clone().filter(|g| !g.is_undefined()),
            setter: desc.set.clone().filter(|s| !s.is_undefined()),
            accessor: desc.is_accessor_descriptor(),
            writable: desc.writable.unwrap_or(false),
            enumerable: desc.enumerable.unwrap_or(false),
            configurable: desc.configurable.unwrap_or(false),
        }
    }

    pub fn is_accessor(&self) -> bool {
        self.accessor
    }

    /// A fully populated descriptor for this slot.
    pub fn to_descriptor(&self) -> PropertyDescriptor {
        if self.is_accessor() {
            PropertyDescriptor {
                get: Some(self.getter.clone().unwrap_or(JsValue::Undefined)),
                set: Some(self.setter.clone().unwrap_or(JsValue::Undefined)),
                enumerable: Some(self.enumerable),
                configurable: Some(self.configurable),
                ..PropertyDescriptor::default()
            }
        } else {
            PropertyDescriptor {
                value: Some(self.value.clone()),
                writable: Some(self.writable),
                enumerable: Some(self.enumerable),
                configurable: Some(self.configurable),
                ..PropertyDescriptor::default()
            }
        }
    }
}
