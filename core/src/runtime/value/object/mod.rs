mod property;
pub mod property_descriptor;

pub use property::Property;
pub use property_descriptor::{DescriptorReadError, PropertyDescriptor};

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{JsValue, ObjectRef};
use crate::embedding::callback::NativeFunctionBoxed;
use crate::errors::RuntimeError;

#[derive(Debug, Clone)]
pub struct JsObject {
    pub properties: HashMap<String, Property>,
    pub prototype: Option<ObjectRef>,
    callable: Option<NativeFunctionBoxed>,
    name: String,
}

impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

impl JsObject {
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
            prototype: None,
            callable: None,
            name: String::new(),
        }
    }

    /// A callable object backed by a host handler.
    pub fn function(name: impl Into<String>, handler: NativeFunctionBoxed) -> Self {
        let name = name.into();
        let mut obj = Self::new();
        obj.properties.insert(
            "name".to_string(),
            Property {
                writable: false,
                enumerable: false,
                ..Property::new(JsValue::String(name.clone()))
            },
        );
        obj.callable = Some(handler);
        obj.name = name;
        obj
    }

    pub fn wrapped(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    pub fn is_callable(&self) -> bool {
        self.callable.is_some()
    }

    pub fn handler(&self) -> Option<&NativeFunctionBoxed> {
        self.callable.as_ref()
    }

    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            "anonymous"
        } else {
            &self.name
        }
    }

    /// Plain assignment to an own data property.
    pub fn set(&mut self, key: String, value: JsValue) {
        if let Some(existing) = self.properties.get_mut(&key) {
            existing.value = value;
            return;
        }
        self.properties.insert(key, Property::new(value));
    }

    pub fn get_own_property(&self, key: &str) -> Option<PropertyDescriptor> {
        self.properties.get(key).map(Property::to_descriptor)
    }

    /// Data lookup through the prototype chain.
    pub fn lookup(obj: &ObjectRef, key: &str) -> Option<JsValue> {
        let mut current = Some(obj.clone());
        while let Some(candidate) = current {
            let borrowed = candidate.borrow();
            if let Some(prop) = borrowed.properties.get(key) {
                return Some(if prop.is_accessor() {
                    JsValue::Undefined
                } else {
                    prop.value.clone()
                });
            }
            current = borrowed.prototype.clone();
        }
        None
    }

    /// Find the slot for `key` on `obj` or its prototype chain.
    pub fn find_property(obj: &ObjectRef, key: &str) -> Option<Property> {
        let mut current = Some(obj.clone());
        while let Some(candidate) = current {
            let borrowed = candidate.borrow();
            if let Some(prop) = borrowed.properties.get(key) {
                return Some(prop.clone());
            }
            current = borrowed.prototype.clone();
        }
        None
    }

    pub fn has_property(obj: &ObjectRef, key: &str) -> bool {
        Self::find_property(obj, key).is_some()
    }

    /// Define (or redefine) an own property. Absent descriptor fields keep the
    /// current attribute; switching between data and accessor resets the
    /// other half. Incompatible changes to non-configurable slots fail.
    pub fn define_own_property(
        &mut self,
        key: &str,
        desc: &PropertyDescriptor,
    ) -> Result<(), RuntimeError> {
        let Some(current) = self.properties.get(key).cloned() else {
            self.properties
                .insert(key.to_string(), Property::from_descriptor(desc));
            return Ok(());
        };

        if !current.configurable {
            check_non_configurable_redefinition(key, &current, desc)?;
        }

        let mut next = current;
        if desc.is_accessor_descriptor() && !next.is_accessor() {
            next.value = JsValue::Undefined;
            next.writable = false;
            next.accessor = true;
        } else if desc.is_data_descriptor() && next.is_accessor() {
            next.getter = None;
            next.setter = None;
            next.writable = false;
            next.accessor = false;
        }

        if let Some(value) = &desc.value {
            next.value = value.clone();
        }
        if let Some(writable) = desc.writable {
            next.writable = writable;
        }
        if let Some(get) = &desc.get {
            next.getter = Some(get.clone()).filter(|g| !g.is_undefined());
        }
        if let Some(set) = &desc.set {
            next.setter = Some(set.clone()).filter(|s| !s.is_undefined());
        }
        if let Some(enumerable) = desc.enumerable {
            next.enumerable = enumerable;
        }
        if let Some(configurable) = desc.configurable {
            next.configurable = configurable;
        }

        self.properties.insert(key.to_string(), next);
        Ok(())
    }
}

fn check_non_configurable_redefinition(
    key: &str,
    current: &Property,
    desc: &PropertyDescriptor,
) -> Result<(), RuntimeError> {
    let reject = || RuntimeError::type_error(format!("cannot redefine property: {key}"));

    if desc.configurable == Some(true) {
        return Err(reject());
    }
    if desc.enumerable.is_some_and(|e| e != current.enumerable) {
        return Err(reject());
    }
    if desc.is_generic_descriptor() {
        return Ok(());
    }
    if desc.is_accessor_descriptor() != current.is_accessor() {
        return Err(reject());
    }

    if current.is_accessor() {
        let differs = |requested: &Option<JsValue>, existing: &Option<JsValue>| {
            requested.as_ref().is_some_and(|r| {
                existing.as_ref().unwrap_or(&JsValue::Undefined) != r
            })
        };
        if differs(&desc.get, &current.getter) || differs(&desc.set, &current.setter) {
            return Err(reject());
        }
    } else if !current.writable {
        if desc.writable == Some(true) {
            return Err(reject());
        }
        if desc.value.as_ref().is_some_and(|v| *v != current.value) {
            return Err(reject());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_both_accessor_halves_keeps_the_slot_an_accessor() {
        let getter = JsValue::native_function(
            "get",
            NativeFunctionBoxed::from_closure(|_| Ok(JsValue::Number(1.0))),
        );
        let mut obj = JsObject::new();
        obj.define_own_property(
            "x",
            &PropertyDescriptor::accessor(Some(getter), None, true, true),
        )
        .expect("define");
        obj.define_own_property(
            "x",
            &PropertyDescriptor {
                get: Some(JsValue::Undefined),
                set: Some(JsValue::Undefined),
                ..PropertyDescriptor::default()
            },
        )
        .expect("redefine");

        let desc = obj.get_own_property("x").expect("x");
        assert!(desc.is_accessor_descriptor());
        assert!(!desc.is_data_descriptor());
    }

    #[test]
    fn data_descriptor_turns_an_accessor_back_into_data() {
        let mut obj = JsObject::new();
        obj.define_own_property(
            "x",
            &PropertyDescriptor::accessor(None, Some(JsValue::Undefined), true, true),
        )
        .expect("define");
        obj.define_own_property("x", &PropertyDescriptor::data(JsValue::Number(2.0), true, true, true))
            .expect("redefine");

        assert_eq!(
            obj.get_own_property("x"),
            Some(PropertyDescriptor::data(JsValue::Number(2.0), true, true, true))
        );
    }
}
