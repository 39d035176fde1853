//! Default descriptors and target resolution.
//!
//! Both helpers are shared with undecorated declarations so that decorated
//! and plain members start from the same attributes.

use serde::Serialize;

use crate::errors::DecoratorError;
use crate::runtime::value::object::PropertyDescriptor;
use crate::runtime::value::{JsValue, ObjectRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Accessor,
}

/// The callables a member declaration installs.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberImplementation {
    Method(JsValue),
    Accessor {
        get: Option<JsValue>,
        set: Option<JsValue>,
    },
}

impl MemberImplementation {
    pub fn kind(&self) -> MemberKind {
        match self {
            MemberImplementation::Method(_) => MemberKind::Method,
            MemberImplementation::Accessor { .. } => MemberKind::Accessor,
        }
    }

    pub(crate) fn validate(&self, key: &str) -> Result<(), DecoratorError> {
        match self {
            MemberImplementation::Accessor {
                get: None,
                set: None,
            } => Err(DecoratorError::malformed(
                key,
                "accessor has neither a getter nor a setter",
            )),
            _ => Ok(()),
        }
    }
}

/// Attributes a class member is installed with before any decorator runs:
/// methods are non-enumerable and writable, accessors are enumerable.
pub fn build_default_descriptor(
    key: &str,
    implementation: &MemberImplementation,
) -> Result<PropertyDescriptor, DecoratorError> {
    implementation.validate(key)?;
    Ok(match implementation {
        MemberImplementation::Method(value) => {
            PropertyDescriptor::data(value.clone(), true, false, true)
        }
        MemberImplementation::Accessor { get, set } => {
            PropertyDescriptor::accessor(get.clone(), set.clone(), true, true)
        }
    })
}

/// Attributes an object-literal member is defined with by the literal itself.
pub fn literal_property_descriptor(
    key: &str,
    implementation: &MemberImplementation,
) -> Result<PropertyDescriptor, DecoratorError> {
    implementation.validate(key)?;
    Ok(match implementation {
        MemberImplementation::Method(value) => {
            PropertyDescriptor::data(value.clone(), true, true, true)
        }
        MemberImplementation::Accessor { get, set } => {
            PropertyDescriptor::accessor(get.clone(), set.clone(), true, true)
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Instance,
    Static,
}

/// The two objects a class declaration produces.
#[derive(Debug, Clone)]
pub struct ClassObjects {
    pub constructor: ObjectRef,
    pub prototype: ObjectRef,
}

/// Where a declaration sits, as far as target resolution cares.
#[derive(Debug, Clone, Copy)]
pub enum DeclarationContext<'a> {
    Class {
        constructor: &'a ObjectRef,
    },
    ClassMember {
        class: &'a ClassObjects,
        placement: Placement,
    },
    LiteralMember {
        object: &'a ObjectRef,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    ClassConstructor,
    PrototypeObject,
    LiteralObject,
}

/// The object a descriptor or constructor ends up on. Static members target
/// the constructor itself; there is no separate static kind.
#[derive(Debug, Clone)]
pub struct Target {
    kind: TargetKind,
    object: ObjectRef,
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    pub fn to_value(&self) -> JsValue {
        JsValue::Object(self.object.clone())
    }

    /// Identity comparison against another object handle.
    pub fn is(&self, object: &ObjectRef) -> bool {
        std::rc::Rc::ptr_eq(&self.object, object)
    }
}

pub fn resolve_target(context: DeclarationContext<'_>) -> Target {
    let (kind, object) = match context {
        DeclarationContext::Class { constructor } => (TargetKind::ClassConstructor, constructor),
        DeclarationContext::ClassMember {
            class,
            placement: Placement::Static,
        } => (TargetKind::ClassConstructor, &class.constructor),
        DeclarationContext::ClassMember {
            class,
            placement: Placement::Instance,
        } => (TargetKind::PrototypeObject, &class.prototype),
        DeclarationContext::LiteralMember { object } => (TargetKind::LiteralObject, object),
    };
    Target {
        kind,
        object: object.clone(),
    }
}
