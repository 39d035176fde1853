use super::Interpreter;
use super::members::{MemberGroup, SlotKind, push_member};
use crate::ast::{ObjectLiteral, ObjectMemberKind};
use crate::decorators::{
    MemberDefinition, Placement, classify_literal_member, literal_property_descriptor,
};
use crate::errors::{DecoratorError, RuntimeError};
use crate::runtime::value::JsValue;
use crate::runtime::value::object::{JsObject, PropertyDescriptor};

impl Interpreter {
    /// Build the object with every member defined, then run member decorators
    /// in source order.
    pub(crate) fn eval_object_literal(
        &mut self,
        literal: &ObjectLiteral,
    ) -> Result<JsValue, RuntimeError> {
        let mut groups = Vec::new();
        for member in &literal.members {
            let value = self.eval_expr(&member.value)?;
            let kind = match member.kind {
                ObjectMemberKind::Property => SlotKind::Property,
                ObjectMemberKind::Method => SlotKind::Method,
                ObjectMemberKind::Getter => SlotKind::Getter,
                ObjectMemberKind::Setter => SlotKind::Setter,
            };
            if kind != SlotKind::Property && !value.is_callable() {
                return Err(RuntimeError::type_error(format!(
                    "object member '{}' must be a function",
                    member.key
                )));
            }
            push_member(
                &mut groups,
                &member.key,
                Placement::Instance,
                kind,
                value,
                &member.decorators,
            );
        }

        let object = JsObject::new().wrapped();
        for group in &groups {
            let descriptor = literal_descriptor(group)?;
            object
                .borrow_mut()
                .define_own_property(&group.key, &descriptor)?;
        }

        for group in groups.iter().filter(|g| !g.decorators.is_empty()) {
            let declaration =
                classify_literal_member(&object, &group.key, group.definition.clone())?;
            self.decorate(&declaration, &group.decorators)?;
        }

        Ok(JsValue::Object(object))
    }
}

fn literal_descriptor(group: &MemberGroup) -> Result<PropertyDescriptor, DecoratorError> {
    match &group.definition {
        MemberDefinition::Property(value) | MemberDefinition::Field(value) => {
            Ok(PropertyDescriptor::data(value.clone(), true, true, true))
        }
        definition => match definition.implementation() {
            Some(implementation) => literal_property_descriptor(&group.key, &implementation),
            None => Ok(PropertyDescriptor::default()),
        },
    }
}
