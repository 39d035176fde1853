use tracing::debug;

use super::Interpreter;
use super::members::{MemberGroup, SlotKind, push_member};
use crate::ast::{ClassDecl, ClassMemberKind, Expr};
use crate::decorators::{
    ClassObjects, Declaration, DeclarationContext, MemberDefinition, Placement,
    build_default_descriptor, classify_class_member, resolve_target,
};
use crate::embedding::callback::NativeFunctionBoxed;
use crate::errors::RuntimeError;
use crate::runtime::value::object::{JsObject, PropertyDescriptor};
use crate::runtime::value::{JsValue, ObjectRef};

impl Interpreter {
    /// Evaluate a class declaration: install every member with its default
    /// attributes, bind the name, then run member decorators in source order
    /// and finally the class decorators.
    pub(crate) fn eval_class_decl(&mut self, class_decl: &ClassDecl) -> Result<JsValue, RuntimeError> {
        let parent = class_decl
            .parent
            .as_ref()
            .map(|expr| self.eval_parent_class(expr, &class_decl.name))
            .transpose()?;
        let class = self.create_class_objects(class_decl, parent)?;
        let groups = self.collect_class_members(class_decl)?;

        for group in &groups {
            install_class_member(&class, group)?;
        }
        self.env.define(
            class_decl.name.clone(),
            JsValue::Object(class.constructor.clone()),
        );

        for group in groups.iter().filter(|g| !g.decorators.is_empty()) {
            let declaration = classify_class_member(
                &class,
                group.placement,
                &group.key,
                group.definition.clone(),
            )?;
            self.decorate(&declaration, &group.decorators)?;
        }

        if !class_decl.decorators.is_empty() {
            let declaration = Declaration::Class {
                name: class_decl.name.clone(),
                constructor: class.constructor.clone(),
            };
            self.decorate(&declaration, &class_decl.decorators)?;
        }

        self.env.get(&class_decl.name)
    }

    fn eval_parent_class(
        &mut self,
        expr: &Expr,
        class_name: &str,
    ) -> Result<(ObjectRef, Option<ObjectRef>), RuntimeError> {
        let parent = self.eval_expr(expr)?;
        let constructor = match parent.as_object() {
            Some(obj) if obj.borrow().is_callable() => obj.clone(),
            _ => {
                return Err(RuntimeError::type_error(format!(
                    "class '{class_name}' extends value {parent} which is not a constructor"
                )));
            }
        };
        let prototype = match parent.get("prototype") {
            JsValue::Object(proto) => Some(proto),
            JsValue::Null => None,
            other => {
                return Err(RuntimeError::type_error(format!(
                    "class '{class_name}' parent prototype is not an object or null: {other}"
                )));
            }
        };
        Ok((constructor, prototype))
    }

    fn create_class_objects(
        &mut self,
        class_decl: &ClassDecl,
        parent: Option<(ObjectRef, Option<ObjectRef>)>,
    ) -> Result<ClassObjects, RuntimeError> {
        let handler = match &class_decl.constructor {
            Some(expr) => {
                let value = self.eval_expr(expr)?;
                value
                    .as_object()
                    .and_then(|obj| obj.borrow().handler().cloned())
                    .ok_or_else(|| {
                        RuntimeError::type_error(format!(
                            "constructor of class '{}' must be a function",
                            class_decl.name
                        ))
                    })?
            }
            None => NativeFunctionBoxed::from_closure(|_| Ok(JsValue::Undefined)),
        };

        let (parent_constructor, parent_prototype) = parent.unzip();
        let mut prototype = JsObject::new();
        prototype.prototype = parent_prototype.flatten();
        let prototype = prototype.wrapped();

        let mut constructor = JsObject::function(class_decl.name.clone(), handler);
        constructor.prototype = parent_constructor;
        constructor.define_own_property(
            "prototype",
            &PropertyDescriptor::data(JsValue::Object(prototype.clone()), false, false, false),
        )?;

        Ok(ClassObjects {
            constructor: constructor.wrapped(),
            prototype,
        })
    }

    fn collect_class_members(
        &mut self,
        class_decl: &ClassDecl,
    ) -> Result<Vec<MemberGroup>, RuntimeError> {
        let mut groups = Vec::new();
        for member in &class_decl.members {
            let placement = if member.is_static {
                Placement::Static
            } else {
                Placement::Instance
            };
            let kind = match member.kind {
                ClassMemberKind::Method => SlotKind::Method,
                ClassMemberKind::Getter => SlotKind::Getter,
                ClassMemberKind::Setter => SlotKind::Setter,
                ClassMemberKind::Field => SlotKind::Field,
            };
            // Instance field initializers run per instance, not at definition.
            let value = if kind == SlotKind::Field && !member.is_static {
                JsValue::Undefined
            } else {
                self.eval_expr(&member.value)?
            };
            if kind != SlotKind::Field && !value.is_callable() {
                return Err(RuntimeError::type_error(format!(
                    "member '{}' of class '{}' must be a function",
                    member.key, class_decl.name
                )));
            }
            push_member(
                &mut groups,
                &member.key,
                placement,
                kind,
                value,
                &member.decorators,
            );
        }
        Ok(groups)
    }
}

fn install_class_member(class: &ClassObjects, group: &MemberGroup) -> Result<(), RuntimeError> {
    let descriptor = match (&group.definition, group.placement) {
        (MemberDefinition::Field(value), Placement::Static) => {
            PropertyDescriptor::data(value.clone(), true, true, true)
        }
        (MemberDefinition::Field(_), Placement::Instance) => {
            debug!(key = %group.key, "instance field left for construction time");
            return Ok(());
        }
        (definition, _) => match definition.implementation() {
            Some(implementation) => build_default_descriptor(&group.key, &implementation)?,
            None => return Ok(()),
        },
    };

    let target = resolve_target(DeclarationContext::ClassMember {
        class,
        placement: group.placement,
    });
    target
        .object()
        .borrow_mut()
        .define_own_property(&group.key, &descriptor)
}
