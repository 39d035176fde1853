use std::collections::HashMap;

use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Let,
    Const,
    Var,
}

#[derive(Debug, Clone)]
struct Binding {
    value: JsValue,
    kind: BindingKind,
}

/// Global bindings visible to decorator expressions. Class names live here
/// too, so a class decorator's replacement is observable through them.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` with `let` semantics, as class declarations do.
    pub fn define(&mut self, name: String, value: JsValue) {
        self.define_with_kind(name, value, BindingKind::Let);
    }

    pub fn define_with_kind(&mut self, name: String, value: JsValue, kind: BindingKind) {
        self.bindings.insert(name, Binding { value, kind });
    }

    pub fn get(&self, name: &str) -> Result<JsValue, RuntimeError> {
        self.bindings
            .get(name)
            .map(|binding| binding.value.clone())
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Point an existing binding at `value`. `const` bindings refuse.
    pub fn set(&mut self, name: &str, value: JsValue) -> Result<(), RuntimeError> {
        let binding = self
            .bindings
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable {
                name: name.to_string(),
            })?;
        if binding.kind == BindingKind::Const {
            return Err(RuntimeError::ConstReassignment {
                name: name.to_string(),
            });
        }
        binding.value = value;
        Ok(())
    }
}
