use miette::Diagnostic;
use thiserror::Error;

use super::DecoratorError;
use crate::runtime::value::JsValue;

#[derive(Debug, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("'{name}' is not defined")]
    #[diagnostic(code(crustyjs::undefined_variable))]
    UndefinedVariable { name: String },

    #[error("'{name}' is not a function")]
    #[diagnostic(code(crustyjs::not_a_function))]
    NotAFunction { name: String },

    #[error("assignment to constant variable '{name}'")]
    #[diagnostic(code(crustyjs::const_reassignment))]
    ConstReassignment { name: String },

    #[error("type error: {message}")]
    #[diagnostic(code(crustyjs::type_error))]
    TypeError { message: String },

    #[error("uncaught exception: {value}")]
    #[diagnostic(code(crustyjs::thrown))]
    Thrown { value: JsValue },

    /// A decorated declaration failed while evaluating an enclosing expression.
    #[error(transparent)]
    #[diagnostic(code(crustyjs::decoration))]
    Decoration(Box<DecoratorError>),
}

impl RuntimeError {
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::TypeError {
            message: message.into(),
        }
    }

    pub fn thrown(value: impl Into<JsValue>) -> Self {
        Self::Thrown {
            value: value.into(),
        }
    }
}

impl From<DecoratorError> for RuntimeError {
    fn from(err: DecoratorError) -> Self {
        match err {
            DecoratorError::Runtime(inner) => inner,
            other => RuntimeError::Decoration(Box::new(other)),
        }
    }
}
