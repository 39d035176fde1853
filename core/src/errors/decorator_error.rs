use std::fmt;

use miette::{Diagnostic, SourceSpan};
use serde::Serialize;
use thiserror::Error;

use super::RuntimeError;

/// Which half of the decorator protocol was running when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Evaluating the decorator expression (including factory calls).
    Evaluate,
    /// Invoking the evaluated decorator function.
    Apply,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Evaluate => f.write_str("evaluate"),
            Phase::Apply => f.write_str("apply"),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum DecoratorError {
    #[error("malformed descriptor for '{key}': {reason}")]
    #[diagnostic(
        code(crustyjs::decorators::malformed_descriptor),
        help("member decorators must return a data or accessor descriptor object, or undefined")
    )]
    MalformedDescriptor { key: String, reason: String },

    #[error("decorator #{index} of '{key}' failed to {phase}")]
    #[diagnostic(code(crustyjs::decorators::evaluation))]
    Evaluation {
        key: String,
        index: usize,
        phase: Phase,
        #[label("raised here")]
        span: Option<SourceSpan>,
        #[source]
        source: RuntimeError,
    },

    #[error("unrecognized declaration shape: {description}")]
    #[diagnostic(
        code(crustyjs::decorators::unrecognized_shape),
        help("decorators apply to classes, class methods/accessors and object-literal methods/accessors")
    )]
    UnrecognizedDeclarationShape { description: String },

    #[error("class decorator on '{class_name}' returned {found}, expected a constructor or undefined")]
    #[diagnostic(code(crustyjs::decorators::invalid_class_replacement))]
    InvalidClassReplacement {
        class_name: String,
        found: &'static str,
    },

    #[error("ambient decorator #{index} on '{key}' rejected by configuration")]
    #[diagnostic(code(crustyjs::decorators::ambient))]
    AmbientDecorator {
        key: String,
        index: usize,
        #[label("ambient decorator")]
        span: Option<SourceSpan>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}

impl DecoratorError {
    pub(crate) fn malformed(key: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unrecognized(description: impl Into<String>) -> Self {
        Self::UnrecognizedDeclarationShape {
            description: description.into(),
        }
    }
}
