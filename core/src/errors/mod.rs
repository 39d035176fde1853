mod decorator_error;
mod runtime_error;

pub use decorator_error::{DecoratorError, Phase};
pub use runtime_error::RuntimeError;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for the embedding facade.
#[derive(Debug, Error, Diagnostic)]
pub enum CrustyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(RuntimeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decorator(#[from] DecoratorError),
}

impl From<RuntimeError> for CrustyError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Decoration(inner) => CrustyError::Decorator(*inner),
            other => CrustyError::Runtime(other),
        }
    }
}
