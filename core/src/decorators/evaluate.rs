use miette::SourceSpan;
use tracing::debug;

use super::host::DecoratorHost;
use super::trace::{Step, Trace};
use crate::ast::Decorator;
use crate::config::{AmbientPolicy, EngineConfig};
use crate::errors::{DecoratorError, Phase};
use crate::runtime::value::JsValue;

/// The value a decorator expression produced.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoratorFunction {
    Callable(JsValue),
    /// Analysis-only decorator: never evaluated, never invoked.
    Ambient { label: String },
}

/// Evaluate every expression of `decorators` once, top to bottom. The whole
/// list is evaluated before anything is applied, and the first failure stops
/// evaluation of the rest.
pub fn evaluate_decorators<H: DecoratorHost + ?Sized>(
    host: &mut H,
    key: &str,
    decorators: &[Decorator],
    config: &EngineConfig,
    trace: &mut Trace,
) -> Result<Vec<DecoratorFunction>, DecoratorError> {
    if config.ambient == AmbientPolicy::Reject
        && let Some(index) = decorators.iter().position(|d| d.ambient)
    {
        return Err(DecoratorError::AmbientDecorator {
            key: key.to_string(),
            index,
            span: span_of(decorators, index),
        });
    }

    let mut functions = Vec::with_capacity(decorators.len());
    for (index, decorator) in decorators.iter().enumerate() {
        if decorator.ambient {
            functions.push(DecoratorFunction::Ambient {
                label: decorator.expression.to_string(),
            });
            continue;
        }

        trace.push(Step::Evaluate { index });
        debug!(index, expression = %decorator.expression, "evaluating decorator");
        let value = host
            .evaluate(&decorator.expression)
            .map_err(|source| DecoratorError::Evaluation {
                key: key.to_string(),
                index,
                phase: Phase::Evaluate,
                span: span_of(decorators, index),
                source,
            })?;
        functions.push(DecoratorFunction::Callable(value));
    }
    Ok(functions)
}

pub(crate) fn span_of(decorators: &[Decorator], index: usize) -> Option<SourceSpan> {
    decorators
        .get(index)
        .and_then(|d| d.span)
        .map(SourceSpan::from)
}
