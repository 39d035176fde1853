use tracing::{trace, warn};

use super::descriptor::Target;
use super::evaluate::{DecoratorFunction, span_of};
use super::host::DecoratorHost;
use super::trace::{Step, Trace};
use crate::ast::Decorator;
use crate::errors::{DecoratorError, Phase, RuntimeError};
use crate::runtime::value::JsValue;
use crate::runtime::value::object::{DescriptorReadError, PropertyDescriptor};

/// Fold `count` application steps over `initial`, last index first, so the
/// decorator written closest to the declaration sees the original value.
/// A step returning `None` carries the current value forward untouched.
pub fn compose<V, E>(
    count: usize,
    initial: V,
    mut apply: impl FnMut(usize, &V) -> Result<Option<V>, E>,
) -> Result<V, E> {
    (0..count).rev().try_fold(initial, |current, index| {
        Ok(apply(index, &current)?.unwrap_or(current))
    })
}

pub(crate) struct MemberSite<'a> {
    pub target: &'a Target,
    pub key: &'a str,
    pub decorators: &'a [Decorator],
}

/// Thread a member descriptor through `(target, key, descriptor)` calls.
/// `None` is the absent marker and reaches the decorator as `undefined`.
pub(crate) fn fold_member<H: DecoratorHost + ?Sized>(
    host: &mut H,
    site: &MemberSite<'_>,
    functions: &[DecoratorFunction],
    initial: Option<PropertyDescriptor>,
    steps: &mut Trace,
) -> Result<Option<PropertyDescriptor>, DecoratorError> {
    compose(functions.len(), initial, |index, current| {
        let function = match &functions[index] {
            DecoratorFunction::Callable(function) => function,
            DecoratorFunction::Ambient { label } => {
                skip_ambient(steps, index, label);
                return Ok(None);
            }
        };

        steps.push(Step::Apply { index });
        let descriptor = current
            .as_ref()
            .map_or(JsValue::Undefined, PropertyDescriptor::to_value);
        let result = host
            .call(
                function,
                JsValue::Undefined,
                vec![
                    site.target.to_value(),
                    JsValue::String(site.key.to_string()),
                    descriptor,
                ],
            )
            .map_err(|source| apply_error(site.key, site.decorators, index, source))?;

        let replacement = member_replacement(host, site, index, result)?;
        record_outcome(steps, index, replacement.is_some());
        Ok(replacement.map(Some))
    })
}

/// Thread a constructor through `(constructor)` calls.
pub(crate) fn fold_class<H: DecoratorHost + ?Sized>(
    host: &mut H,
    name: &str,
    decorators: &[Decorator],
    functions: &[DecoratorFunction],
    constructor: JsValue,
    steps: &mut Trace,
) -> Result<JsValue, DecoratorError> {
    compose(functions.len(), constructor, |index, current| {
        let function = match &functions[index] {
            DecoratorFunction::Callable(function) => function,
            DecoratorFunction::Ambient { label } => {
                skip_ambient(steps, index, label);
                return Ok(None);
            }
        };

        steps.push(Step::Apply { index });
        let result = host
            .call(function, JsValue::Undefined, vec![current.clone()])
            .map_err(|source| apply_error(name, decorators, index, source))?;

        let replacement = class_replacement(name, result)?;
        record_outcome(steps, index, replacement.is_some());
        Ok(replacement)
    })
}

/// Failure while reading a returned descriptor object.
enum ReadFailure {
    Shape(DescriptorReadError),
    Getter(RuntimeError),
}

impl From<DescriptorReadError> for ReadFailure {
    fn from(err: DescriptorReadError) -> Self {
        ReadFailure::Shape(err)
    }
}

fn member_replacement<H: DecoratorHost + ?Sized>(
    host: &mut H,
    site: &MemberSite<'_>,
    index: usize,
    result: JsValue,
) -> Result<Option<PropertyDescriptor>, DecoratorError> {
    if result.is_undefined() {
        return Ok(None);
    }
    PropertyDescriptor::read_with(&result, |name| {
        host.get(&result, name).map_err(ReadFailure::Getter)
    })
    .map(Some)
    .map_err(|failure| match failure {
        ReadFailure::Shape(err) => DecoratorError::malformed(site.key, err.to_string()),
        ReadFailure::Getter(source) => apply_error(site.key, site.decorators, index, source),
    })
}

fn class_replacement(name: &str, result: JsValue) -> Result<Option<JsValue>, DecoratorError> {
    match result {
        JsValue::Undefined => Ok(None),
        value if value.is_callable() => Ok(Some(value)),
        JsValue::Null => Err(DecoratorError::InvalidClassReplacement {
            class_name: name.to_string(),
            found: "null",
        }),
        other => Err(DecoratorError::InvalidClassReplacement {
            class_name: name.to_string(),
            found: other.type_of(),
        }),
    }
}

fn apply_error(
    key: &str,
    decorators: &[Decorator],
    index: usize,
    source: RuntimeError,
) -> DecoratorError {
    DecoratorError::Evaluation {
        key: key.to_string(),
        index,
        phase: Phase::Apply,
        span: span_of(decorators, index),
        source,
    }
}

fn skip_ambient(steps: &mut Trace, index: usize, label: &str) {
    warn!(index, label, "ambient decorator skipped");
    steps.push(Step::SkipAmbient {
        index,
        label: label.to_string(),
    });
}

fn record_outcome(steps: &mut Trace, index: usize, replaced: bool) {
    trace!(index, replaced, "decorator applied");
    steps.push(if replaced {
        Step::Replace { index }
    } else {
        Step::Keep { index }
    });
}
