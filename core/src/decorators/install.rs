use tracing::debug;

use super::descriptor::{MemberKind, Target};
use super::host::DecoratorHost;
use super::trace::{DescriptorShape, Step, Trace};
use crate::errors::DecoratorError;
use crate::runtime::value::JsValue;
use crate::runtime::value::object::PropertyDescriptor;

/// Reject descriptors that cannot be installed for a declaration of `kind`.
pub fn validate_descriptor(
    key: &str,
    kind: MemberKind,
    desc: &PropertyDescriptor,
) -> Result<(), DecoratorError> {
    if desc.is_mixed() {
        return Err(DecoratorError::malformed(
            key,
            "descriptor mixes value/writable with get/set",
        ));
    }
    match kind {
        MemberKind::Method if desc.is_accessor_descriptor() => Err(DecoratorError::malformed(
            key,
            "method decorator produced an accessor descriptor",
        )),
        MemberKind::Accessor if desc.is_data_descriptor() => Err(DecoratorError::malformed(
            key,
            "accessor decorator produced a data descriptor",
        )),
        _ => Ok(()),
    }
}

/// Commit the folded descriptor. An absent descriptor leaves whatever the
/// declaration itself installed in place.
pub(crate) fn install_member(
    target: &Target,
    key: &str,
    kind: MemberKind,
    descriptor: Option<PropertyDescriptor>,
    steps: &mut Trace,
) -> Result<Option<PropertyDescriptor>, DecoratorError> {
    let Some(descriptor) = descriptor else {
        debug!(key, "no descriptor after composition, install skipped");
        steps.push(Step::SkipInstall {
            key: key.to_string(),
        });
        return Ok(None);
    };

    validate_descriptor(key, kind, &descriptor)?;
    target
        .object()
        .borrow_mut()
        .define_own_property(key, &descriptor)?;

    debug!(key, target = ?target.kind(), "descriptor installed");
    steps.push(Step::Install {
        target: target.kind(),
        key: key.to_string(),
        descriptor: DescriptorShape::of(&descriptor),
    });
    Ok(Some(descriptor))
}

/// Point the class name at the folded constructor.
pub(crate) fn install_class<H: DecoratorHost + ?Sized>(
    host: &mut H,
    name: &str,
    constructor: &JsValue,
    steps: &mut Trace,
) -> Result<(), DecoratorError> {
    host.rebind(name, constructor.clone())?;
    debug!(name, "class binding updated");
    steps.push(Step::Rebind {
        name: name.to_string(),
    });
    Ok(())
}
