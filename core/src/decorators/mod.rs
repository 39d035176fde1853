//! Decorator desugaring.
//!
//! A decorated declaration is processed in four stages:
//!
//! 1. [`dispatch`] classifies it and builds the initial value: the default
//!    descriptor for class members, the absent marker for object-literal
//!    members, the constructor for classes.
//! 2. [`evaluate`] evaluates the decorator expressions top to bottom, once each.
//! 3. [`compose`] applies the resulting functions bottom to top, so
//!    `@a @b m() {}` installs `a(b(default))`. A decorator returning
//!    `undefined` leaves the current value alone.
//! 4. [`install`] defines the final descriptor on its target, or rebinds the
//!    class name to the final constructor.

pub mod compose;
pub mod descriptor;
pub mod dispatch;
pub mod evaluate;
pub mod host;
pub mod install;
pub mod trace;

pub use compose::compose;
pub use descriptor::{
    ClassObjects, DeclarationContext, MemberImplementation, MemberKind, Placement, Target,
    TargetKind, build_default_descriptor, literal_property_descriptor, resolve_target,
};
pub use dispatch::{
    Declaration, Decorated, MemberDefinition, Outcome, Shape, classify_class_member,
    classify_literal_member, decorate,
};
pub use evaluate::{DecoratorFunction, evaluate_decorators};
pub use host::DecoratorHost;
pub use install::validate_descriptor;
pub use trace::{DescriptorKind, DescriptorShape, Step, Trace};
