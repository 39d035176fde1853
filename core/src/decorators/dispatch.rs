use serde::Serialize;
use tracing::{debug, instrument};

use super::compose::{MemberSite, fold_class, fold_member};
use super::descriptor::{
    ClassObjects, DeclarationContext, MemberImplementation, Placement, Target,
    build_default_descriptor, resolve_target,
};
use super::evaluate::evaluate_decorators;
use super::host::DecoratorHost;
use super::install::{install_class, install_member};
use super::trace::{DescriptorShape, Step, Trace};
use crate::ast::Decorator;
use crate::config::EngineConfig;
use crate::errors::DecoratorError;
use crate::runtime::value::object::PropertyDescriptor;
use crate::runtime::value::{JsValue, ObjectRef};

/// A decorated declaration, already classified into one of the five shapes
/// the core knows how to desugar.
#[derive(Debug, Clone)]
pub enum Declaration {
    Class {
        name: String,
        constructor: ObjectRef,
    },
    ClassMethod {
        class: ClassObjects,
        placement: Placement,
        key: String,
        method: JsValue,
    },
    ClassAccessor {
        class: ClassObjects,
        placement: Placement,
        key: String,
        get: Option<JsValue>,
        set: Option<JsValue>,
    },
    LiteralMethod {
        object: ObjectRef,
        key: String,
        method: JsValue,
    },
    LiteralAccessor {
        object: ObjectRef,
        key: String,
        get: Option<JsValue>,
        set: Option<JsValue>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Class,
    ClassMethod,
    ClassAccessor,
    LiteralMethod,
    LiteralAccessor,
}

impl Declaration {
    /// Class name or member key.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class { name, .. } => name,
            Declaration::ClassMethod { key, .. }
            | Declaration::ClassAccessor { key, .. }
            | Declaration::LiteralMethod { key, .. }
            | Declaration::LiteralAccessor { key, .. } => key,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Declaration::Class { .. } => Shape::Class,
            Declaration::ClassMethod { .. } => Shape::ClassMethod,
            Declaration::ClassAccessor { .. } => Shape::ClassAccessor,
            Declaration::LiteralMethod { .. } => Shape::LiteralMethod,
            Declaration::LiteralAccessor { .. } => Shape::LiteralAccessor,
        }
    }
}

/// What a member looks like before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberDefinition {
    Method(JsValue),
    Accessor {
        get: Option<JsValue>,
        set: Option<JsValue>,
    },
    /// Class field with its initial value.
    Field(JsValue),
    /// Plain `key: value` entry of an object literal.
    Property(JsValue),
}

impl MemberDefinition {
    /// The callables to install, for methods and accessors.
    pub fn implementation(&self) -> Option<MemberImplementation> {
        match self {
            MemberDefinition::Method(method) => Some(MemberImplementation::Method(method.clone())),
            MemberDefinition::Accessor { get, set } => Some(MemberImplementation::Accessor {
                get: get.clone(),
                set: set.clone(),
            }),
            MemberDefinition::Field(_) | MemberDefinition::Property(_) => None,
        }
    }
}

pub fn classify_class_member(
    class: &ClassObjects,
    placement: Placement,
    key: &str,
    definition: MemberDefinition,
) -> Result<Declaration, DecoratorError> {
    match definition {
        MemberDefinition::Method(method) => Ok(Declaration::ClassMethod {
            class: class.clone(),
            placement,
            key: key.to_string(),
            method,
        }),
        MemberDefinition::Accessor { get, set } => Ok(Declaration::ClassAccessor {
            class: class.clone(),
            placement,
            key: key.to_string(),
            get,
            set,
        }),
        MemberDefinition::Field(_) => Err(DecoratorError::unrecognized(format!(
            "decorated class field '{key}'"
        ))),
        MemberDefinition::Property(_) => Err(DecoratorError::unrecognized(format!(
            "plain property '{key}' in a class body"
        ))),
    }
}

pub fn classify_literal_member(
    object: &ObjectRef,
    key: &str,
    definition: MemberDefinition,
) -> Result<Declaration, DecoratorError> {
    match definition {
        MemberDefinition::Method(method) => Ok(Declaration::LiteralMethod {
            object: object.clone(),
            key: key.to_string(),
            method,
        }),
        MemberDefinition::Accessor { get, set } => Ok(Declaration::LiteralAccessor {
            object: object.clone(),
            key: key.to_string(),
            get,
            set,
        }),
        MemberDefinition::Property(_) => Err(DecoratorError::unrecognized(format!(
            "decorated object-literal property '{key}'"
        ))),
        MemberDefinition::Field(_) => Err(DecoratorError::unrecognized(format!(
            "class field '{key}' in an object literal"
        ))),
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    /// The folded descriptor was defined on the target.
    Installed {
        target: Target,
        key: String,
        descriptor: PropertyDescriptor,
    },
    /// Nothing to install; the declaration's own definition stands.
    Unchanged { key: String },
    /// The class name now refers to `constructor`.
    Rebound { name: String, constructor: JsValue },
}

#[derive(Debug, Clone)]
pub struct Decorated {
    pub outcome: Outcome,
    pub trace: Trace,
}

/// Desugar one decorated declaration: build its initial value, evaluate the
/// decorator list, fold, and install.
#[instrument(skip_all, fields(shape = ?declaration.shape(), decl = declaration.name()))]
pub fn decorate<H: DecoratorHost + ?Sized>(
    host: &mut H,
    declaration: &Declaration,
    decorators: &[Decorator],
    config: &EngineConfig,
) -> Result<Decorated, DecoratorError> {
    let mut steps = Trace::new(config.record_trace);
    if decorators.is_empty() {
        return Ok(Decorated {
            outcome: Outcome::Unchanged {
                key: declaration.name().to_string(),
            },
            trace: steps,
        });
    }

    let view = match declaration {
        Declaration::Class { name, constructor } => {
            let target = resolve_target(DeclarationContext::Class { constructor });
            steps.push(Step::BuildClass { name: name.clone() });

            let functions = evaluate_decorators(host, name, decorators, config, &mut steps)?;
            let constructor = fold_class(
                host,
                name,
                decorators,
                &functions,
                target.to_value(),
                &mut steps,
            )?;
            if target.to_value() == constructor {
                debug!(name = %name, "constructor kept, binding untouched");
                return Ok(Decorated {
                    outcome: Outcome::Unchanged { key: name.clone() },
                    trace: steps,
                });
            }
            install_class(host, name, &constructor, &mut steps)?;
            return Ok(Decorated {
                outcome: Outcome::Rebound {
                    name: name.clone(),
                    constructor,
                },
                trace: steps,
            });
        }
        Declaration::ClassMethod {
            class,
            placement,
            key,
            method,
        } => MemberView::new(
            DeclarationContext::ClassMember {
                class,
                placement: *placement,
            },
            key,
            MemberImplementation::Method(method.clone()),
        ),
        Declaration::ClassAccessor {
            class,
            placement,
            key,
            get,
            set,
        } => MemberView::new(
            DeclarationContext::ClassMember {
                class,
                placement: *placement,
            },
            key,
            MemberImplementation::Accessor {
                get: get.clone(),
                set: set.clone(),
            },
        ),
        Declaration::LiteralMethod {
            object,
            key,
            method,
        } => MemberView::new(
            DeclarationContext::LiteralMember { object },
            key,
            MemberImplementation::Method(method.clone()),
        ),
        Declaration::LiteralAccessor {
            object,
            key,
            get,
            set,
        } => MemberView::new(
            DeclarationContext::LiteralMember { object },
            key,
            MemberImplementation::Accessor {
                get: get.clone(),
                set: set.clone(),
            },
        ),
    };

    let outcome = decorate_member(host, view, decorators, config, &mut steps)?;
    Ok(Decorated {
        outcome,
        trace: steps,
    })
}

struct MemberView<'a> {
    context: DeclarationContext<'a>,
    key: String,
    implementation: MemberImplementation,
}

impl<'a> MemberView<'a> {
    fn new(context: DeclarationContext<'a>, key: &str, implementation: MemberImplementation) -> Self {
        Self {
            context,
            key: key.to_string(),
            implementation,
        }
    }
}

fn decorate_member<H: DecoratorHost + ?Sized>(
    host: &mut H,
    view: MemberView<'_>,
    decorators: &[Decorator],
    config: &EngineConfig,
    steps: &mut Trace,
) -> Result<Outcome, DecoratorError> {
    let MemberView {
        context,
        key,
        implementation,
    } = view;

    // Literal members were already defined by the literal; decorators start
    // from the absent marker rather than from a synthesized descriptor.
    let initial = match context {
        DeclarationContext::LiteralMember { .. } => {
            implementation.validate(&key)?;
            None
        }
        _ => Some(build_default_descriptor(&key, &implementation)?),
    };
    steps.push(Step::BuildDescriptor {
        key: key.clone(),
        descriptor: initial.as_ref().map(DescriptorShape::of),
    });

    let target = resolve_target(context);
    let functions = evaluate_decorators(host, &key, decorators, config, steps)?;
    let site = MemberSite {
        target: &target,
        key: &key,
        decorators,
    };
    let folded = fold_member(host, &site, &functions, initial, steps)?;
    debug!(key = %key, present = folded.is_some(), "composition finished");

    Ok(
        match install_member(&target, &key, implementation.kind(), folded, steps)? {
            Some(descriptor) => Outcome::Installed {
                target,
                key,
                descriptor,
            },
            None => Outcome::Unchanged { key },
        },
    )
}
