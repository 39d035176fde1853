use serde::Serialize;

use super::descriptor::TargetKind;
use crate::runtime::value::object::PropertyDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorKind {
    Data,
    Accessor,
    Generic,
    Mixed,
}

/// Attribute summary of a descriptor, without the callables it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorShape {
    pub kind: DescriptorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumerable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurable: Option<bool>,
}

impl DescriptorShape {
    pub fn of(desc: &PropertyDescriptor) -> Self {
        let kind = if desc.is_mixed() {
            DescriptorKind::Mixed
        } else if desc.is_accessor_descriptor() {
            DescriptorKind::Accessor
        } else if desc.is_data_descriptor() {
            DescriptorKind::Data
        } else {
            DescriptorKind::Generic
        };
        Self {
            kind,
            writable: desc.writable,
            enumerable: desc.enumerable,
            configurable: desc.configurable,
        }
    }
}

/// One operation performed while desugaring a decorated declaration.
/// Decorator indices are textual positions, topmost decorator first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    BuildDescriptor {
        key: String,
        /// `None` is the absent marker used for object-literal members.
        descriptor: Option<DescriptorShape>,
    },
    BuildClass {
        name: String,
    },
    Evaluate {
        index: usize,
    },
    Apply {
        index: usize,
    },
    SkipAmbient {
        index: usize,
        label: String,
    },
    Replace {
        index: usize,
    },
    Keep {
        index: usize,
    },
    Install {
        target: TargetKind,
        key: String,
        descriptor: DescriptorShape,
    },
    SkipInstall {
        key: String,
    },
    Rebind {
        name: String,
    },
}

/// Ordered operations for one declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    #[serde(skip)]
    enabled: bool,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            steps: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, step: Step) {
        if self.enabled {
            self.steps.push(step);
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
