use serde::Deserialize;

use crate::errors::RuntimeError;

/// What to do when a decorator list contains an ambient (analysis-only) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbientPolicy {
    /// Keep the entry in the list but never evaluate or apply it.
    #[default]
    Skip,
    /// Fail the declaration before any of its decorators are evaluated.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Record the operation trace for every decorated declaration.
    pub record_trace: bool,
    pub ambient: AmbientPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            record_trace: true,
            ambient: AmbientPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(source: &str) -> Result<Self, RuntimeError> {
        serde_json::from_str(source)
            .map_err(|err| RuntimeError::type_error(format!("invalid engine config: {err}")))
    }
}
