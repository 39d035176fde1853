use crate::config::{AmbientPolicy, EngineConfig};
use crate::context::Context;
use crate::errors::CrustyError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, CrustyError> {
        Ok(Self::from_config(EngineConfig::from_json(source)?))
    }

    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.config.record_trace = record;
        self
    }

    pub fn with_ambient_policy(mut self, policy: AmbientPolicy) -> Self {
        self.config.ambient = policy;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn new_context(&self) -> Context {
        Context::with_config(self.config)
    }
}
