mod eval_class;
mod eval_expr;
mod eval_object;
mod eval_stmt;
mod function_call;
mod host;
mod members;
mod property_access;

use crate::ast::{Decorator, Program};
use crate::config::EngineConfig;
use crate::decorators::{Declaration, Outcome, Trace};
use crate::errors::{DecoratorError, RuntimeError};
use crate::runtime::environment::Environment;

/// Reference evaluator for declarations and the expressions decorators are
/// written in. It is also the [`DecoratorHost`](crate::decorators::DecoratorHost)
/// the decorator core calls back into.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) config: EngineConfig,
    pub(crate) traces: Vec<Trace>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            env: Environment::new(),
            config,
            traces: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Run a program statement by statement.
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.body {
            self.eval_stmt(stmt)?;
        }
        Ok(())
    }

    /// Traces of every decorated declaration processed so far, in order.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn take_traces(&mut self) -> Vec<Trace> {
        std::mem::take(&mut self.traces)
    }

    /// Desugar one decorated declaration with this interpreter as host.
    pub fn decorate(
        &mut self,
        declaration: &Declaration,
        decorators: &[Decorator],
    ) -> Result<Outcome, DecoratorError> {
        let config = self.config;
        let decorated = crate::decorators::decorate(self, declaration, decorators, &config)?;
        if !decorated.trace.is_empty() {
            self.traces.push(decorated.trace);
        }
        Ok(decorated.outcome)
    }
}
