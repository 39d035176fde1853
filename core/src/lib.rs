pub mod ast;
pub mod config;
pub mod context;
pub mod decorators;
pub mod embedding;
pub mod engine;
pub mod errors;
pub mod runtime;

pub use config::{AmbientPolicy, EngineConfig};
pub use context::Context;
pub use decorators::{Declaration, Outcome, Trace, decorate};
pub use embedding::{FunctionArgs, NativeFunction, NativeFunctionBoxed};
pub use engine::Engine;
pub use errors::{CrustyError, DecoratorError, RuntimeError};
pub use runtime::value::JsValue as Value;

use runtime::interpreter::Interpreter;

/// Run a program end-to-end with the default configuration.
pub fn run(program: &ast::Program) -> Result<Interpreter, CrustyError> {
    let mut interp = Interpreter::new();
    interp.run(program)?;
    Ok(interp)
}
