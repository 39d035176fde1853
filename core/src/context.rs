use crate::ast::{ClassDecl, Decorator, Expr, ObjectLiteral, Program};
use crate::config::EngineConfig;
use crate::decorators::{Declaration, Outcome, Trace};
use crate::embedding::callback::NativeFunctionBoxed;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::{CrustyError, RuntimeError};
use crate::runtime::environment::BindingKind;
use crate::runtime::interpreter::Interpreter;
use crate::runtime::value::JsValue;

/// Embedding facade: owns an interpreter and exposes the declaration-level
/// entry points with the unified error type.
pub struct Context {
    interpreter: Interpreter,
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            interpreter: Interpreter::with_config(config),
        }
    }

    pub fn run(&mut self, program: &Program) -> Result<(), CrustyError> {
        self.interpreter.run(program)?;
        Ok(())
    }

    /// Evaluate a single expression in the global scope.
    pub fn eval(&mut self, expr: &Expr) -> Result<JsValue, CrustyError> {
        Ok(self.interpreter.eval_expr(expr)?)
    }

    /// Evaluate a class declaration and return the value its name is bound
    /// to afterwards.
    pub fn eval_class(&mut self, class_decl: &ClassDecl) -> Result<JsValue, CrustyError> {
        Ok(self.interpreter.eval_class_decl(class_decl)?)
    }

    pub fn eval_object(&mut self, literal: &ObjectLiteral) -> Result<JsValue, CrustyError> {
        Ok(self.interpreter.eval_object_literal(literal)?)
    }

    /// Desugar one already-classified declaration.
    pub fn decorate(
        &mut self,
        declaration: &Declaration,
        decorators: &[Decorator],
    ) -> Result<Outcome, CrustyError> {
        Ok(self.interpreter.decorate(declaration, decorators)?)
    }

    pub fn get_global(&self, name: &str) -> Result<JsValue, CrustyError> {
        Ok(self.interpreter.env.get(name)?)
    }

    pub fn set_global(&mut self, name: impl Into<String>, value: JsValue) {
        let name = name.into();
        if self.interpreter.env.set(&name, value.clone()).is_err() {
            self.interpreter
                .env
                .define_with_kind(name, value, BindingKind::Var);
        }
    }

    pub fn set_global_function<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(FunctionArgs) -> Result<JsValue, RuntimeError> + 'static,
    {
        let name = name.into();
        let function =
            JsValue::native_function(name.clone(), NativeFunctionBoxed::from_closure(callback));
        self.set_global(name, function);
    }

    pub fn traces(&self) -> &[Trace] {
        self.interpreter.traces()
    }

    pub fn take_traces(&mut self) -> Vec<Trace> {
        self.interpreter.take_traces()
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
