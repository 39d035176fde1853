use super::Interpreter;
use crate::ast::Expr;
use crate::decorators::DecoratorHost;
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

impl DecoratorHost for Interpreter {
    fn evaluate(&mut self, expr: &Expr) -> Result<JsValue, RuntimeError> {
        self.eval_expr(expr)
    }

    fn get(&mut self, object: &JsValue, key: &str) -> Result<JsValue, RuntimeError> {
        self.get_property(object, key)
    }

    fn call(
        &mut self,
        callee: &JsValue,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, RuntimeError> {
        self.call_function_with_this(callee, args, this)
    }

    fn rebind(&mut self, name: &str, value: JsValue) -> Result<(), RuntimeError> {
        self.env.set(name, value)
    }
}
