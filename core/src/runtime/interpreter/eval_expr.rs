use super::Interpreter;
use crate::ast::{Expr, Literal};
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

impl Interpreter {
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> Result<JsValue, RuntimeError> {
        match expr {
            Expr::Literal(lit) => Ok(literal_value(lit)),
            Expr::Identifier(name) => self.env.get(name),
            Expr::MemberAccess { object, property } => {
                let receiver = self.eval_expr(object)?;
                self.get_property(&receiver, property)
            }
            Expr::Call { callee, args } => self.eval_call(callee, args),
            Expr::Object(literal) => self.eval_object_literal(literal),
        }
    }

    fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> Result<JsValue, RuntimeError> {
        let (function, this) = match callee {
            Expr::MemberAccess { object, property } => {
                let receiver = self.eval_expr(object)?;
                (self.get_property(&receiver, property)?, receiver)
            }
            other => (self.eval_expr(other)?, JsValue::Undefined),
        };

        let arg_values: Vec<JsValue> = args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<Result<_, _>>()?;

        if !function.is_callable() {
            return Err(RuntimeError::NotAFunction {
                name: callee.to_string(),
            });
        }
        self.call_function_with_this(&function, arg_values, this)
    }
}

fn literal_value(lit: &Literal) -> JsValue {
    match lit {
        Literal::Number(n) => JsValue::Number(*n),
        Literal::String(s) => JsValue::String(s.clone()),
        Literal::Boolean(b) => JsValue::Boolean(*b),
        Literal::Null => JsValue::Null,
        Literal::Undefined => JsValue::Undefined,
    }
}
