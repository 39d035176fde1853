use super::Interpreter;
use crate::ast::{Stmt, VarKind};
use crate::errors::RuntimeError;
use crate::runtime::environment::BindingKind;
use crate::runtime::value::JsValue;

impl Interpreter {
    pub(crate) fn eval_stmt(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::ExprStmt(expr) => {
                self.eval_expr(expr)?;
            }
            Stmt::VarDecl { kind, name, init } => {
                let value = match init {
                    Some(expr) => self.eval_expr(expr)?,
                    None => JsValue::Undefined,
                };
                let kind = match kind {
                    VarKind::Let => BindingKind::Let,
                    VarKind::Const => BindingKind::Const,
                    VarKind::Var => BindingKind::Var,
                };
                self.env.define_with_kind(name.clone(), value, kind);
            }
            Stmt::Class(class_decl) => {
                self.eval_class_decl(class_decl)?;
            }
        }
        Ok(())
    }
}
