use crate::ast::Expr;
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

/// The evaluation machinery the decorator core calls back into.
///
/// The core never evaluates source itself: decorator expressions go through
/// [`DecoratorHost::evaluate`], decorator functions through
/// [`DecoratorHost::call`], and class replacement through
/// [`DecoratorHost::rebind`].
pub trait DecoratorHost {
    fn evaluate(&mut self, expr: &Expr) -> Result<JsValue, RuntimeError>;

    /// `object[key]`, running getters. Used to read returned descriptors.
    fn get(&mut self, object: &JsValue, key: &str) -> Result<JsValue, RuntimeError>;

    fn call(
        &mut self,
        callee: &JsValue,
        this: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, RuntimeError>;

    /// Point an existing binding at a new value.
    fn rebind(&mut self, name: &str, value: JsValue) -> Result<(), RuntimeError>;
}
