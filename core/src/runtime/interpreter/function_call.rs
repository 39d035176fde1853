use super::Interpreter;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

impl Interpreter {
    pub(crate) fn call_function_with_this(
        &mut self,
        function: &JsValue,
        args: Vec<JsValue>,
        this: JsValue,
    ) -> Result<JsValue, RuntimeError> {
        // Clone the handler out so the callee may borrow its own object.
        let handler = function
            .as_object()
            .and_then(|obj| obj.borrow().handler().cloned());
        let Some(handler) = handler else {
            return Err(RuntimeError::NotAFunction {
                name: function.to_js_string(),
            });
        };
        handler.call(FunctionArgs::new(this, args))
    }
}
