use std::rc::Rc;

use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

/// A host-implemented callable. Decorators, decorator factories and member
/// implementations registered by embedders all go through this trait.
pub trait NativeFunction {
    fn call(&self, args: FunctionArgs) -> Result<JsValue, RuntimeError>;
}

#[derive(Clone)]
pub struct NativeFunctionBoxed {
    callback: Rc<dyn NativeFunction>,
}

impl std::fmt::Debug for NativeFunctionBoxed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NativeFunctionBoxed(..)")
    }
}

impl NativeFunctionBoxed {
    pub fn new<T: NativeFunction + 'static>(callback: T) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    pub fn from_closure<F>(callback: F) -> Self
    where
        F: Fn(FunctionArgs) -> Result<JsValue, RuntimeError> + 'static,
    {
        Self::new(ClosureFunction { callback })
    }

    pub fn call(&self, args: FunctionArgs) -> Result<JsValue, RuntimeError> {
        self.callback.call(args)
    }
}

struct ClosureFunction<F> {
    callback: F,
}

impl<F> NativeFunction for ClosureFunction<F>
where
    F: Fn(FunctionArgs) -> Result<JsValue, RuntimeError>,
{
    fn call(&self, args: FunctionArgs) -> Result<JsValue, RuntimeError> {
        (self.callback)(args)
    }
}
