use crate::runtime::value::JsValue;

#[derive(Debug, Clone)]
pub struct FunctionArgs {
    this_value: JsValue,
    values: Vec<JsValue>,
}

impl FunctionArgs {
    pub fn new(this_value: JsValue, values: Vec<JsValue>) -> Self {
        Self { this_value, values }
    }

    /// The argument at `index`, or `undefined` when it was not passed.
    pub fn arg(&self, index: usize) -> JsValue {
        self.values.get(index).cloned().unwrap_or(JsValue::Undefined)
    }

    pub fn this(&self) -> &JsValue {
        &self.this_value
    }
}
