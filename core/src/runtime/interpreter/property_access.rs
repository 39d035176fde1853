use super::Interpreter;
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;
use crate::runtime::value::object::JsObject;

impl Interpreter {
    /// `receiver[key]`, running getters with `receiver` as `this`.
    pub(crate) fn get_property(
        &mut self,
        receiver: &JsValue,
        key: &str,
    ) -> Result<JsValue, RuntimeError> {
        match receiver {
            JsValue::Object(obj) => {
                let Some(prop) = JsObject::find_property(obj, key) else {
                    return Ok(JsValue::Undefined);
                };
                let is_accessor = prop.is_accessor();
                match prop.getter {
                    Some(getter) => {
                        self.call_function_with_this(&getter, Vec::new(), receiver.clone())
                    }
                    None if is_accessor => Ok(JsValue::Undefined),
                    None => Ok(prop.value),
                }
            }
            JsValue::Undefined | JsValue::Null => Err(RuntimeError::type_error(format!(
                "cannot read properties of {receiver} (reading '{key}')"
            ))),
            JsValue::String(s) if key == "length" => Ok(JsValue::Number(s.chars().count() as f64)),
            _ => Ok(JsValue::Undefined),
        }
    }
}
