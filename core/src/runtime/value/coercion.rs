use super::JsValue;

impl JsValue {
    /// Convert to a boolean (JS truthiness rules).
    pub fn to_boolean(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::String(s) => !s.is_empty(),
            JsValue::Object(_) => true,
        }
    }

    /// Convert to a string (JS coercion rules). Used for property keys.
    pub fn to_js_string(&self) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Boolean(b) => b.to_string(),
            JsValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            JsValue::String(s) => s.clone(),
            JsValue::Object(obj) => {
                let obj = obj.borrow();
                if obj.is_callable() {
                    format!("function {}() {{ [native code] }}", obj.name())
                } else {
                    "[object Object]".to_string()
                }
            }
        }
    }
}
