use super::JsValue;
use std::fmt;

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "undefined"),
            JsValue::Null => write!(f, "null"),
            JsValue::Boolean(b) => write!(f, "{b}"),
            JsValue::Number(_) => write!(f, "{}", self.to_js_string()),
            JsValue::String(s) => write!(f, "{s}"),
            JsValue::Object(obj) => {
                let obj = obj.borrow();
                if obj.is_callable() {
                    return write!(f, "[Function: {}]", obj.name());
                }
                let mut pairs: Vec<String> = obj
                    .properties
                    .iter()
                    .map(|(k, p)| match (&p.getter, &p.setter) {
                        _ if !p.is_accessor() => format!("{k}: {}", p.value),
                        (Some(_), None) => format!("{k}: [Getter]"),
                        (None, Some(_)) => format!("{k}: [Setter]"),
                        _ => format!("{k}: [Getter/Setter]"),
                    })
                    .collect();
                pairs.sort();
                write!(f, "{{ {} }}", pairs.join(", "))
            }
        }
    }
}
