use serde_json::Value;

/// Structural questions asked of an untyped payload before committing to a
/// strict shape.
pub trait ShapeProbe {
    fn has_key(&self, key: &str) -> bool;

    fn first_element(&self) -> Option<&Value>;

    fn is_empty_array(&self) -> bool;

    fn describe(&self) -> &'static str;
}

impl ShapeProbe for Value {
    fn has_key(&self, key: &str) -> bool {
        self.as_object()
            .map(|object| object.contains_key(key))
            .unwrap_or(false)
    }

    fn first_element(&self) -> Option<&Value> {
        self.as_array().and_then(|items| items.first())
    }

    fn is_empty_array(&self) -> bool {
        self.as_array().map(Vec::is_empty).unwrap_or(false)
    }

    fn describe(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
