use serde_json::Value;

/// Returns whether a rule value counts as "set" under JavaScript truthiness.
///
/// `null`, `false`, `0`, `NaN` and the empty string are falsy. Arrays and
/// objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns whether a value is missing for validation purposes: falsy, or a
/// string made only of whitespace.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.trim().is_empty(),
        other => !is_truthy(other),
    }
}

/// Replaces a falsy value with `null`, keeping everything else as-is.
pub fn or_null(value: &Value) -> Value {
    if is_truthy(value) {
        value.clone()
    } else {
        Value::Null
    }
}
