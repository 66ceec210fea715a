use serde_json::Value;

/// Shared emptiness rule: a value counts as "no data" for both display
/// grouping and genre aggregation.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => is_empty_str(s),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Blank, whitespace-only, or a case-insensitive "none"/"null"/"undefined".
pub fn is_empty_str(s: &str) -> bool {
    let trimmed = s.trim().to_lowercase();
    matches!(trimmed.as_str(), "" | "none" | "null" | "undefined")
}

/// Renders a value for display. Empty values become the "None" marker
/// instead of the raw falsy value.
pub fn display_value(value: &Value) -> String {
    if is_empty_value(value) {
        return "None".to_string();
    }
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}
