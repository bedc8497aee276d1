//! Conversions from raw token values to CSS lengths.

use serde_json::Value;

/// Converts a spacing token value to a CSS length.
///
/// Numbers become pixel lengths; strings are assumed to already carry a unit.
/// Any other JSON value has no length representation.
///
/// ```rust
/// use blade_style::tokens::make_space;
/// use serde_json::json;
///
/// assert_eq!(make_space(&json!(12)).as_deref(), Some("12px"));
/// assert_eq!(make_space(&json!("50%")).as_deref(), Some("50%"));
/// assert_eq!(make_space(&json!(null)), None);
/// ```
pub fn make_space(value: &Value) -> Option<String> {
    to_length(value)
}

/// Converts a `border.width` or `border.radius` token value to a CSS length.
pub fn make_border_size(value: &Value) -> Option<String> {
    to_length(value)
}

/// Formats a pixel count as a CSS length.
pub fn make_size(px: u32) -> String {
    format!("{}px", px)
}

fn to_length(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("{}px", n)),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
