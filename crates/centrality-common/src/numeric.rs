//! Numeric parsing, formatting, and missing-value helpers.

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Formats a floating-point number with the shortest round-trip representation.
///
/// # Examples
///
/// ```
/// use centrality_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(0.75), "0.75");
/// assert_eq!(format_numeric(f64::NAN), "NaN");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    format!("{v}")
}

/// Formats an optional value, writing missing values as an empty cell.
pub fn format_optional(value: Option<f64>) -> String {
    value.map(format_numeric).unwrap_or_default()
}

/// True for values that take part in aggregates: present and not NaN.
pub fn is_available(value: Option<f64>) -> bool {
    matches!(value, Some(v) if !v.is_nan())
}

/// Iterates the available values of a column, skipping missing and NaN entries.
pub fn available(values: impl IntoIterator<Item = Option<f64>>) -> impl Iterator<Item = f64> {
    values
        .into_iter()
        .filter(|value| is_available(*value))
        .flatten()
}
