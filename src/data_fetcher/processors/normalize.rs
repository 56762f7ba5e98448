use serde_json::Value;

/// Coerces one raw stat value into a canonical number.
///
/// The upstream feeds are inconsistent about value types: the same column
/// may arrive as a JSON number, a string with a comma decimal separator
/// ("12,5"), or a percentage string ("54,2%"). Absent fields, nulls,
/// non-numeric strings and structured values all normalize to `None`.
/// Conversion failure is a value here, never an error.
///
/// # Arguments
/// * `value` - The raw field value, if the record had the field at all
///
/// # Returns
/// * `Some(f64)` - The canonical numeric value, always finite
/// * `None` - The value is missing or cannot be read as a number
pub fn normalize_stat(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.replace(',', ".").replace('%', "").trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    // Rust's float parser accepts "inf" and "NaN" spellings; a NaN would
    // poison the leaderboard ordering, so non-finite counts as missing
    parsed.filter(|v| v.is_finite())
}
