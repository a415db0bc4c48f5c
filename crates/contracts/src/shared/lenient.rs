//! Tolerant deserializers for backend columns whose JSON type drifted over time.
//!
//! The professor table stores `cargaHoraria`, `HAE_O` and `HAE_C` as TEXT while
//! the bulk import sends integers, so reads must accept both shapes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer parsing shared by the spreadsheet mapper and the form.
///
/// Accepts `,` or `.` as decimal separator (only the first `,` is replaced)
/// and truncates toward zero: `"12,50"` and `"12.50"` both give `12`.
/// Anything that is not a complete finite number gives `None`.
pub fn parse_int_lenient(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replacen(',', ".", 1);
    let value: f64 = normalized.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Text form of a scalar JSON value; `null` and containers become empty.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// `null`, `""`, a number or a numeric string -> `Option<i64>`.
pub fn int_or_null<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(|f| parse_int_lenient(&f.to_string()))),
        Some(Value::String(s)) => parse_int_lenient(&s),
        _ => None,
    })
}

/// `null` or any scalar -> `String`.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_text).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_lenient_separators() {
        assert_eq!(parse_int_lenient("12,50"), Some(12));
        assert_eq!(parse_int_lenient("12.50"), Some(12));
        assert_eq!(parse_int_lenient(" 40 "), Some(40));
        assert_eq!(parse_int_lenient("-3,9"), Some(-3));
    }

    #[test]
    fn test_parse_int_lenient_rejects_garbage() {
        assert_eq!(parse_int_lenient(""), None);
        assert_eq!(parse_int_lenient("40h"), None);
        assert_eq!(parse_int_lenient("1,234,5"), None);
        assert_eq!(parse_int_lenient("NaN"), None);
        assert_eq!(parse_int_lenient("inf"), None);
    }

    #[derive(Deserialize)]
    struct Columns {
        #[serde(default, deserialize_with = "int_or_null")]
        hours: Option<i64>,
        #[serde(default, deserialize_with = "text_or_empty")]
        note: String,
    }

    #[test]
    fn test_int_or_null_accepts_text_columns() {
        let p: Columns = serde_json::from_str(r#"{"hours": "20", "note": null}"#).unwrap();
        assert_eq!(p.hours, Some(20));
        assert_eq!(p.note, "");

        let p: Columns = serde_json::from_str(r#"{"hours": 7.0, "note": 3}"#).unwrap();
        assert_eq!(p.hours, Some(7));
        assert_eq!(p.note, "3");

        let p: Columns = serde_json::from_str(r#"{"hours": ""}"#).unwrap();
        assert_eq!(p.hours, None);
    }
}
