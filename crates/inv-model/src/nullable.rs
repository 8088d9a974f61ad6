//! Wire shapes for nullable backend fields.
//!
//! The backend serializes nullable columns as `{"String": "...", "Valid": true}`
//! and `{"Time": "...", "Valid": true}`. Some endpoints send the bare value
//! instead, and older records occasionally carry something else entirely.
//! Every shape deserializes without error: anything that is neither the bare
//! value nor a well-formed wrapper lands in the `Other` arm.
//!
//! A field that is missing or `null` is represented by `Option::None` on the
//! owning record, never by one of these arms.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nullable string wrapper as emitted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlNullString {
    #[serde(rename = "String")]
    pub string: String,
    #[serde(rename = "Valid", deserialize_with = "truthy")]
    pub valid: bool,
}

/// Nullable timestamp wrapper as emitted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlNullTime {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Valid", deserialize_with = "truthy")]
    pub valid: bool,
}

/// Reads a validity flag by JavaScript truthiness: `false`, `0`, `""` and
/// `null` are false, every other value is true.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// A string field that may arrive bare or wrapped.
///
/// Encoded enum fields (such as `status`) use this shape too; the resolved
/// string is then a Base64 token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NullableString {
    /// Bare JSON string.
    Plain(String),
    /// `{"String": ..., "Valid": ...}` wrapper.
    Wrapped(SqlNullString),
    /// Any other JSON value (number, array, malformed object).
    Other(Value),
}

impl NullableString {
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    /// Wrapper with the validity flag set.
    pub fn valid(value: impl Into<String>) -> Self {
        Self::Wrapped(SqlNullString {
            string: value.into(),
            valid: true,
        })
    }

    /// Wrapper with the validity flag cleared. The payload is kept so that
    /// tests can assert it is ignored.
    pub fn invalid(value: impl Into<String>) -> Self {
        Self::Wrapped(SqlNullString {
            string: value.into(),
            valid: false,
        })
    }
}

impl From<&str> for NullableString {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<SqlNullString> for NullableString {
    fn from(value: SqlNullString) -> Self {
        Self::Wrapped(value)
    }
}

/// A timestamp field that may arrive bare or wrapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NullableTime {
    /// Bare timestamp string.
    Plain(String),
    /// `{"Time": ..., "Valid": ...}` wrapper.
    Wrapped(SqlNullTime),
    /// Any other JSON value.
    Other(Value),
}

impl NullableTime {
    pub fn valid(time: impl Into<String>) -> Self {
        Self::Wrapped(SqlNullTime {
            time: time.into(),
            valid: true,
        })
    }

    pub fn invalid(time: impl Into<String>) -> Self {
        Self::Wrapped(SqlNullTime {
            time: time.into(),
            valid: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_uses_backend_field_names() {
        let json = serde_json::to_value(NullableString::valid("Gudang")).unwrap();
        assert_eq!(json, serde_json::json!({"String": "Gudang", "Valid": true}));
    }

    #[test]
    fn unexpected_shapes_fall_into_other() {
        let parsed: NullableString = serde_json::from_str("42").unwrap();
        assert!(matches!(parsed, NullableString::Other(_)));

        let parsed: NullableString =
            serde_json::from_str(r#"{"String": 7, "Valid": true}"#).unwrap();
        assert!(matches!(parsed, NullableString::Other(_)));

        let parsed: NullableTime = serde_json::from_str(r#"{"Valid": true}"#).unwrap();
        assert!(matches!(parsed, NullableTime::Other(_)));
    }

    #[test]
    fn validity_flag_follows_truthiness() {
        let parsed: NullableString =
            serde_json::from_str(r#"{"String": "QWt0aWY=", "Valid": 1}"#).unwrap();
        assert_eq!(parsed, NullableString::valid("QWt0aWY="));

        for falsy in ["0", "\"\"", "null", "false"] {
            let body = format!(r#"{{"String": "Gudang", "Valid": {falsy}}}"#);
            let parsed: NullableString = serde_json::from_str(&body).unwrap();
            assert_eq!(parsed, NullableString::invalid("Gudang"), "Valid: {falsy}");
        }

        let parsed: NullableTime =
            serde_json::from_str(r#"{"Time": "2024-05-02T08:30:00Z", "Valid": "yes"}"#).unwrap();
        assert_eq!(parsed, NullableTime::valid("2024-05-02T08:30:00Z"));
    }

    #[test]
    fn bare_timestamp_is_plain() {
        let parsed: NullableTime = serde_json::from_str(r#""2024-05-02T08:30:00Z""#).unwrap();
        assert_eq!(parsed, NullableTime::Plain("2024-05-02T08:30:00Z".to_string()));
    }
}
