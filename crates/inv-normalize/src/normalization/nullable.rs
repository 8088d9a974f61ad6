//! Extraction of plain values from nullable wire shapes.

use inv_model::{NullableString, NullableTime};

/// Three-state view of a nullable string field.
///
/// [`extract_optional_string`] collapses `Absent` and `Invalid` into an empty
/// string. Callers that need to render "unknown" differently from "blank" can
/// match on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState<'a> {
    /// The field was missing or `null`.
    Absent,
    /// The field was present but its validity flag was false, or its shape
    /// was unrecognized.
    Invalid,
    /// The field carried a usable value (possibly the empty string).
    Present(&'a str),
}

impl<'a> FieldState<'a> {
    pub fn value(self) -> Option<&'a str> {
        match self {
            FieldState::Present(value) => Some(value),
            FieldState::Absent | FieldState::Invalid => None,
        }
    }
}

/// Classifies a nullable string field.
pub fn field_state(field: Option<&NullableString>) -> FieldState<'_> {
    match field {
        None => FieldState::Absent,
        Some(NullableString::Plain(value)) => FieldState::Present(value.as_str()),
        Some(NullableString::Wrapped(wrapped)) if wrapped.valid => {
            FieldState::Present(wrapped.string.as_str())
        }
        Some(NullableString::Wrapped(_) | NullableString::Other(_)) => FieldState::Invalid,
    }
}

/// Returns the string carried by a nullable field, or an empty string.
///
/// Bare strings pass through unchanged. Wrapped strings are returned only
/// when their validity flag is set. Missing fields and unexpected shapes
/// yield the empty string.
pub fn extract_optional_string(field: Option<&NullableString>) -> String {
    field_state(field).value().unwrap_or_default().to_string()
}

/// Narrows a nullable timestamp field without transforming it.
///
/// The caller decides how to format the payload and what to show when the
/// validity flag is false; see [`valid_timestamp`].
pub fn extract_optional_timestamp(field: Option<&NullableTime>) -> Option<&NullableTime> {
    field
}

/// Returns the timestamp payload when the field is a bare string or a valid
/// wrapper.
pub fn valid_timestamp(field: Option<&NullableTime>) -> Option<&str> {
    match extract_optional_timestamp(field)? {
        NullableTime::Plain(time) => Some(time.as_str()),
        NullableTime::Wrapped(wrapped) if wrapped.valid => Some(wrapped.time.as_str()),
        NullableTime::Wrapped(_) | NullableTime::Other(_) => None,
    }
}
