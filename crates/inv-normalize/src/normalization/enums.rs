//! Decoding of Base64 encoded enum fields.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use inv_model::NullableString;
use tracing::debug;

use super::nullable::extract_optional_string;

/// Standard alphabet that tolerates missing padding and non-zero trailing
/// bits, matching what browsers accept.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes a Base64 token into UTF-8 text.
///
/// Returns `None` for malformed Base64 and for payloads that are not valid
/// UTF-8. Surrounding whitespace is ignored. Interior whitespace makes the
/// token malformed, unlike `atob`, so an unencoded label such as
/// `Tidak Aktif` is never half-decoded into garbage.
pub fn decode_base64_text(token: &str) -> Option<String> {
    let bytes = LENIENT_STANDARD.decode(token.trim()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Resolves an encoded enum field to its display label.
///
/// The field is resolved exactly like [`extract_optional_string`]. A
/// non-empty result is Base64 decoded; if decoding fails the resolved string
/// is returned as-is, since not every historical record was encoded.
pub fn decode_enum(field: Option<&NullableString>) -> String {
    let resolved = extract_optional_string(field);
    if resolved.is_empty() {
        return resolved;
    }
    match decode_base64_text(&resolved) {
        Some(label) => label,
        None => {
            debug!(
                len = resolved.len(),
                "enum value is not base64, showing raw value"
            );
            resolved
        }
    }
}
