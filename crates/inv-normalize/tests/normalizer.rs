//! Tests for nullable string extraction and enum decoding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use inv_model::{NullableString, Vendor};
use inv_normalize::{FieldState, decode_enum, extract_optional_string, field_state};
use proptest::prelude::*;

fn parse_field(json: &str) -> Option<NullableString> {
    serde_json::from_str(json).expect("any JSON value is a nullable field")
}

#[test]
fn base64_token_decodes_to_label() {
    let field = NullableString::plain("QWt0aWY=");
    assert_eq!(decode_enum(Some(&field)), "Aktif");
}

#[test]
fn valid_wrapper_decodes_to_label() {
    let field = NullableString::valid("QWt0aWY=");
    assert_eq!(decode_enum(Some(&field)), "Aktif");
}

#[test]
fn invalid_wrapper_decodes_to_empty() {
    let field = NullableString::invalid("QWt0aWY=");
    assert_eq!(decode_enum(Some(&field)), "");
}

#[test]
fn malformed_base64_falls_back_to_raw() {
    let field = NullableString::plain("not-valid-base64-!!");
    assert_eq!(decode_enum(Some(&field)), "not-valid-base64-!!");

    let legacy = NullableString::plain("Aktif");
    assert_eq!(decode_enum(Some(&legacy)), "Aktif");
}

#[test]
fn null_is_empty_for_both_operations() {
    let field = parse_field("null");
    assert_eq!(field, None);
    assert_eq!(extract_optional_string(field.as_ref()), "");
    assert_eq!(decode_enum(field.as_ref()), "");
}

#[test]
fn unexpected_shapes_are_empty() {
    for json in [
        "12",
        "true",
        r#"["QWt0aWY="]"#,
        r#"{"String": 5, "Valid": true}"#,
        r#"{"Valid": true}"#,
        r#"{"nested": {"String": "QWt0aWY=", "Valid": true}}"#,
    ] {
        let field = parse_field(json);
        assert_eq!(extract_optional_string(field.as_ref()), "", "input {json}");
        assert_eq!(decode_enum(field.as_ref()), "", "input {json}");
        assert_eq!(field_state(field.as_ref()), FieldState::Invalid, "input {json}");
    }
}

#[test]
fn missing_record_field_is_empty() {
    let vendor: Vendor = serde_json::from_str(r#"{"vendor_id": "V-9"}"#).unwrap();
    assert_eq!(extract_optional_string(vendor.alamat.as_ref()), "");
    assert_eq!(decode_enum(vendor.status.as_ref()), "");
    assert_eq!(field_state(vendor.alamat.as_ref()), FieldState::Absent);
}

#[test]
fn wrapper_with_extra_keys_still_unwraps() {
    let field = parse_field(r#"{"String": "Jl. Braga 10", "Valid": true, "Extra": 1}"#);
    assert_eq!(extract_optional_string(field.as_ref()), "Jl. Braga 10");
}

proptest! {
    #[test]
    fn plain_strings_pass_through(value in any::<String>()) {
        let field = NullableString::plain(value.clone());
        prop_assert_eq!(extract_optional_string(Some(&field)), value);
    }

    #[test]
    fn valid_wrappers_unwrap(value in any::<String>()) {
        let field = NullableString::valid(value.clone());
        prop_assert_eq!(extract_optional_string(Some(&field)), value);
    }

    #[test]
    fn invalid_wrappers_are_empty(value in any::<String>()) {
        let field = NullableString::invalid(value);
        prop_assert_eq!(extract_optional_string(Some(&field)), "");
        prop_assert_eq!(decode_enum(Some(&field)), "");
    }

    #[test]
    fn decode_reverses_base64(value in any::<String>()) {
        let field = NullableString::plain(STANDARD.encode(&value));
        prop_assert_eq!(decode_enum(Some(&field)), value);
    }

    #[test]
    fn non_base64_falls_back(value in "[A-Za-z0-9 ]{0,12}[!#%&*\\-_.][A-Za-z0-9 ]{0,12}") {
        let field = NullableString::plain(value.clone());
        prop_assert_eq!(decode_enum(Some(&field)), value);
    }
}
