//! Normalization of inventaris backend records into display values.
//!
//! The backend encodes nullable columns as validity-flagged wrappers and
//! enum columns as Base64 tokens. [`normalization`] decodes those shapes into
//! plain strings without ever failing; [`display`] builds the vendor and
//! inventory cards and the vendor edit form on top of it.

pub mod display;
pub mod normalization;

pub use display::{
    EMPTY_INVENTORY_LIST, EMPTY_VENDOR_LIST, InventoryCard, VendorCard, VendorForm,
};
pub use normalization::{
    FieldState, decode_enum, extract_optional_string, extract_optional_timestamp, field_state,
    format_date, format_rupiah, format_timestamp, valid_timestamp,
};
