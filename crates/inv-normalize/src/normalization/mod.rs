//! Normalization functions for backend field shapes.
//!
//! This module turns wire values into display-ready scalars:
//! - **nullable**: bare/wrapped string and timestamp extraction
//! - **enums**: Base64 encoded enum labels
//! - **datetime**: `dd-Mon-yyyy` date formatting
//! - **numeric**: Rupiah and Indonesian number formatting
//!
//! None of these functions fail. Malformed or missing input degrades to an
//! empty string or to the raw value.

pub mod datetime;
pub mod enums;
pub mod nullable;
pub mod numeric;

// Re-export commonly used items
pub use datetime::{format_date, format_indonesian_date, format_timestamp, parse_display_date};
pub use enums::{decode_base64_text, decode_enum};
pub use nullable::{
    FieldState, extract_optional_string, extract_optional_timestamp, field_state, valid_timestamp,
};
pub use numeric::{format_id_number, format_rupiah};
