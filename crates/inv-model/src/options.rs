//! Configuration options for display normalization.

use serde::{Deserialize, Serialize};

/// Placeholder shown for blank values in lists and cards.
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// Title shown when a vendor has no valid name.
pub const MISSING_VENDOR_NAME: &str = "Nama Vendor Tidak Tersedia";

/// Title shown when an inventory item has no name.
pub const MISSING_INVENTORY_NAME: &str = "Nama Inventaris Tidak Tersedia";

/// Options controlling how normalized values are presented.
///
/// These only affect the display projection. The normalizer itself always
/// returns an empty string for absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Shown in place of a blank address, status or other detail.
    pub placeholder: String,

    /// Card title for a vendor whose name is absent or invalid.
    pub missing_vendor_name: String,

    /// Card title for an inventory item with an empty name.
    pub missing_inventory_name: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            missing_vendor_name: MISSING_VENDOR_NAME.to_string(),
            missing_inventory_name: MISSING_INVENTORY_NAME.to_string(),
        }
    }
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_missing_vendor_name(mut self, title: impl Into<String>) -> Self {
        self.missing_vendor_name = title.into();
        self
    }

    pub fn with_missing_inventory_name(mut self, title: impl Into<String>) -> Self {
        self.missing_inventory_name = title.into();
        self
    }

    /// Returns `value`, or the placeholder when it is blank.
    pub fn or_placeholder<'a>(&'a self, value: &'a str) -> &'a str {
        if value.is_empty() {
            &self.placeholder
        } else {
            value
        }
    }
}
