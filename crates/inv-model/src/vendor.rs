//! Vendor edit payload and status options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Status options offered by the vendor edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VendorStatus {
    #[default]
    #[serde(rename = "Aktif")]
    Aktif,
    #[serde(rename = "Tidak Aktif")]
    TidakAktif,
}

impl VendorStatus {
    /// Returns the label as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Aktif => "Aktif",
            VendorStatus::TidakAktif => "Tidak Aktif",
        }
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VendorStatus {
    type Err = ModelError;

    /// Case-insensitive; accepts space, hyphen or underscore between words.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|ch| match ch {
                '-' | '_' => ' ',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        match normalized.as_str() {
            "AKTIF" => Ok(VendorStatus::Aktif),
            "TIDAK AKTIF" => Ok(VendorStatus::TidakAktif),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// Body of `PUT /vendor/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorUpdate {
    pub vendor_id: String,
    pub nama_vendor: String,
    pub alamat: String,
    pub status: VendorStatus,
    pub updated_by: String,
}

impl VendorUpdate {
    /// Checks the fields the edit form marks as required.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        if self.nama_vendor.trim().is_empty() {
            return Err(ModelError::MissingField("nama_vendor"));
        }
        if self.alamat.trim().is_empty() {
            return Err(ModelError::MissingField("alamat"));
        }
        if self.updated_by.trim().is_empty() {
            return Err(ModelError::MissingField("updated_by"));
        }
        Ok(())
    }
}
