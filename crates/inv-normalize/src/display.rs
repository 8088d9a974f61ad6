//! Display projection of vendor and inventory records.
//!
//! Cards are built once per fetched record and are immutable afterwards.
//! Every field goes through the normalizer, so a card never holds a wire
//! shape.

use std::fmt;

use inv_model::{DisplayOptions, Inventaris, Vendor, VendorStatus, VendorUpdate};
use tracing::warn;

use crate::normalization::{
    decode_enum, extract_optional_string, format_date, format_rupiah, format_timestamp,
};

/// Shown instead of the vendor list when the backend returns no rows.
pub const EMPTY_VENDOR_LIST: &str = "Tidak ada data vendor yang tersedia.";

/// Shown instead of the inventory list when the backend returns no rows.
pub const EMPTY_INVENTORY_LIST: &str = "Tidak ada data inventaris yang tersedia.";

/// Display values for one vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorCard {
    pub vendor_id: String,
    pub title: String,
    pub address: String,
    pub status: String,
    /// Formatted last-update date, empty when the record was never updated.
    pub updated_at: String,
}

impl VendorCard {
    pub fn from_vendor(vendor: &Vendor, options: &DisplayOptions) -> Self {
        let name = extract_optional_string(vendor.nama_vendor.as_ref());
        let title = if name.is_empty() {
            options.missing_vendor_name.clone()
        } else {
            name
        };
        let address = extract_optional_string(vendor.alamat.as_ref());
        let status = decode_enum(vendor.status.as_ref());

        Self {
            vendor_id: vendor.vendor_id.clone(),
            title,
            address: options.or_placeholder(&address).to_string(),
            status: options.or_placeholder(&status).to_string(),
            updated_at: format_timestamp(vendor.updated_at.as_ref()),
        }
    }
}

impl fmt::Display for VendorCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "ID Vendor: {}", self.vendor_id)?;
        writeln!(f, "Alamat: {}", self.address)?;
        write!(f, "Status: {}", self.status)?;
        if !self.updated_at.is_empty() {
            write!(f, "\nDiperbarui: {}", self.updated_at)?;
        }
        Ok(())
    }
}

/// Display values for one inventory item.
///
/// Relation names and the image are only set when the backend marked them
/// valid and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryCard {
    pub inventaris_id: String,
    pub title: String,
    pub brand: Option<String>,
    pub vendor: Option<String>,
    pub room: Option<String>,
    pub purchase_date: String,
    pub price: String,
    pub quantity: i64,
    pub status: String,
    pub image_url: Option<String>,
}

impl InventoryCard {
    pub fn from_item(item: &Inventaris, options: &DisplayOptions) -> Self {
        let title = if item.nama_inventaris.is_empty() {
            options.missing_inventory_name.clone()
        } else {
            item.nama_inventaris.clone()
        };
        let status = decode_enum(item.status.as_ref());

        Self {
            inventaris_id: item.inventaris_id.clone(),
            title,
            brand: non_empty(extract_optional_string(item.nama_brand.as_ref())),
            vendor: non_empty(extract_optional_string(item.nama_vendor.as_ref())),
            room: non_empty(extract_optional_string(item.nama_ruangan.as_ref())),
            purchase_date: format_date(&item.tanggal_beli),
            price: format_rupiah(item.harga),
            quantity: item.jumlah,
            status: options.or_placeholder(&status).to_string(),
            image_url: non_empty(extract_optional_string(item.image_url.as_ref())),
        }
    }
}

impl fmt::Display for InventoryCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "ID: {}", self.inventaris_id)?;
        if let Some(brand) = &self.brand {
            writeln!(f, "Brand: {brand}")?;
        }
        if let Some(vendor) = &self.vendor {
            writeln!(f, "Vendor: {vendor}")?;
        }
        if let Some(room) = &self.room {
            writeln!(f, "Ruangan: {room}")?;
        }
        writeln!(f, "Tanggal Beli: {}", self.purchase_date)?;
        writeln!(f, "Harga: {}", self.price)?;
        writeln!(f, "Jumlah: {}", self.quantity)?;
        write!(f, "Status: {}", self.status)?;
        if let Some(url) = &self.image_url {
            write!(f, "\nGambar: {url}")?;
        }
        Ok(())
    }
}

/// Vendor edit form state, pre-filled from a fetched record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorForm {
    pub vendor_id: String,
    pub nama_vendor: String,
    pub alamat: String,
    pub status: VendorStatus,
}

impl VendorForm {
    /// Pre-fills the form. A blank status selects the default option; an
    /// unrecognized label does too, with a warning.
    pub fn from_vendor(vendor: &Vendor) -> Self {
        let label = decode_enum(vendor.status.as_ref());
        let status = if label.is_empty() {
            VendorStatus::default()
        } else {
            label.parse::<VendorStatus>().unwrap_or_else(|_| {
                warn!(
                    vendor_id = %vendor.vendor_id,
                    "unrecognized vendor status, defaulting to {}",
                    VendorStatus::default()
                );
                VendorStatus::default()
            })
        };

        Self {
            vendor_id: vendor.vendor_id.clone(),
            nama_vendor: extract_optional_string(vendor.nama_vendor.as_ref()),
            alamat: extract_optional_string(vendor.alamat.as_ref()),
            status,
        }
    }

    /// Builds the update body, stamping the acting user.
    pub fn into_update(self, updated_by: impl Into<String>) -> VendorUpdate {
        VendorUpdate {
            vendor_id: self.vendor_id,
            nama_vendor: self.nama_vendor,
            alamat: self.alamat,
            status: self.status,
            updated_by: updated_by.into(),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
