//! Record sources: a saved API response on disk or the live backend.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info_span};

use inv_client::InventarisClient;
use inv_model::{ApiResponse, Inventaris, Vendor};

/// Where list and detail commands read records from.
#[derive(Debug)]
pub enum RecordSource {
    /// A JSON file holding a `{"data": ..., "message": ...}` envelope.
    File(PathBuf),
    /// The backend, through an authenticated client.
    Remote(InventarisClient),
}

impl RecordSource {
    pub fn vendors(&self) -> Result<Vec<Vendor>> {
        match self {
            RecordSource::File(path) => read_data(path),
            RecordSource::Remote(client) => {
                let span = info_span!("fetch", resource = "vendor");
                Ok(span.in_scope(|| client.list_vendors())?)
            }
        }
    }

    pub fn inventory(&self) -> Result<Vec<Inventaris>> {
        match self {
            RecordSource::File(path) => read_data(path),
            RecordSource::Remote(client) => {
                let span = info_span!("fetch", resource = "inventaris");
                Ok(span.in_scope(|| client.list_inventaris())?)
            }
        }
    }

    /// Fetches one vendor. A file may hold either a single record or a list;
    /// lists are searched by `vendor_id`.
    pub fn vendor(&self, vendor_id: &str) -> Result<Vendor> {
        match self {
            RecordSource::File(path) => {
                let data: Value = read_data(path)?;
                if data.is_array() {
                    let vendors: Vec<Vendor> = serde_json::from_value(data)
                        .with_context(|| format!("decode vendors in {}", path.display()))?;
                    vendors
                        .into_iter()
                        .find(|vendor| vendor.vendor_id == vendor_id)
                        .ok_or_else(|| anyhow!("vendor {vendor_id} not found in {}", path.display()))
                } else {
                    let vendor: Vendor = serde_json::from_value(data)
                        .with_context(|| format!("decode vendor in {}", path.display()))?;
                    if vendor.vendor_id != vendor_id {
                        bail!("vendor {vendor_id} not found in {}", path.display());
                    }
                    Ok(vendor)
                }
            }
            RecordSource::Remote(client) => {
                let span = info_span!("fetch", resource = "vendor", vendor_id = %vendor_id);
                Ok(span.in_scope(|| client.get_vendor(vendor_id))?)
            }
        }
    }

    /// Returns the client when records come from the backend.
    pub fn client(&self) -> Option<&InventarisClient> {
        match self {
            RecordSource::File(_) => None,
            RecordSource::Remote(client) => Some(client),
        }
    }
}

/// Reads a response envelope from disk and returns its `data` member.
pub fn read_data<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let envelope: ApiResponse<T> = serde_json::from_str(&text)
        .with_context(|| format!("decode response envelope in {}", path.display()))?;
    debug!(path = %path.display(), message = %envelope.message, "loaded saved response");
    Ok(envelope.data)
}
