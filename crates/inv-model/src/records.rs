//! Records returned by the backend list and detail endpoints.
//!
//! Containers use `#[serde(default)]` so a record with missing columns still
//! renders. Plain columns also accept `null` and values of the wrong JSON
//! type, falling back to the column default, so one odd row never rejects a
//! whole list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::nullable::{NullableString, NullableTime};

/// Response envelope shared by all endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
}

/// Vendor row from `GET /vendor` and `GET /vendor/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
    #[serde(deserialize_with = "lenient_text")]
    pub vendor_id: String,
    pub nama_vendor: Option<NullableString>,
    pub alamat: Option<NullableString>,
    /// Base64 encoded status label, bare or wrapped.
    pub status: Option<NullableString>,
    #[serde(deserialize_with = "lenient_count")]
    pub id: i64,
    #[serde(deserialize_with = "lenient_text")]
    pub created_at: String,
    #[serde(deserialize_with = "lenient_text")]
    pub created_by: String,
    pub updated_at: Option<NullableTime>,
    pub updated_by: Option<NullableString>,
    pub deleted_at: Option<NullableTime>,
    pub deleted_by: Option<NullableString>,
}

/// Inventory row joined with its brand, vendor, category and room names,
/// from `GET /inventaris/with-relations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventaris {
    #[serde(deserialize_with = "lenient_text")]
    pub inventaris_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub nama_inventaris: String,
    #[serde(deserialize_with = "lenient_text")]
    pub tanggal_beli: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub harga: f64,
    pub image_url: Option<NullableString>,

    #[serde(deserialize_with = "lenient_text")]
    pub brand_id: String,
    pub nama_brand: Option<NullableString>,

    #[serde(deserialize_with = "lenient_text")]
    pub vendor_id: String,
    pub nama_vendor: Option<NullableString>,

    #[serde(deserialize_with = "lenient_text")]
    pub kategori_id: String,
    pub nama_kategori: Option<NullableString>,

    #[serde(deserialize_with = "lenient_text")]
    pub ruangan_id: String,
    pub nama_ruangan: Option<NullableString>,

    #[serde(deserialize_with = "lenient_count")]
    pub id: i64,
    #[serde(deserialize_with = "lenient_count")]
    pub jumlah: i64,
    pub keterangan: Option<NullableString>,
    pub old_inventory_code: Option<NullableString>,
    /// Base64 encoded status label, bare or wrapped.
    pub status: Option<NullableString>,
    #[serde(deserialize_with = "lenient_text")]
    pub created_at: String,
    #[serde(deserialize_with = "lenient_text")]
    pub created_by: String,
    pub updated_at: Option<NullableTime>,
    pub updated_by: Option<NullableString>,
    pub deleted_at: Option<NullableTime>,
    pub deleted_by: Option<NullableString>,
}

/// Strings pass through, numbers and booleans are rendered, anything else
/// becomes empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Whole counts. Fractional numbers are truncated, numeric strings are
/// parsed and everything else counts as zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.is_finite()).map(|n| n as i64)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(|n| n as i64)
            })
        }
        _ => None,
    };
    Ok(count.unwrap_or_default())
}

/// Money amounts as numbers or numeric strings; anything else is zero.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|n| n.is_finite()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_columns_take_defaults() {
        let item: Inventaris = serde_json::from_str(
            r#"{"inventaris_id": null, "nama_inventaris": null, "harga": null, "jumlah": null, "created_at": null}"#,
        )
        .unwrap();
        assert_eq!(item.inventaris_id, "");
        assert_eq!(item.nama_inventaris, "");
        assert_eq!(item.harga, 0.0);
        assert_eq!(item.jumlah, 0);
    }

    #[test]
    fn numeric_columns_accept_loose_numbers() {
        let item: Inventaris =
            serde_json::from_str(r#"{"jumlah": 2.0, "id": "17", "harga": "1500000"}"#).unwrap();
        assert_eq!(item.jumlah, 2);
        assert_eq!(item.id, 17);
        assert_eq!(item.harga, 1_500_000.0);
    }

    #[test]
    fn text_columns_render_scalars() {
        let vendor: Vendor =
            serde_json::from_str(r#"{"vendor_id": 42, "created_by": ["x"]}"#).unwrap();
        assert_eq!(vendor.vendor_id, "42");
        assert_eq!(vendor.created_by, "");
    }
}
