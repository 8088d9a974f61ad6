pub mod error;
pub mod nullable;
pub mod options;
pub mod records;
pub mod vendor;

pub use error::{ModelError, Result};
pub use nullable::{NullableString, NullableTime, SqlNullString, SqlNullTime};
pub use options::DisplayOptions;
pub use records::{ApiResponse, Inventaris, Vendor};
pub use vendor::{VendorStatus, VendorUpdate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_requires_name_and_address() {
        let update = VendorUpdate {
            vendor_id: "V-01".to_string(),
            nama_vendor: " ".to_string(),
            alamat: "Jl. Merdeka 1".to_string(),
            status: VendorStatus::Aktif,
            updated_by: "siti".to_string(),
        };
        assert_eq!(
            update.validate(),
            Err(ModelError::MissingField("nama_vendor"))
        );
    }

    #[test]
    fn placeholder_only_replaces_blank() {
        let options = DisplayOptions::default();
        assert_eq!(options.or_placeholder(""), "-");
        assert_eq!(options.or_placeholder("Bandung"), "Bandung");
    }
}
