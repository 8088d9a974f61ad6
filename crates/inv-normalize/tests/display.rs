//! Tests for the vendor and inventory cards.

use inv_model::{
    ApiResponse, DisplayOptions, Inventaris, NullableString, NullableTime, Vendor, VendorStatus,
};
use inv_normalize::{InventoryCard, VendorCard, VendorForm};

fn vendor_fixture() -> Vendor {
    Vendor {
        vendor_id: "V-001".to_string(),
        nama_vendor: Some(NullableString::valid("PT Sinar Jaya")),
        alamat: Some(NullableString::invalid("stale address")),
        status: Some(NullableString::plain("VGlkYWsgQWt0aWY=")),
        id: 1,
        created_at: "2024-01-15T08:30:00Z".to_string(),
        created_by: "admin".to_string(),
        updated_at: Some(NullableTime::valid("2024-05-02T09:00:00+07:00")),
        ..Vendor::default()
    }
}

#[test]
fn vendor_card_renders() {
    let card = VendorCard::from_vendor(&vendor_fixture(), &DisplayOptions::default());
    insta::assert_snapshot!(card.to_string(), @r"
    PT Sinar Jaya
    ID Vendor: V-001
    Alamat: -
    Status: Tidak Aktif
    Diperbarui: 02-Mei-2024
    ");
}

#[test]
fn vendor_card_uses_fallback_title() {
    let vendor = Vendor {
        vendor_id: "V-002".to_string(),
        nama_vendor: Some(NullableString::invalid("")),
        ..Vendor::default()
    };
    let card = VendorCard::from_vendor(&vendor, &DisplayOptions::default());
    assert_eq!(card.title, "Nama Vendor Tidak Tersedia");
    assert_eq!(card.status, "-");
    assert_eq!(card.updated_at, "");

    let options = DisplayOptions::new()
        .with_placeholder("n/a")
        .with_missing_vendor_name("Tanpa nama");
    let card = VendorCard::from_vendor(&vendor, &options);
    assert_eq!(card.title, "Tanpa nama");
    assert_eq!(card.address, "n/a");
}

#[test]
fn inventory_card_hides_invalid_relations() {
    let body = r#"{
        "data": [{
            "inventaris_id": "INV-7",
            "nama_inventaris": "Laptop",
            "tanggal_beli": "2023-08-17",
            "harga": 12500000,
            "image_url": {"String": "", "Valid": false},
            "nama_brand": {"String": "Lenovo", "Valid": true},
            "nama_vendor": {"String": "PT Sinar Jaya", "Valid": false},
            "nama_ruangan": {"String": "Lab 2", "Valid": true},
            "id": 7,
            "jumlah": 3,
            "status": {"String": "QmFpaw==", "Valid": true}
        }],
        "message": "ok"
    }"#;
    let response: ApiResponse<Vec<Inventaris>> = serde_json::from_str(body).unwrap();
    let card = InventoryCard::from_item(&response.data[0], &DisplayOptions::default());

    assert_eq!(card.vendor, None);
    assert_eq!(card.image_url, None);
    insta::assert_snapshot!(card.to_string(), @r"
    Laptop
    ID: INV-7
    Brand: Lenovo
    Ruangan: Lab 2
    Tanggal Beli: 17-Agu-2023
    Harga: Rp 12.500.000
    Jumlah: 3
    Status: Baik
    ");
}

#[test]
fn inventory_card_keeps_unparseable_date() {
    let item = Inventaris {
        inventaris_id: "INV-8".to_string(),
        tanggal_beli: "tidak diketahui".to_string(),
        harga: 1500.5,
        ..Inventaris::default()
    };
    let card = InventoryCard::from_item(&item, &DisplayOptions::default());
    assert_eq!(card.title, "Nama Inventaris Tidak Tersedia");
    assert_eq!(card.purchase_date, "tidak diketahui");
    assert_eq!(card.price, "Rp 1.500,5");
    assert_eq!(card.status, "-");
}

#[test]
fn form_prefills_from_record() {
    let form = VendorForm::from_vendor(&vendor_fixture());
    assert_eq!(form.nama_vendor, "PT Sinar Jaya");
    assert_eq!(form.alamat, "");
    assert_eq!(form.status, VendorStatus::TidakAktif);

    let update = form.into_update("siti");
    assert_eq!(update.updated_by, "siti");
    assert_eq!(update.vendor_id, "V-001");
}

#[test]
fn form_defaults_unknown_status() {
    let vendor = Vendor {
        vendor_id: "V-003".to_string(),
        status: Some(NullableString::plain("Rusak")),
        ..Vendor::default()
    };
    assert_eq!(VendorForm::from_vendor(&vendor).status, VendorStatus::Aktif);
}

#[test]
fn inventory_card_titles_null_name() {
    let body = r#"{"data": [{"inventaris_id": "INV-8", "nama_inventaris": null, "jumlah": 1}]}"#;
    let response: ApiResponse<Vec<Inventaris>> = serde_json::from_str(body).expect("decode");
    let card = InventoryCard::from_item(&response.data[0], &DisplayOptions::default());
    assert_eq!(card.title, "Nama Inventaris Tidak Tersedia");
}
