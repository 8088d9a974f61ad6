use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inv_normalize::{EMPTY_INVENTORY_LIST, EMPTY_VENDOR_LIST, InventoryCard, VendorCard};

pub fn print_vendor_table(cards: &[VendorCard], placeholder: &str) {
    if cards.is_empty() {
        println!("{EMPTY_VENDOR_LIST}");
        return;
    }
    println!("{}", vendor_table(cards, placeholder));
    println!("{} vendor", cards.len());
}

pub fn print_inventory_table(cards: &[InventoryCard], placeholder: &str) {
    if cards.is_empty() {
        println!("{EMPTY_INVENTORY_LIST}");
        return;
    }
    println!("{}", inventory_table(cards, placeholder));
    println!("{} inventaris, {} unit", cards.len(), total_quantity(cards));
}

fn total_quantity(cards: &[InventoryCard]) -> i64 {
    cards
        .iter()
        .fold(0_i64, |total, card| total.saturating_add(card.quantity))
}

fn vendor_table(cards: &[VendorCard], placeholder: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID Vendor"),
        header_cell("Nama Vendor"),
        header_cell("Alamat"),
        header_cell("Status"),
        header_cell("Diperbarui"),
    ]);
    apply_table_style(&mut table);
    for card in cards {
        table.add_row(vec![
            Cell::new(&card.vendor_id),
            Cell::new(&card.title).add_attribute(Attribute::Bold),
            Cell::new(&card.address),
            status_cell(&card.status),
            text_or_dim(&card.updated_at, placeholder),
        ]);
    }
    table
}

fn inventory_table(cards: &[InventoryCard], placeholder: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Nama Inventaris"),
        header_cell("Brand"),
        header_cell("Vendor"),
        header_cell("Ruangan"),
        header_cell("Tanggal Beli"),
        header_cell("Harga"),
        header_cell("Jumlah"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for card in cards {
        table.add_row(vec![
            Cell::new(&card.inventaris_id),
            Cell::new(&card.title).add_attribute(Attribute::Bold),
            optional_cell(card.brand.as_deref(), placeholder),
            optional_cell(card.vendor.as_deref(), placeholder),
            optional_cell(card.room.as_deref(), placeholder),
            Cell::new(&card.purchase_date),
            Cell::new(&card.price),
            Cell::new(card.quantity),
            status_cell(&card.status),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: &str) -> Cell {
    match status {
        "Aktif" | "Baik" => Cell::new(status).fg(Color::Green),
        "Tidak Aktif" | "Rusak" => Cell::new(status).fg(Color::Red),
        _ => Cell::new(status),
    }
}

fn optional_cell(value: Option<&str>, placeholder: &str) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell(placeholder),
    }
}

fn text_or_dim(value: &str, placeholder: &str) -> Cell {
    if value.is_empty() {
        dim_cell(placeholder)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
