//! Size and colour combinations actually offered per product.
//!
//! The table is listed by hand. It is sparse: Product A offers Red only in
//! Medium and X-Large, so it is not the cross product of sizes and colours.

use std::path::{Path, PathBuf};

use anyhow::Result;
use umya_spreadsheet::Spreadsheet;

use crate::model::Variant;
use crate::sheet::{self, Value};

pub const FILE_NAME: &str = "size_and_colors.xlsx";
pub const SHEET_NAME: &str = "Size and Colors";

pub const HEADERS: [&str; 4] = [
    "Product ID",
    "Product Name",
    "Available Sizes",
    "Available Colors",
];

const WIDTHS: [f64; 4] = [12.0, 15.0, 18.0, 18.0];

const OFFERED: [(&str, &str, &str, &str); 15] = [
    ("P001", "Product A", "Small", "Blue"),
    ("P001", "Product A", "Small", "Green"),
    ("P001", "Product A", "Medium", "Blue"),
    ("P001", "Product A", "Medium", "Green"),
    ("P001", "Product A", "Medium", "Red"),
    ("P001", "Product A", "Large", "Blue"),
    ("P001", "Product A", "Large", "Green"),
    ("P001", "Product A", "X-Large", "Red"),
    ("P001", "Product A", "X-Large", "Blue"),
    ("P002", "Product B", "One Size", "Black"),
    ("P002", "Product B", "One Size", "White"),
    ("P003", "Product C", "Small", "Navy"),
    ("P003", "Product C", "Medium", "Navy"),
    ("P003", "Product C", "Large", "Navy"),
    ("P004", "Product D", "One Size", "Gray"),
];

pub fn rows() -> Vec<Variant> {
    OFFERED
        .iter()
        .map(|&(product_id, product_name, size, color)| Variant {
            product_id,
            product_name,
            size,
            color,
        })
        .collect()
}

fn cells(variant: &Variant) -> Vec<Value> {
    vec![
        variant.product_id.into(),
        variant.product_name.into(),
        variant.size.into(),
        variant.color.into(),
    ]
}

pub fn workbook(variants: &[Variant]) -> Spreadsheet {
    let mut book = sheet::new_book(SHEET_NAME);
    let ws = book.get_active_sheet_mut();

    let style = sheet::header_style("ff70ad47", "ffffffff");
    let table: Vec<Vec<Value>> = variants.iter().map(cells).collect();
    sheet::write_table(ws, &HEADERS, &style, &table);
    sheet::set_column_widths(ws, &WIDTHS);
    book
}

pub fn create(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(FILE_NAME);
    sheet::save(&workbook(&rows()), &path)?;
    Ok(path)
}
