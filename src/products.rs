//! Product catalog sheet with the One Size / One Color flags.

use std::path::{Path, PathBuf};

use anyhow::Result;
use umya_spreadsheet::Spreadsheet;
use umya_spreadsheet::structs::{
    DataValidation, DataValidationValues, DataValidations, SequenceOfReferences,
};

use crate::model::{NO, Product, YES, yes_no};
use crate::sheet::{self, Value};

pub const FILE_NAME: &str = "products.xlsx";
pub const SHEET_NAME: &str = "Products";

pub const HEADERS: [&str; 6] = [
    "Product ID",
    "Product Name",
    "Description",
    "Price",
    "One Size",
    "One Color",
];

const WIDTHS: [f64; 6] = [12.0, 15.0, 40.0, 10.0, 12.0, 12.0];

/// Cells covered by the Yes/No dropdown: One Size (E) and One Color (F).
pub const FLAG_RANGES: [&str; 2] = ["E2:E1000", "F2:F1000"];

pub const ERROR_TITLE: &str = "Invalid Value";
pub const ERROR_MESSAGE: &str = "Please select Yes or No";

pub fn rows() -> Vec<Product> {
    vec![
        Product {
            id: "P001",
            name: "Product A",
            description: "Standard product with multiple sizes and colors",
            price: 29.99,
            one_size: false,
            one_color: false,
        },
        Product {
            id: "P002",
            name: "Product B",
            description: "One size fits all product",
            price: 19.99,
            one_size: true,
            one_color: false,
        },
        Product {
            id: "P003",
            name: "Product C",
            description: "Available in one color only",
            price: 24.99,
            one_size: false,
            one_color: true,
        },
        Product {
            id: "P004",
            name: "Product D",
            description: "Single size and color variant",
            price: 15.99,
            one_size: true,
            one_color: true,
        },
    ]
}

fn cells(product: &Product) -> Vec<Value> {
    vec![
        product.id.into(),
        product.name.into(),
        product.description.into(),
        product.price.into(),
        yes_no(product.one_size).into(),
        yes_no(product.one_color).into(),
    ]
}

/// List validation restricting the flag columns to Yes or No.
pub fn yes_no_validation() -> DataValidation {
    let mut validation = DataValidation::default();
    validation.set_type(DataValidationValues::List);
    validation.set_formula1(format!("\"{YES},{NO}\""));
    validation.set_allow_blank(false);
    validation.set_show_error_message(true);
    validation.set_error_title(ERROR_TITLE);
    validation.set_error_message(ERROR_MESSAGE);

    let mut sqref = SequenceOfReferences::default();
    sqref.set_sqref(FLAG_RANGES.join(" "));
    validation.set_sequence_of_references(sqref);
    validation
}

pub fn workbook(products: &[Product]) -> Spreadsheet {
    let mut book = sheet::new_book(SHEET_NAME);
    let ws = book.get_active_sheet_mut();

    let style = sheet::header_style("ff4472c4", "ffffffff");
    let table: Vec<Vec<Value>> = products.iter().map(cells).collect();
    sheet::write_table(ws, &HEADERS, &style, &table);

    let mut validations = DataValidations::default();
    validations.add_data_validation_list(yes_no_validation());
    ws.set_data_validations(validations);

    sheet::set_column_widths(ws, &WIDTHS);
    book
}

pub fn create(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(FILE_NAME);
    sheet::save(&workbook(&rows()), &path)?;
    Ok(path)
}
