//! Sample orders plus the instruction note for the N/A convention.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use umya_spreadsheet::Spreadsheet;
use umya_spreadsheet::structs::VerticalAlignmentValues;

use crate::model::{NOT_APPLICABLE, Order};
use crate::sheet::{self, Value};

pub const FILE_NAME: &str = "orders.xlsx";
pub const SHEET_NAME: &str = "Orders";

pub const HEADERS: [&str; 9] = [
    "Order ID",
    "Customer Name",
    "Product ID",
    "Product Name",
    "Size",
    "Color",
    "Quantity",
    "Order Date",
    "Notes",
];

const WIDTHS: [f64; 9] = [10.0, 18.0, 12.0, 15.0, 12.0, 12.0, 10.0, 12.0, 40.0];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const ORDER_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(date) => date,
    None => panic!("invalid order date"),
};

pub const INSTRUCTIONS_TITLE: &str = "INSTRUCTIONS:";

pub const INSTRUCTIONS: &str = "\
- If a product has 'One Size' = Yes in the products sheet, enter 'N/A' in the Size column
- If a product has 'One Color' = Yes in the products sheet, enter 'N/A' in the Color column
- For products with both restrictions, both Size and Color should be 'N/A'
- In an automated system, these fields would be automatically disabled based on product settings";

/// Hand-written orders. Size/Color already hold [`NOT_APPLICABLE`] wherever
/// the product is flagged One Size/One Color; nothing here derives them.
pub fn rows() -> Vec<Order> {
    vec![
        Order {
            order_id: "O001",
            customer_name: "John Doe",
            product_id: "P001",
            product_name: "Product A",
            size: "Medium",
            color: "Red",
            quantity: 2,
            order_date: ORDER_DATE,
            notes: "Standard order",
        },
        Order {
            order_id: "O002",
            customer_name: "Jane Smith",
            product_id: "P002",
            product_name: "Product B",
            size: NOT_APPLICABLE,
            color: "Black",
            quantity: 1,
            order_date: ORDER_DATE,
            notes: "One Size product - size field disabled",
        },
        Order {
            order_id: "O003",
            customer_name: "Bob Johnson",
            product_id: "P003",
            product_name: "Product C",
            size: "Large",
            color: NOT_APPLICABLE,
            quantity: 3,
            order_date: ORDER_DATE,
            notes: "One Color product - color field disabled",
        },
        Order {
            order_id: "O004",
            customer_name: "Alice Williams",
            product_id: "P004",
            product_name: "Product D",
            size: NOT_APPLICABLE,
            color: NOT_APPLICABLE,
            quantity: 1,
            order_date: ORDER_DATE,
            notes: "One Size and One Color - both fields disabled",
        },
        Order {
            order_id: "O005",
            customer_name: "Charlie Brown",
            product_id: "P001",
            product_name: "Product A",
            size: "Small",
            color: "Blue",
            quantity: 2,
            order_date: ORDER_DATE,
            notes: "Standard order with multiple options",
        },
    ]
}

fn cells(order: &Order) -> Vec<Value> {
    vec![
        order.order_id.into(),
        order.customer_name.into(),
        order.product_id.into(),
        order.product_name.into(),
        order.size.into(),
        order.color.into(),
        order.quantity.into(),
        order.order_date.format(DATE_FORMAT).to_string().into(),
        order.notes.into(),
    ]
}

pub fn workbook(orders: &[Order]) -> Spreadsheet {
    let mut book = sheet::new_book(SHEET_NAME);
    let ws = book.get_active_sheet_mut();

    let style = sheet::header_style("ffffc000", "ff000000");
    let table: Vec<Vec<Value>> = orders.iter().map(cells).collect();
    let last_row = sheet::write_table(ws, &HEADERS, &style, &table);

    // one blank row, then the title, then the note merged across every column
    let title_row = last_row + 2;
    let title_addr = sheet::cell_ref(1, title_row);
    let title = ws.get_cell_mut(title_addr.as_str());
    title.set_value_string(INSTRUCTIONS_TITLE);
    let font = title.get_style_mut().get_font_mut();
    font.set_bold(true);
    font.set_size(12.0);

    let note_row = title_row + 1;
    let note_addr = sheet::cell_ref(1, note_row);
    let note = ws.get_cell_mut(note_addr.as_str());
    note.set_value_string(INSTRUCTIONS);
    let alignment = note.get_style_mut().get_alignment_mut();
    alignment.set_wrap_text(true);
    alignment.set_vertical(VerticalAlignmentValues::Top);
    ws.add_merge_cells(format!(
        "{}:{}",
        note_addr,
        sheet::cell_ref(HEADERS.len(), note_row)
    ));

    sheet::set_column_widths(ws, &WIDTHS);
    book
}

pub fn create(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(FILE_NAME);
    sheet::save(&workbook(&rows()), &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::conforms;
    use crate::{products, variants};

    #[test]
    fn five_orders_with_positive_quantities() {
        let orders = rows();
        assert_eq!(orders.len(), 5);
        assert!(orders.iter().all(|o| o.quantity > 0));
    }

    #[test]
    fn every_order_follows_the_flag_convention() {
        let catalog = products::rows();
        for order in rows() {
            let product = catalog
                .iter()
                .find(|p| p.id == order.product_id)
                .unwrap_or_else(|| panic!("{} references unknown product", order.order_id));
            assert!(conforms(&order, product), "{}", order.order_id);
            assert_eq!(order.product_name, product.name);
        }
    }

    #[test]
    fn real_sizes_and_colors_are_offered_variants() {
        let offered = variants::rows();
        for order in rows() {
            if order.size != NOT_APPLICABLE {
                assert!(
                    offered
                        .iter()
                        .any(|v| v.product_id == order.product_id && v.size == order.size),
                    "{}",
                    order.order_id
                );
            }
            if order.color != NOT_APPLICABLE {
                assert!(
                    offered
                        .iter()
                        .any(|v| v.product_id == order.product_id && v.color == order.color),
                    "{}",
                    order.order_id
                );
            }
        }
    }

    #[test]
    fn date_renders_as_iso_text() {
        let row = cells(&rows()[0]);
        assert_eq!(row[7], Value::Text("2026-01-01".into()));
        assert_eq!(row[6], Value::Number(2.0));
    }

    #[test]
    fn instructions_cover_both_flags() {
        assert_eq!(INSTRUCTIONS.lines().count(), 4);
        assert!(INSTRUCTIONS.contains("'One Size' = Yes"));
        assert!(INSTRUCTIONS.contains("'One Color' = Yes"));
    }
}
