use std::path::Path;

use anyhow::{Context, Result};
use umya_spreadsheet::structs::{HorizontalAlignmentValues, PatternValues, VerticalAlignmentValues};
use umya_spreadsheet::{Spreadsheet, Style, Worksheet};

/// One value in a table row. Numbers are stored as numeric cells, everything
/// else as plain strings so Excel never reinterprets them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

pub fn column_name(mut col: usize) -> String {
    // 1 -> A, 26 -> Z, 27 -> AA ...
    let mut name = String::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        name.push((b'A' + rem as u8) as char);
        col = (col - 1) / 26;
    }
    name.chars().rev().collect()
}

pub fn cell_ref(col_1_based: usize, row_1_based: usize) -> String {
    format!("{}{}", column_name(col_1_based), row_1_based)
}

/// Solid fill, bold font in `font_argb`, centred both ways.
///
/// Colours are passed in lowercase ARGB. umya-spreadsheet maps an uppercase
/// value that matches its built-in palette to `indexed="n"`, which some
/// viewers render with the wrong colour.
pub fn header_style(fill_argb: &str, font_argb: &str) -> Style {
    let mut style = Style::default();
    let pattern = style.get_fill_mut().get_pattern_fill_mut();
    pattern.set_pattern_type(PatternValues::Solid);
    pattern.get_foreground_color_mut().set_argb(fill_argb);
    pattern.get_background_color_mut().set_argb(fill_argb);

    let font = style.get_font_mut();
    font.set_bold(true);
    font.get_color_mut().set_argb(font_argb);

    let alignment = style.get_alignment_mut();
    alignment.set_horizontal(HorizontalAlignmentValues::Center);
    alignment.set_vertical(VerticalAlignmentValues::Center);
    style
}

/// Creates a workbook whose single sheet is renamed to `title`.
pub fn new_book(title: &str) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    book.get_active_sheet_mut().set_name(title);
    book
}

pub fn write_value(sheet: &mut Worksheet, col: usize, row: usize, value: &Value) {
    let addr = cell_ref(col, row);
    let cell = sheet.get_cell_mut(addr.as_str());
    match value {
        Value::Text(s) => {
            cell.set_value_string(s.as_str());
        }
        Value::Number(n) => {
            cell.set_value_number(*n);
        }
    }
}

/// Writes `headers` into row 1 with `style`, then `rows` from row 2 down.
/// Returns the last row written.
pub fn write_table(
    sheet: &mut Worksheet,
    headers: &[&str],
    style: &Style,
    rows: &[Vec<Value>],
) -> usize {
    for (i, header) in headers.iter().enumerate() {
        let addr = cell_ref(i + 1, 1);
        sheet.get_cell_mut(addr.as_str()).set_value_string(*header);
        sheet.get_cell_mut(addr.as_str()).set_style(style.clone());
    }

    for (row_idx, values) in rows.iter().enumerate() {
        let row = row_idx + 2;
        for (col_idx, value) in values.iter().enumerate() {
            write_value(sheet, col_idx + 1, row, value);
        }
    }

    rows.len() + 1
}

/// Sets widths starting at column A.
pub fn set_column_widths(sheet: &mut Worksheet, widths: &[f64]) {
    for (i, width) in widths.iter().enumerate() {
        sheet
            .get_column_dimension_mut(column_name(i + 1).as_str())
            .set_width(*width);
    }
}

pub fn save(book: &Spreadsheet, path: &Path) -> Result<()> {
    umya_spreadsheet::writer::xlsx::write(book, path)
        .with_context(|| format!("failed to save file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_roll_over() {
        assert_eq!(column_name(1), "A");
        assert_eq!(column_name(9), "I");
        assert_eq!(column_name(26), "Z");
        assert_eq!(column_name(27), "AA");
        assert_eq!(column_name(52), "AZ");
        assert_eq!(column_name(53), "BA");
    }

    #[test]
    fn cell_refs_are_a1() {
        assert_eq!(cell_ref(1, 1), "A1");
        assert_eq!(cell_ref(6, 1000), "F1000");
    }

    #[test]
    fn values_convert_by_kind() {
        assert_eq!(Value::from("P001"), Value::Text("P001".into()));
        assert_eq!(Value::from(2u32), Value::Number(2.0));
        assert_eq!(Value::from(29.99), Value::Number(29.99));
    }
}
