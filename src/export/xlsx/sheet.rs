//! Worksheet XML generation.

use std::fmt::Write;

use crate::models::{Cell, ReportSection};

/// Maps a one-based column index to its spreadsheet letter form.
///
/// Base-26 with no zero digit: 1→A, 26→Z, 27→AA, 703→AAA.
///
/// # Example
///
/// ```
/// use wage_report_engine::export::xlsx::column_letter;
///
/// assert_eq!(column_letter(1), "A");
/// assert_eq!(column_letter(26), "Z");
/// assert_eq!(column_letter(27), "AA");
/// ```
pub fn column_letter(index: usize) -> String {
    let mut n = index;
    let mut letters = String::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    if letters.is_empty() {
        letters.push('A');
    }
    letters
}

/// Escapes the five reserved XML characters to their entity forms.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders one report section as a worksheet part.
///
/// Layout: row 1 is the section title, row 2 is blank, row 3 holds the
/// header, rows 4+ the data. Numeric cells use the numeric cell type with
/// a literal value child; all other non-empty cells are inline strings
/// with escaped text. Empty cells are omitted from their row, and a row
/// with no emitted cells is written self-closing. The declared dimension
/// spans the widest row actually present.
pub(crate) fn sheet_xml(section: &ReportSection) -> String {
    let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(section.rows.len() + 3);
    grid.push(vec![Cell::Text(section.title.clone())]);
    grid.push(Vec::new());
    grid.push(section.header.iter().map(|name| Cell::from(name.as_str())).collect());
    grid.extend(section.rows.iter().cloned());

    let max_cols = grid.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let dimension = format!("A1:{}{}", column_letter(max_cols), grid.len());

    let mut rows_xml = String::new();
    for (row_index, row) in grid.iter().enumerate() {
        let reference = row_index + 1;
        let mut cells_xml = String::new();
        for (col_index, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let cell_ref = format!("{}{}", column_letter(col_index + 1), reference);
            match cell {
                Cell::Number(value) => {
                    write!(cells_xml, r#"<c r="{cell_ref}" t="n"><v>{value}</v></c>"#)
                        .expect("writing to a String cannot fail");
                }
                Cell::Text(text) => {
                    write!(
                        cells_xml,
                        r#"<c r="{cell_ref}" t="inlineStr"><is><t>{}</t></is></c>"#,
                        escape_xml(text)
                    )
                    .expect("writing to a String cannot fail");
                }
            }
        }
        if cells_xml.is_empty() {
            write!(rows_xml, r#"<row r="{reference}"/>"#).expect("writing to a String cannot fail");
        } else {
            write!(rows_xml, r#"<row r="{reference}">{cells_xml}</row>"#)
                .expect("writing to a String cannot fail");
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">\
         <dimension ref=\"{dimension}\"/>\
         <sheetData>{rows_xml}</sheetData>\
         </worksheet>"
    )
}
