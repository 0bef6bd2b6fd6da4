//! Delimited text encoding of report sections.

use crate::models::{Cell, ReportSection};

/// Serializes report sections into a single CSV-style text blob.
///
/// Sections are separated by one blank line (none before the first); each
/// section contributes its title line, its header line, and one line per
/// row. Fields are comma-separated and lines CRLF-terminated throughout,
/// with no trailing terminator after the last line.
///
/// # Example
///
/// ```
/// use wage_report_engine::export::sections_to_csv;
/// use wage_report_engine::models::{Cell, ReportSection};
///
/// let section = ReportSection {
///     title: "Detail".to_string(),
///     header: vec!["No".to_string(), "Nama".to_string()],
///     rows: vec![vec![Cell::Number(1.0), Cell::from("Budi, Sr.")]],
/// };
/// let text = sections_to_csv(&[section]);
/// assert_eq!(text, "Detail\r\nNo,Nama\r\n1,\"Budi, Sr.\"");
/// ```
pub fn sections_to_csv(sections: &[ReportSection]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        if !section.title.is_empty() {
            lines.push(csv_escape(&section.title));
        }
        if !section.header.is_empty() {
            let header: Vec<String> = section.header.iter().map(|name| csv_escape(name)).collect();
            lines.push(header.join(","));
        }
        for row in &section.rows {
            let fields: Vec<String> = row.iter().map(render_field).collect();
            lines.push(fields.join(","));
        }
    }
    lines.join("\r\n")
}

fn render_field(cell: &Cell) -> String {
    csv_escape(&cell.render())
}

/// Quotes a field if and only if it contains a comma, a double quote, or
/// a line break, doubling any internal quotes.
fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
