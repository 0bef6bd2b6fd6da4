//! Minimal OOXML spreadsheet package assembly.
//!
//! Emits the smallest part set a conforming consumer needs — content
//! types, package and workbook relationships, the workbook, one shared
//! style part, and one worksheet per report section — and packages them
//! with the archive writer. No spreadsheet library is involved.

mod parts;
mod sheet;

pub use parts::sanitize_sheet_name;
pub use sheet::{column_letter, escape_xml};

use tracing::debug;

use crate::archive::{ArchiveEntry, write_archive};
use crate::models::ReportSection;

/// Serializes report sections into a complete spreadsheet package.
///
/// Returns the bytes of a ZIP archive whose conventional file extension
/// is `.xlsx`. One worksheet is produced per section, in order.
///
/// # Example
///
/// ```
/// use wage_report_engine::export::sections_to_xlsx;
///
/// let bytes = sections_to_xlsx(&[]);
/// // Even an empty workbook is a structurally valid archive.
/// assert_eq!(&bytes[0..2], b"PK");
/// ```
pub fn sections_to_xlsx(sections: &[ReportSection]) -> Vec<u8> {
    let sheet_count = sections.len();
    let mut entries: Vec<ArchiveEntry> = Vec::with_capacity(sheet_count + 5);

    entries.push(ArchiveEntry::new(
        "[Content_Types].xml",
        parts::content_types_xml(sheet_count),
    ));
    entries.push(ArchiveEntry::new("_rels/.rels", parts::root_relationships_xml()));
    entries.push(ArchiveEntry::new("xl/workbook.xml", parts::workbook_xml(sections)));
    entries.push(ArchiveEntry::new(
        "xl/_rels/workbook.xml.rels",
        parts::workbook_relationships_xml(sheet_count),
    ));
    entries.push(ArchiveEntry::new("xl/styles.xml", parts::styles_xml()));
    for (index, section) in sections.iter().enumerate() {
        entries.push(ArchiveEntry::new(
            format!("xl/worksheets/sheet{}.xml", index + 1),
            sheet::sheet_xml(section),
        ));
    }

    debug!(sheets = sheet_count, parts = entries.len(), "assembled spreadsheet package");
    write_archive(&entries)
}
