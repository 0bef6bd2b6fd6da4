//! Workbook-level OOXML parts.

use std::fmt::Write;

use crate::models::ReportSection;

use super::escape_xml;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const WORKSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const WORKBOOK_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const STYLES_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

/// Characters a sheet name may not contain.
const INVALID_SHEET_NAME_CHARS: [char; 7] = ['\\', '*', '?', '[', ']', '/', ':'];

/// Maximum sheet name length accepted by spreadsheet consumers.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Cleans a section title into a legal sheet name.
///
/// Forbidden characters are replaced with spaces, the result is trimmed
/// and truncated to 31 characters, and an empty result falls back to
/// `"Sheet"`.
///
/// # Example
///
/// ```
/// use wage_report_engine::export::xlsx::sanitize_sheet_name;
///
/// assert_eq!(sanitize_sheet_name("a/b:c"), "a b c");
/// assert_eq!(sanitize_sheet_name("///"), "Sheet");
/// ```
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|ch| {
            if INVALID_SHEET_NAME_CHARS.contains(&ch) {
                ' '
            } else {
                ch
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return "Sheet".to_string();
    }
    cleaned.chars().take(MAX_SHEET_NAME_LEN).collect()
}

/// Builds the content-types manifest: defaults for `rels`/`xml` plus one
/// override per fixed part and per worksheet.
pub(crate) fn content_types_xml(sheet_count: usize) -> String {
    let mut overrides = String::new();
    for index in 1..=sheet_count {
        write!(
            overrides,
            r#"<Override PartName="/xl/worksheets/sheet{index}.xml" ContentType="{WORKSHEET_CONTENT_TYPE}"/>"#
        )
        .expect("writing to a String cannot fail");
    }
    format!(
        r#"{XML_DECLARATION}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="{WORKBOOK_CONTENT_TYPE}"/><Override PartName="/xl/styles.xml" ContentType="{STYLES_CONTENT_TYPE}"/>{overrides}</Types>"#
    )
}

/// Builds the package-level relationship part pointing at the workbook.
pub(crate) fn root_relationships_xml() -> String {
    format!(
        r#"{XML_DECLARATION}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
    )
}

/// Builds the workbook part listing one sheet per section.
///
/// Sheet names come from the section titles (sanitized); relationship ids
/// are assigned sequentially in section order.
pub(crate) fn workbook_xml(sections: &[ReportSection]) -> String {
    let mut sheets = String::new();
    for (index, section) in sections.iter().enumerate() {
        let title = if section.title.is_empty() {
            format!("Sheet {}", index + 1)
        } else {
            section.title.clone()
        };
        let name = escape_xml(&sanitize_sheet_name(&title));
        write!(
            sheets,
            r#"<sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#,
            id = index + 1
        )
        .expect("writing to a String cannot fail");
    }
    format!(
        r#"{XML_DECLARATION}<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{sheets}</sheets></workbook>"#
    )
}

/// Builds the workbook relationship part: one relationship per worksheet
/// plus one for the shared style part.
pub(crate) fn workbook_relationships_xml(sheet_count: usize) -> String {
    let mut relationships = String::new();
    for index in 1..=sheet_count {
        write!(
            relationships,
            r#"<Relationship Id="rId{index}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{index}.xml"/>"#
        )
        .expect("writing to a String cannot fail");
    }
    write!(
        relationships,
        r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
        sheet_count + 1
    )
    .expect("writing to a String cannot fail");
    format!(
        r#"{XML_DECLARATION}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{relationships}</Relationships>"#
    )
}

/// Builds the minimal style part: one default font, fill, border, and
/// cell format.
pub(crate) fn styles_xml() -> String {
    format!(
        r#"{XML_DECLARATION}<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><fonts count="1"><font><sz val="11"/><color theme="1"/><name val="Calibri"/><family val="2"/></font></fonts><fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills><borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders><cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs><cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs><cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles></styleSheet>"#
    )
}
