//! Report output models.
//!
//! This module contains the [`ReportSection`] type and its associated
//! structures that capture the assembled report before serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single cell of a report table, either text or a number.
///
/// Numeric cells keep their numeric identity all the way into the encoders
/// so that the spreadsheet output can emit them as numbers rather than
/// strings.
///
/// # Example
///
/// ```
/// use wage_report_engine::models::Cell;
///
/// let cell = Cell::Number(25200.0);
/// assert_eq!(cell.render(), "25200");
/// assert!(!cell.is_empty());
/// assert!(Cell::Text(String::new()).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A numeric cell value.
    Number(f64),
    /// A text cell value; the empty string counts as an empty cell.
    Text(String),
}

impl Cell {
    /// Returns true if this cell would render as nothing.
    ///
    /// Only empty text counts; a numeric 0 is a real value and is kept.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Text(text) if text.is_empty())
    }

    /// Renders the cell to its canonical text form.
    ///
    /// Numbers use the shortest decimal representation (`2` rather than
    /// `2.0`, `0.5` as-is).
    pub fn render(&self) -> String {
        match self {
            Cell::Number(value) => value.to_string(),
            Cell::Text(text) => text.clone(),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// One titled table within a generated report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// The section title, rendered above the table.
    pub title: String,
    /// Column headers.
    pub header: Vec<String>,
    /// Data rows; each row is a sequence of cells.
    pub rows: Vec<Vec<Cell>>,
}

/// Metadata stamped onto a generated report.
///
/// `generated_at` is the one field callers must treat as non-reproducible;
/// everything else in a report is a deterministic function of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// The moment the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The number of worker rows in the source dataset.
    pub rows_count: usize,
    /// Start of the reported period; may be empty.
    pub period_start: String,
    /// End of the reported period; may be empty.
    pub period_end: String,
}

/// A fully assembled report: the three sections plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The report sections, in fixed order: detail, per-lodging, per-weekday.
    pub sections: Vec<ReportSection>,
    /// Generation metadata.
    pub meta: ReportMeta,
}
