//! Worker row model.
//!
//! This module defines the [`WorkerRow`] struct representing one worker's
//! line in the weekly attendance grid.

use serde::{Deserialize, Serialize};

/// One worker's line in the weekly attendance grid.
///
/// Every scalar field is a string; missing values are represented by the
/// empty string rather than by absence. The attendance sequence always has
/// exactly seven slots, one per stored weekday, each holding the name of
/// the lodging the worker was recorded at (or the empty string for an
/// absent day).
///
/// # Example
///
/// ```
/// use wage_report_engine::models::WorkerRow;
///
/// let row = WorkerRow {
///     name: "Budi".to_string(),
///     class_label: "Tukang".to_string(),
///     group: "A".to_string(),
///     attendance: std::array::from_fn(|_| String::new()),
///     note: String::new(),
///     bonus_raw: "Rp 50.000".to_string(),
/// };
/// assert_eq!(row.attendance.len(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerRow {
    /// The worker's display name.
    pub name: String,
    /// The worker's class label, used for rate lookup (e.g., "Tukang").
    pub class_label: String,
    /// The work group the worker belongs to.
    pub group: String,
    /// Seven attendance slots in storage order; empty string means absent.
    pub attendance: [String; 7],
    /// Free-form note shown in the detail report.
    pub note: String,
    /// The raw bonus string as entered; may contain currency formatting.
    pub bonus_raw: String,
}
