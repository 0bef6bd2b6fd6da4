//! Report assembly: the per-worker detail section and the two rollups.
//!
//! A report always carries three sections in fixed order: the per-worker
//! detail, the per-lodging rollup, and the per-weekday rollup. Assembly is
//! deterministic except for the generation timestamp stamped into the
//! report metadata.

mod detail;
mod lodging_rollup;
mod weekday_rollup;

pub use detail::build_detail_section;
pub use lodging_rollup::build_lodging_section;
pub use weekday_rollup::build_weekday_section;

use chrono::Utc;
use tracing::debug;

use crate::models::{Dataset, Report, ReportMeta, ReportSection};

/// Label of the synthetic trailing row summing a rollup section.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Builds the three report sections for a dataset, in fixed order.
///
/// This is the deterministic part of report generation: identical inputs
/// always produce identical sections.
pub fn build_sections(dataset: &Dataset) -> Vec<ReportSection> {
    vec![
        build_detail_section(dataset),
        build_lodging_section(dataset),
        build_weekday_section(dataset),
    ]
}

/// Builds a full report, stamping generation metadata.
///
/// The `generated_at` timestamp is the single non-reproducible output of
/// the engine.
///
/// # Example
///
/// ```
/// use wage_report_engine::normalize::{normalize_dataset, Overrides, RawDataset};
/// use wage_report_engine::report::build_report;
///
/// let dataset = normalize_dataset(&RawDataset::default(), &Overrides::default());
/// let report = build_report(&dataset);
/// assert_eq!(report.sections.len(), 3);
/// assert_eq!(report.meta.rows_count, 0);
/// ```
pub fn build_report(dataset: &Dataset) -> Report {
    let sections = build_sections(dataset);
    debug!(
        rows = dataset.rows.len(),
        sections = sections.len(),
        "built report"
    );
    Report {
        meta: ReportMeta {
            generated_at: Utc::now(),
            rows_count: dataset.rows.len(),
            period_start: dataset.period_start.clone(),
            period_end: dataset.period_end.clone(),
        },
        sections,
    }
}
