//! Per-worker pay computation.
//!
//! This module combines the day-weight rule, rate lookup, the allowance
//! threshold rule, and bonus parsing into the full pay line for one worker
//! row. No step here can fail: invalid inputs degrade to zero
//! contributions rather than aborting report generation.

use serde::{Deserialize, Serialize};

use crate::models::{Dataset, WorkerRow};

use super::{calc_day_weight, parse_bonus};

/// The derived pay values for one worker row.
///
/// Never persisted; recomputed on every report generation.
///
/// # Example
///
/// ```
/// use wage_report_engine::calculation::compute_row;
/// use wage_report_engine::models::WorkerRow;
/// use wage_report_engine::normalize::{normalize_dataset, Overrides, RawDataset};
///
/// let mut dataset = normalize_dataset(&RawDataset::default(), &Overrides::default());
/// dataset.rate_table.insert("Tukang", 100.0);
/// dataset.allowance_threshold = 1.5;
///
/// let mut row = WorkerRow::default();
/// row.class_label = "Tukang".to_string();
/// row.attendance[1] = "X".to_string();
/// row.attendance[2] = "X".to_string();
/// row.bonus_raw = "5000".to_string();
///
/// let computed = compute_row(&row, &dataset);
/// assert_eq!(computed.days_worked, 2.0);
/// assert_eq!(computed.total_pay, 25200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedRow {
    /// The daily rate resolved from the worker's class label.
    pub rate: f64,
    /// Sum of the seven per-day attendance weights.
    pub days_worked: f64,
    /// `days_worked` × `rate`.
    pub base_pay: f64,
    /// The flat allowance, granted only above the threshold.
    pub allowance: f64,
    /// The bonus parsed from the raw bonus string.
    pub bonus: f64,
    /// `base_pay` + `allowance` + `bonus`.
    pub total_pay: f64,
}

/// Computes the pay line for one worker row against a dataset.
///
/// The allowance comparison is strict: a worker whose days worked exactly
/// equal the threshold receives no allowance.
pub fn compute_row(row: &WorkerRow, dataset: &Dataset) -> ComputedRow {
    let rate = dataset.rate_table.rate_for(&row.class_label);
    let days_worked: f64 = row
        .attendance
        .iter()
        .map(|label| calc_day_weight(label))
        .sum();
    let base_pay = days_worked * rate;
    let allowance = if days_worked > dataset.allowance_threshold {
        dataset.allowance_amount
    } else {
        0.0
    };
    let bonus = parse_bonus(&row.bonus_raw);
    let total_pay = base_pay + allowance + bonus;

    ComputedRow {
        rate,
        days_worked,
        base_pay,
        allowance,
        bonus,
        total_pay,
    }
}
