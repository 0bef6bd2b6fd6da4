//! Canonical dataset model.
//!
//! This module defines the [`Dataset`] struct, the canonical unit of work
//! for report generation, and the [`RateTable`] it carries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::WorkerRow;

/// Mapping from class label to a daily wage rate.
///
/// Unknown classes implicitly resolve to rate 0. Only finite values are
/// ever stored; attempts to insert a non-finite rate are ignored.
///
/// # Example
///
/// ```
/// use wage_report_engine::models::RateTable;
///
/// let mut rates = RateTable::new();
/// rates.insert("Tukang", 100.0);
/// assert_eq!(rates.rate_for("Tukang"), 100.0);
/// assert_eq!(rates.rate_for("unknown"), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<String, f64>);

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rate for a class label. Non-finite rates are ignored.
    pub fn insert(&mut self, class_label: impl Into<String>, rate: f64) {
        if rate.is_finite() {
            self.0.insert(class_label.into(), rate);
        }
    }

    /// Returns the rate for a class label, defaulting to 0 when unknown.
    pub fn rate_for(&self, class_label: &str) -> f64 {
        self.0.get(class_label).copied().unwrap_or(0.0)
    }

    /// Returns the number of classes with an explicit rate.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no class has an explicit rate.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The canonical unit of work for report generation.
///
/// A `Dataset` is constructed fresh by the normalizer from whichever source
/// is active at report-generation time and discarded after the report is
/// produced; it is never mutated in place.
///
/// Invariants upheld by the normalizer:
/// - `display_day_order` is always a full permutation of the indices 0..=6.
/// - `day_keys` always has exactly seven entries.
/// - Every row's attendance has exactly seven slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// The worker rows, in original input order.
    pub rows: Vec<WorkerRow>,
    /// Daily rates keyed by class label.
    pub rate_table: RateTable,
    /// Explicit display order of lodging names; may be empty.
    pub lodging_order: Vec<String>,
    /// Days-worked threshold above which the allowance is granted.
    pub allowance_threshold: f64,
    /// Flat allowance amount granted above the threshold.
    pub allowance_amount: f64,
    /// Weekday labels in storage order.
    pub day_keys: [String; 7],
    /// The order day slots are rendered, independent of storage order.
    pub display_day_order: [usize; 7],
    /// Start of the reported period; may be empty.
    pub period_start: String,
    /// End of the reported period; may be empty.
    pub period_end: String,
    /// Free-form provenance metadata (source tag, record ids, timestamps).
    pub provenance: BTreeMap<String, Value>,
}

impl Dataset {
    /// Returns the weekday labels in display order.
    ///
    /// Slots whose day key is empty yield the empty string; callers that
    /// need a visible label substitute their own fallback.
    pub fn display_day_keys(&self) -> [&str; 7] {
        self.display_day_order
            .map(|idx| self.day_keys[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{DEFAULT_DISPLAY_ORDER, normalize_dataset, Overrides, RawDataset};

    #[test]
    fn test_rate_table_defaults_unknown_class_to_zero() {
        let rates = RateTable::new();
        assert_eq!(rates.rate_for("Senior"), 0.0);
    }

    #[test]
    fn test_rate_table_ignores_non_finite_rates() {
        let mut rates = RateTable::new();
        rates.insert("Tukang", f64::NAN);
        rates.insert("Kenek", f64::INFINITY);
        assert!(rates.is_empty());
        assert_eq!(rates.rate_for("Tukang"), 0.0);
    }

    #[test]
    fn test_display_day_keys_follow_display_order() {
        let mut dataset = normalize_dataset(&RawDataset::default(), &Overrides::default());
        dataset.day_keys = [
            "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
        ]
        .map(String::from);
        dataset.display_day_order = DEFAULT_DISPLAY_ORDER;

        let keys = dataset.display_day_keys();
        assert_eq!(keys[0], "Minggu");
        assert_eq!(keys[1], "Senin");
        assert_eq!(keys[6], "Sabtu");
    }
}
