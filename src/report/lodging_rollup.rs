//! The per-lodging rollup section.

use std::collections::{BTreeMap, HashSet};

use crate::calculation::calc_day_weight;
use crate::models::{Cell, Dataset, ReportSection};

use super::TOTAL_LABEL;

const LODGING_TITLE: &str = "Rekap Total per Rumah";

/// Builds the per-lodging rollup section.
///
/// For every non-empty attendance label across all rows and day slots, the
/// day weight and weighted pay are accumulated under the label text.
/// Labels that carry no weight are skipped entirely and never create a
/// bucket. Display order: the configured lodging order first (zero-filled
/// when a configured lodging was never observed), then observed labels
/// missing from the configuration in ascending lexicographic order. A
/// trailing `TOTAL` row is appended when at least one lodging row exists.
pub fn build_lodging_section(dataset: &Dataset) -> ReportSection {
    let mut totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for row in &dataset.rows {
        let rate = dataset.rate_table.rate_for(&row.class_label);
        for label in &row.attendance {
            if label.is_empty() {
                continue;
            }
            let weight = calc_day_weight(label);
            if weight == 0.0 {
                continue;
            }
            let entry = totals.entry(label.clone()).or_insert((0.0, 0.0));
            entry.0 += weight;
            entry.1 += weight * rate;
        }
    }

    let configured: HashSet<&str> = dataset.lodging_order.iter().map(String::as_str).collect();
    let mut ordered: Vec<String> = dataset.lodging_order.clone();
    // BTreeMap keys iterate in ascending lexicographic order already.
    ordered.extend(
        totals
            .keys()
            .filter(|name| !configured.contains(name.as_str()))
            .cloned(),
    );
    if ordered.is_empty() {
        ordered = totals.keys().cloned().collect();
    }

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(ordered.len() + 1);
    let mut total_days = 0.0;
    let mut total_pay = 0.0;
    for name in ordered {
        if name.is_empty() {
            continue;
        }
        let (days, pay) = totals.get(&name).copied().unwrap_or((0.0, 0.0));
        total_days += days;
        total_pay += pay;
        rows.push(vec![Cell::Text(name), Cell::Number(days), Cell::Number(pay)]);
    }
    if !rows.is_empty() {
        rows.push(vec![
            Cell::from(TOTAL_LABEL),
            Cell::Number(total_days),
            Cell::Number(total_pay),
        ]);
    }

    ReportSection {
        title: LODGING_TITLE.to_string(),
        header: ["Rumah", "Total Hari", "Total Upah"]
            .map(String::from)
            .to_vec(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerRow;
    use crate::normalize::{Overrides, RawDataset, normalize_dataset};

    fn dataset_with_rows(rows: Vec<WorkerRow>) -> Dataset {
        let mut dataset = normalize_dataset(&RawDataset::default(), &Overrides::default());
        dataset.rate_table.insert("Tukang", 100.0);
        dataset.rows = rows;
        dataset
    }

    fn worker(class_label: &str, slots: [&str; 7]) -> WorkerRow {
        WorkerRow {
            class_label: class_label.to_string(),
            attendance: slots.map(String::from),
            ..WorkerRow::default()
        }
    }

    #[test]
    fn test_empty_dataset_has_no_rows_and_no_total() {
        let dataset = dataset_with_rows(vec![]);
        let section = build_lodging_section(&dataset);
        assert!(section.rows.is_empty());
    }

    #[test]
    fn test_observed_labels_sorted_when_no_order_configured() {
        let dataset = dataset_with_rows(vec![
            worker("Tukang", ["Rumah B", "Rumah A", "", "", "", "", ""]),
        ]);
        let section = build_lodging_section(&dataset);

        assert_eq!(section.rows.len(), 3);
        assert_eq!(section.rows[0][0], Cell::from("Rumah A"));
        assert_eq!(section.rows[1][0], Cell::from("Rumah B"));
        assert_eq!(section.rows[2][0], Cell::from(TOTAL_LABEL));
    }

    #[test]
    fn test_configured_order_comes_first_with_zero_fill() {
        let mut dataset = dataset_with_rows(vec![
            worker("Tukang", ["Rumah Z", "", "", "", "", "", ""]),
        ]);
        dataset.lodging_order = vec!["Rumah B".to_string(), "Rumah A".to_string()];
        let section = build_lodging_section(&dataset);

        assert_eq!(section.rows[0][0], Cell::from("Rumah B"));
        assert_eq!(section.rows[0][1], Cell::Number(0.0));
        assert_eq!(section.rows[1][0], Cell::from("Rumah A"));
        assert_eq!(section.rows[2][0], Cell::from("Rumah Z"));
        assert_eq!(section.rows[3][0], Cell::from(TOTAL_LABEL));
    }

    #[test]
    fn test_half_day_labels_bucket_under_their_own_text() {
        let dataset = dataset_with_rows(vec![
            worker("Tukang", ["Rumah A", "1/2 Lain", "", "", "", "", ""]),
        ]);
        let section = build_lodging_section(&dataset);

        assert_eq!(section.rows[0][0], Cell::from("1/2 Lain"));
        assert_eq!(section.rows[0][1], Cell::Number(0.5));
        assert_eq!(section.rows[0][2], Cell::Number(50.0));
        assert_eq!(section.rows[1][0], Cell::from("Rumah A"));
        assert_eq!(section.rows[1][1], Cell::Number(1.0));
        assert_eq!(section.rows[1][2], Cell::Number(100.0));
    }

    #[test]
    fn test_total_row_sums_all_lodgings() {
        let dataset = dataset_with_rows(vec![
            worker("Tukang", ["Rumah A", "Rumah A", "", "", "", "", ""]),
            worker("Tukang", ["Rumah B", "", "", "", "", "", ""]),
        ]);
        let section = build_lodging_section(&dataset);

        let total = section.rows.last().unwrap();
        assert_eq!(total[0], Cell::from(TOTAL_LABEL));
        assert_eq!(total[1], Cell::Number(3.0));
        assert_eq!(total[2], Cell::Number(300.0));
    }

    #[test]
    fn test_whitespace_labels_never_create_buckets() {
        let dataset = dataset_with_rows(vec![worker("Tukang", [" ", "", "", "", "", "", ""])]);
        let section = build_lodging_section(&dataset);
        assert!(section.rows.is_empty());
    }
}
