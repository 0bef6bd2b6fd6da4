//! The per-weekday rollup section.

use crate::calculation::calc_day_weight;
use crate::models::{Cell, Dataset, ReportSection};

use super::TOTAL_LABEL;

const WEEKDAY_TITLE: &str = "Rekap Total per Hari";

/// Builds the per-weekday rollup section.
///
/// One row per day slot in display order, summing day weight and weighted
/// pay across all workers for that slot, followed by a trailing `TOTAL`
/// row. A slot whose day key is empty falls back to a positional label.
pub fn build_weekday_section(dataset: &Dataset) -> ReportSection {
    let display_keys = dataset.display_day_keys();

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(8);
    let mut total_days = 0.0;
    let mut total_pay = 0.0;
    for (slot, &day_index) in dataset.display_day_order.iter().enumerate() {
        let label = if display_keys[slot].is_empty() {
            format!("Hari {}", slot + 1)
        } else {
            display_keys[slot].to_string()
        };

        let mut days = 0.0;
        let mut pay = 0.0;
        for row in &dataset.rows {
            let value = &row.attendance[day_index];
            if value.is_empty() {
                continue;
            }
            let weight = calc_day_weight(value);
            if weight == 0.0 {
                continue;
            }
            days += weight;
            pay += weight * dataset.rate_table.rate_for(&row.class_label);
        }
        total_days += days;
        total_pay += pay;
        rows.push(vec![Cell::Text(label), Cell::Number(days), Cell::Number(pay)]);
    }
    if !rows.is_empty() {
        rows.push(vec![
            Cell::from(TOTAL_LABEL),
            Cell::Number(total_days),
            Cell::Number(total_pay),
        ]);
    }

    ReportSection {
        title: WEEKDAY_TITLE.to_string(),
        header: ["Tanggal", "Total Hari", "Total Upah"]
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
    fn test_seven_day_rows_plus_total() {
        let dataset = dataset_with_rows(vec![]);
        let section = build_weekday_section(&dataset);

        assert_eq!(section.rows.len(), 8);
        assert_eq!(section.rows[0][0], Cell::from("Minggu"));
        assert_eq!(section.rows[1][0], Cell::from("Senin"));
        assert_eq!(section.rows[7][0], Cell::from(TOTAL_LABEL));
    }

    #[test]
    fn test_sums_follow_storage_slots_through_display_order() {
        // Slot 0 (Senin) has a full day; slot 6 (Minggu) a half day.
        let dataset = dataset_with_rows(vec![
            worker("Tukang", ["Rumah A", "", "", "", "", "", "1/2 Lain"]),
        ]);
        let section = build_weekday_section(&dataset);

        // Minggu is rendered first.
        assert_eq!(section.rows[0][0], Cell::from("Minggu"));
        assert_eq!(section.rows[0][1], Cell::Number(0.5));
        assert_eq!(section.rows[0][2], Cell::Number(50.0));
        assert_eq!(section.rows[1][0], Cell::from("Senin"));
        assert_eq!(section.rows[1][1], Cell::Number(1.0));
        assert_eq!(section.rows[1][2], Cell::Number(100.0));
    }

    #[test]
    fn test_total_row_sums_the_week() {
        let dataset = dataset_with_rows(vec![
            worker("Tukang", ["Rumah A", "Rumah A", "", "", "", "", ""]),
            worker("Tukang", ["Rumah B", "", "", "", "", "", ""]),
        ]);
        let section = build_weekday_section(&dataset);

        let total = section.rows.last().unwrap();
        assert_eq!(total[1], Cell::Number(3.0));
        assert_eq!(total[2], Cell::Number(300.0));
    }

    #[test]
    fn test_empty_day_key_falls_back_to_positional_label() {
        let mut dataset = dataset_with_rows(vec![]);
        dataset.day_keys[6] = String::new();
        let section = build_weekday_section(&dataset);

        // Stored slot 6 is rendered first under the default display order.
        assert_eq!(section.rows[0][0], Cell::from("Hari 1"));
    }
}
