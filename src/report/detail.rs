//! The per-worker detail section.

use crate::calculation::compute_row;
use crate::models::{Cell, Dataset, ReportSection};

const DETAIL_TITLE: &str = "Detail Pekerja";

/// Builds the per-worker detail section.
///
/// One row per worker in original input order, numbered from 1, with the
/// attendance cells rendered in display order rather than storage order.
/// The bonus has no column of its own but contributes to the total.
pub fn build_detail_section(dataset: &Dataset) -> ReportSection {
    let display_keys = dataset.display_day_keys();

    let mut header: Vec<String> = ["No", "Nama", "Kelas", "Group", "Rate"]
        .map(String::from)
        .to_vec();
    header.extend(display_keys.iter().map(|key| key.to_string()));
    header.extend(["Hari", "Upah Pokok", "Uang Beras", "Total", "Keterangan"].map(String::from));

    let rows = dataset
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let computed = compute_row(row, dataset);
            let mut cells: Vec<Cell> = Vec::with_capacity(header.len());
            cells.push(Cell::Number((index + 1) as f64));
            cells.push(Cell::from(row.name.as_str()));
            cells.push(Cell::from(row.class_label.as_str()));
            cells.push(Cell::from(row.group.as_str()));
            cells.push(Cell::Number(computed.rate));
            for &day_index in &dataset.display_day_order {
                cells.push(Cell::from(row.attendance[day_index].as_str()));
            }
            cells.push(Cell::Number(computed.days_worked));
            cells.push(Cell::Number(computed.base_pay));
            cells.push(Cell::Number(computed.allowance));
            cells.push(Cell::Number(computed.total_pay));
            cells.push(Cell::from(row.note.as_str()));
            cells
        })
        .collect();

    ReportSection {
        title: DETAIL_TITLE.to_string(),
        header,
        rows,
    }
}
