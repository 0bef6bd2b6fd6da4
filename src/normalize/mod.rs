//! Dataset normalization.
//!
//! This module turns a loosely-shaped [`RawDataset`] from any storage
//! generation into a canonical [`Dataset`] satisfying every invariant the
//! rest of the engine relies on. Normalization never fails: each missing or
//! malformed field is replaced by a documented default.

mod raw;

pub use raw::{RawDataset, RawWorkerRow};

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Dataset, RateTable, WorkerRow};

use raw::present;

/// Default days-worked threshold for the allowance.
pub const DEFAULT_ALLOWANCE_THRESHOLD: f64 = 3.9;

/// Default allowance amount, in currency units.
pub const DEFAULT_ALLOWANCE_AMOUNT: f64 = 20000.0;

/// Default weekday labels, in storage order.
pub const DEFAULT_DAY_KEYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

/// Default display order: the week is rendered starting from the last
/// stored slot (Sunday first), then the first six in storage order.
pub const DEFAULT_DISPLAY_ORDER: [usize; 7] = [6, 0, 1, 2, 3, 4, 5];

/// Provenance source tag substituted when the raw object carries none.
const DEFAULT_SOURCE_TAG: &str = "manual";

/// Caller-supplied values that take precedence over the raw object's own
/// fields.
///
/// A numeric override that is non-finite is treated as absent, falling
/// through to the source field chain.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit allowance threshold.
    pub allowance_threshold: Option<f64>,
    /// Explicit allowance amount.
    pub allowance_amount: Option<f64>,
    /// Explicit period start.
    pub period_start: Option<String>,
    /// Explicit period end.
    pub period_end: Option<String>,
    /// Extra provenance entries, merged over the source tag.
    pub provenance: BTreeMap<String, Value>,
}

/// Parses a JSON snapshot and normalizes it in one step.
///
/// The parse may fail (the snapshot crosses a transport boundary); the
/// normalization itself cannot.
pub fn normalize_snapshot(input: &str, overrides: &Overrides) -> EngineResult<Dataset> {
    let raw = RawDataset::from_json_str(input)?;
    Ok(normalize_dataset(&raw, overrides))
}

/// Turns a raw source object into a canonical [`Dataset`].
///
/// Never fails. Precedence for each value: explicit override, then the
/// source field chain (first present name wins), then the documented
/// default.
///
/// # Example
///
/// ```
/// use wage_report_engine::normalize::{normalize_dataset, Overrides, RawDataset};
///
/// let dataset = normalize_dataset(&RawDataset::default(), &Overrides::default());
/// assert_eq!(dataset.allowance_threshold, 3.9);
/// assert_eq!(dataset.allowance_amount, 20000.0);
/// assert_eq!(dataset.display_day_order, [6, 0, 1, 2, 3, 4, 5]);
/// assert!(dataset.rows.is_empty());
/// ```
pub fn normalize_dataset(raw: &RawDataset, overrides: &Overrides) -> Dataset {
    let rows = normalize_rows(present(&raw.rows).or_else(|| present(&raw.data)));
    let rate_table = normalize_rate_table(present(&raw.class_rates));
    let lodging_order =
        normalize_lodging_order(present(&raw.lodging_order).or_else(|| present(&raw.rumah)));

    let allowance_threshold = resolve_number(
        overrides.allowance_threshold,
        &[&raw.allowance_threshold, &raw.threshold],
        DEFAULT_ALLOWANCE_THRESHOLD,
    );
    let allowance_amount = resolve_number(
        overrides.allowance_amount,
        &[&raw.allowance_amount, &raw.allowance],
        DEFAULT_ALLOWANCE_AMOUNT,
    );

    let day_keys = normalize_day_keys(present(&raw.day_keys));
    let display_day_order =
        parse_display_order(present(&raw.display_day_order)).unwrap_or(DEFAULT_DISPLAY_ORDER);

    let period_start = resolve_string(
        overrides.period_start.as_deref(),
        &[&raw.period_start, &raw.periode],
    );
    let period_end = resolve_string(
        overrides.period_end.as_deref(),
        &[&raw.period_end, &raw.sd],
    );

    let mut provenance = BTreeMap::new();
    let source_tag = present(&raw.source)
        .map(coerce_string)
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| DEFAULT_SOURCE_TAG.to_string());
    provenance.insert("source".to_string(), Value::String(source_tag));
    for (key, value) in &overrides.provenance {
        provenance.insert(key.clone(), value.clone());
    }

    debug!(
        rows = rows.len(),
        classes = rate_table.len(),
        "normalized dataset"
    );

    Dataset {
        rows,
        rate_table,
        lodging_order,
        allowance_threshold,
        allowance_amount,
        day_keys,
        display_day_order,
        period_start,
        period_end,
        provenance,
    }
}

/// Coerces a JSON scalar to its string form.
///
/// Strings pass through, numbers and booleans render to their display
/// form, everything else (null, arrays, objects) becomes the empty string.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// Coerces a JSON scalar to a finite number, if it is one.
///
/// Numbers pass through, numeric strings parse; anything else, and any
/// non-finite result, is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Resolves a numeric field: finite override, else the first source field
/// that coerces to a finite number, else the default.
fn resolve_number(override_value: Option<f64>, chain: &[&Option<Value>], default: f64) -> f64 {
    if let Some(value) = override_value.filter(|v| v.is_finite()) {
        return value;
    }
    chain
        .iter()
        .filter_map(|field| present(field))
        .find_map(coerce_number)
        .unwrap_or(default)
}

/// Resolves a string field: override, else the first present source field
/// coerced to a string, else empty.
fn resolve_string(override_value: Option<&str>, chain: &[&Option<Value>]) -> String {
    if let Some(value) = override_value {
        return value.to_string();
    }
    chain
        .iter()
        .filter_map(|field| present(field))
        .map(coerce_string)
        .next()
        .unwrap_or_default()
}

fn normalize_rows(value: Option<&Value>) -> Vec<WorkerRow> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            let raw: RawWorkerRow = serde_json::from_value(item.clone()).unwrap_or_default();
            normalize_row(&raw)
        })
        .collect()
}

fn normalize_row(raw: &RawWorkerRow) -> WorkerRow {
    let mut attendance: [String; 7] = Default::default();
    if let Some(Value::Array(slots)) = present(&raw.attendance) {
        for (slot, value) in attendance.iter_mut().zip(slots.iter()) {
            *slot = coerce_string(value);
        }
    }
    WorkerRow {
        name: scalar_field(&raw.name),
        class_label: scalar_field(&raw.class_label),
        group: scalar_field(&raw.group),
        attendance,
        note: scalar_field(&raw.note),
        bonus_raw: scalar_field(&raw.bonus),
    }
}

fn scalar_field(field: &Option<Value>) -> String {
    present(field).map(coerce_string).unwrap_or_default()
}

fn normalize_rate_table(value: Option<&Value>) -> RateTable {
    let mut table = RateTable::new();
    if let Some(Value::Object(entries)) = value {
        for (class_label, rate_value) in entries {
            if let Some(rate) = coerce_number(rate_value) {
                table.insert(class_label.clone(), rate);
            }
        }
    }
    table
}

fn normalize_lodging_order(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(coerce_string)
        .filter(|name| !name.is_empty())
        .collect()
}

fn normalize_day_keys(value: Option<&Value>) -> [String; 7] {
    let Some(Value::Array(items)) = value else {
        return DEFAULT_DAY_KEYS.map(String::from);
    };
    let mut keys: [String; 7] = Default::default();
    for (key, value) in keys.iter_mut().zip(items.iter()) {
        *key = coerce_string(value);
    }
    keys
}

/// Parses a display order, accepting only a length-7 array of integers
/// forming a full permutation of 0..=6. Anything else is malformed and
/// yields `None` so the caller substitutes the default.
fn parse_display_order(value: Option<&Value>) -> Option<[usize; 7]> {
    let Some(Value::Array(items)) = value else {
        return None;
    };
    if items.len() != 7 {
        return None;
    }
    let mut order = [0usize; 7];
    let mut seen = [false; 7];
    for (slot, item) in items.iter().enumerate() {
        let index = item.as_i64()?;
        if !(0..7).contains(&index) {
            return None;
        }
        let index = index as usize;
        if seen[index] {
            return None;
        }
        seen[index] = true;
        order[slot] = index;
    }
    Some(order)
}
