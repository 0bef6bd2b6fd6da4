//! Loose raw-source shapes accepted by the normalizer.
//!
//! Datasets arrive from several generations of storage, each with its own
//! field spelling and varying degrees of malformation. Rather than probing
//! an untyped object, every possible source field is declared here as an
//! optional [`serde_json::Value`], so each default-substitution path in the
//! normalizer is enumerable and testable in isolation. A JSON `null` is
//! treated the same as an absent field.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// A dataset as it arrives from a legacy or current source.
///
/// Field pairs like `allowance_threshold`/`threshold` are alternate
/// spellings from different storage generations; the normalizer resolves
/// each chain with the first present value winning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDataset {
    /// Worker rows under the current field name.
    pub rows: Option<Value>,
    /// Worker rows under the older field name.
    pub data: Option<Value>,
    /// Class-label to rate mapping.
    #[serde(rename = "classRates")]
    pub class_rates: Option<Value>,
    /// Lodging display order under the current field name.
    #[serde(rename = "lodgingOrder")]
    pub lodging_order: Option<Value>,
    /// Lodging display order under the legacy field name.
    pub rumah: Option<Value>,
    /// Allowance threshold under the current field name.
    #[serde(rename = "allowanceThreshold")]
    pub allowance_threshold: Option<Value>,
    /// Allowance threshold under the legacy field name.
    pub threshold: Option<Value>,
    /// Allowance amount under the current field name.
    #[serde(rename = "allowanceAmount")]
    pub allowance_amount: Option<Value>,
    /// Allowance amount under the legacy field name.
    pub allowance: Option<Value>,
    /// Weekday labels in storage order.
    #[serde(rename = "dayKeys")]
    pub day_keys: Option<Value>,
    /// Render order of the seven day slots.
    #[serde(rename = "displayDayOrder")]
    pub display_day_order: Option<Value>,
    /// Period start under the current field name.
    #[serde(rename = "periodStart")]
    pub period_start: Option<Value>,
    /// Period start under the legacy field name.
    pub periode: Option<Value>,
    /// Period end under the current field name.
    #[serde(rename = "periodEnd")]
    pub period_end: Option<Value>,
    /// Period end under the legacy field name.
    pub sd: Option<Value>,
    /// Source tag recorded by whichever collaborator produced the object.
    #[serde(rename = "__source")]
    pub source: Option<Value>,
}

impl RawDataset {
    /// Parses a raw dataset from a JSON snapshot string.
    ///
    /// This is the engine's only fallible entry point: the snapshot comes
    /// from an external collaborator and may not be valid JSON at all.
    /// Shape problems inside valid JSON never fail here; they degrade to
    /// defaults during normalization instead.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_report_engine::normalize::RawDataset;
    ///
    /// let raw = RawDataset::from_json_str(r#"{"rows": [], "threshold": "4"}"#).unwrap();
    /// assert!(raw.rows.is_some());
    /// assert!(RawDataset::from_json_str("not json").is_err());
    /// ```
    pub fn from_json_str(input: &str) -> EngineResult<Self> {
        serde_json::from_str(input).map_err(|e| EngineError::SnapshotParse {
            message: e.to_string(),
        })
    }
}

/// A worker row as it arrives from a source object.
///
/// Current sources use the English field names; legacy sources use the
/// Indonesian ones, accepted here as serde aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWorkerRow {
    /// Worker name.
    #[serde(alias = "nama")]
    pub name: Option<Value>,
    /// Class label.
    #[serde(rename = "classLabel", alias = "kelas")]
    pub class_label: Option<Value>,
    /// Work group.
    pub group: Option<Value>,
    /// The seven attendance slots.
    #[serde(alias = "rumah")]
    pub attendance: Option<Value>,
    /// Free-form note.
    #[serde(alias = "ket")]
    pub note: Option<Value>,
    /// Raw bonus string.
    pub bonus: Option<Value>,
}

/// Returns the value only if the field is present and not JSON `null`.
pub(crate) fn present(field: &Option<Value>) -> Option<&Value> {
    field.as_ref().filter(|value| !value.is_null())
}
