//! Calculation logic for the wage report engine.
//!
//! This module contains all the calculation functions for determining pay:
//! day-weight derivation from attendance labels, bonus parsing from raw
//! currency strings, and the per-worker pay computation that combines rate
//! lookup, the allowance threshold rule, and the parsed bonus.

mod bonus;
mod day_weight;
mod worker_pay;

pub use bonus::parse_bonus;
pub use day_weight::{HALF_DAY_LABEL, HALF_DAY_PREFIX, calc_day_weight};
pub use worker_pay::{ComputedRow, compute_row};
