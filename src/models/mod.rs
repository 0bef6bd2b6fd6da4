//! Core data models for the wage report engine.
//!
//! This module contains all the domain models used throughout the engine.

mod dataset;
mod report;
mod worker_row;

pub use dataset::{Dataset, RateTable};
pub use report::{Cell, Report, ReportMeta, ReportSection};
pub use worker_row::WorkerRow;
