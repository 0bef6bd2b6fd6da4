//! Report encoders.
//!
//! This module serializes assembled report sections into their durable
//! formats: a delimited text table ([`csv`]) and a minimal spreadsheet
//! package ([`xlsx`]), plus the suggested-filename helper collaborators
//! use when offering the result for download.

pub mod csv;
pub mod filename;
pub mod xlsx;

pub use csv::sections_to_csv;
pub use filename::{suggested_name, timestamp_name};
pub use xlsx::sections_to_xlsx;
