//! Wage report generation engine for weekly attendance sheets.
//!
//! This crate turns a loosely-shaped attendance dataset into wage reports:
//! it normalizes the input into a canonical dataset, computes per-worker pay
//! (day weights, base pay, rice allowance, bonus), rolls the results up per
//! lodging and per weekday, and serializes the report either as CSV text or
//! as a spreadsheet package assembled by hand (ZIP container + OOXML parts,
//! no archive or spreadsheet library involved).

#![warn(missing_docs)]

pub mod archive;
pub mod calculation;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod report;
