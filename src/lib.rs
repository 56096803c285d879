//! Schedule import and normalization for restaurant shift spreadsheets.
//!
//! Takes a table already read from an uploaded spreadsheet, works out whether
//! it is a one-row-per-shift column layout or a weekly roster grid, and turns
//! it into [`ShiftRecord`](models::ShiftRecord)s with 24-hour times, a
//! FOH/BOH department and a weekday.
//!
//! Cells that cannot be normalized are passed through and reported as
//! [`ImportWarning`](models::ImportWarning)s. Only structural problems, such
//! as a missing required column, abort an import.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod normalize;
pub mod parsing;
