//! Core data models for the schedule import engine.
//!
//! This module contains the input table types, the normalized shift record
//! emitted by the parsers, and import warnings.

mod shift_record;
mod table;
mod warning;

pub use shift_record::{
    ClockTime, Day, Department, Normalized, RecordOrigin, ShiftRecord, SourceFormat,
};
pub use table::{CellValue, ColumnMapping, RawTable, Row};
pub use warning::{ImportWarning, WarningKind};
