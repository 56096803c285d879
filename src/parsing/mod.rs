//! Layout detection and the two table parsers.
//!
//! [`detect_format`] picks a [`ScheduleFormat`]; the orchestrator then runs
//! either [`parse_column_schedule`] or [`parse_weekly_roster`]. Both return
//! [`ParsedShifts`]: the records plus any per-cell warnings.

mod column_schedule;
mod format_detection;
mod weekly_roster;

use crate::models::{ImportWarning, ShiftRecord};

pub use column_schedule::{parse_column_schedule, parse_column_schedule_with};
pub(crate) use column_schedule::validate_mapping;
pub use format_detection::{
    ScheduleFormat, detect_format, detect_format_with, has_employee_column, is_day_date_header,
};
pub(crate) use format_detection::detect_format_excluding;
pub use weekly_roster::{parse_weekly_roster, parse_weekly_roster_with};
pub(crate) use weekly_roster::find_name_column;

/// Output of a parser run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedShifts {
    /// Records in row order (and day-column order within a roster row).
    pub records: Vec<ShiftRecord>,
    /// Per-cell issues that did not stop parsing.
    pub warnings: Vec<ImportWarning>,
}
