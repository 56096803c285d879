//! Normalizers for individual spreadsheet tokens.
//!
//! Each function is pure and total: every input produces a canonical value or
//! an explicit "not recognized" result, never a panic or an error.

mod day;
mod department;
mod name;
mod time;

pub use day::normalize_day;
pub use department::{classify_department, classify_department_with};
pub(crate) use department::classify_text;
pub use name::sanitize_name;
pub use time::{normalize_time, normalize_time_str};
