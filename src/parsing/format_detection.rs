//! Input layout detection.
//!
//! Decides from headers and a sample of cell values whether a table is a
//! column schedule or a weekly roster. Any single roster signal is enough.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DetectionConfig;
use crate::models::{CellValue, RawTable, SourceFormat};

const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

const DAY_ABBREVIATIONS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

lazy_static! {
    static ref DATE_HEADER: Regex = Regex::new(r"^\d{1,2}/\d{1,2}/(\d{2}|\d{4})$")
        .expect("Failed to compile DATE_HEADER regex");
    static ref DAY_DATE_HEADER: Regex =
        Regex::new(r"(?i)^[a-z]+,\s*\d{1,2}/\d{1,2}/(\d{2}|\d{4})$")
            .expect("Failed to compile DAY_DATE_HEADER regex");
}

/// The two supported input layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleFormat {
    /// One row per shift with Name/Start/End/Area/Day columns.
    Column,
    /// One row per employee with one column per day.
    WeeklyRoster,
}

impl ScheduleFormat {
    /// The source tag carried by records parsed from this layout.
    pub fn source_format(&self) -> SourceFormat {
        match self {
            ScheduleFormat::Column => SourceFormat::Column,
            ScheduleFormat::WeeklyRoster => SourceFormat::WeeklyRoster,
        }
    }
}

impl fmt::Display for ScheduleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source_format(), f)
    }
}

/// Which roster signal fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RosterSignal {
    DayNameHeader,
    DateHeader,
    DayPrefixedHeader,
    EmbeddedShiftText,
}

/// Detects the layout using the default detection settings.
///
/// # Example
///
/// ```
/// use schedule_import::models::RawTable;
/// use schedule_import::parsing::{detect_format, ScheduleFormat};
///
/// let roster = RawTable::from_grid(vec!["Name", "Sun, 5/18/25"], vec![]);
/// assert_eq!(detect_format(&roster), ScheduleFormat::WeeklyRoster);
///
/// let column = RawTable::from_grid(
///     vec!["Employee Name", "Start Time", "End Time", "Area", "Day"],
///     vec![],
/// );
/// assert_eq!(detect_format(&column), ScheduleFormat::Column);
/// ```
pub fn detect_format(table: &RawTable) -> ScheduleFormat {
    detect_format_with(table, &DetectionConfig::default())
}

/// Detects the layout using the given detection settings.
pub fn detect_format_with(table: &RawTable, config: &DetectionConfig) -> ScheduleFormat {
    detect_format_excluding(table, config, &[])
}

/// Detects the layout, also leaving the named headers out of value sampling.
///
/// The orchestrator passes the mapped start and end columns here so that a
/// column schedule with time headers such as `In`/`Out` stays a column
/// schedule.
pub(crate) fn detect_format_excluding(
    table: &RawTable,
    config: &DetectionConfig,
    excluded: &[&str],
) -> ScheduleFormat {
    match roster_signal(table, config, excluded) {
        Some(signal) => {
            debug!(?signal, "Detected weekly roster layout");
            ScheduleFormat::WeeklyRoster
        }
        None => {
            debug!("Detected column layout");
            ScheduleFormat::Column
        }
    }
}

fn roster_signal(
    table: &RawTable,
    config: &DetectionConfig,
    excluded: &[&str],
) -> Option<RosterSignal> {
    let headers = table.headers();

    if headers.iter().any(|h| is_day_name_header(h)) {
        return Some(RosterSignal::DayNameHeader);
    }

    if headers.iter().any(|h| is_date_header(h, &config.extra_date_markers)) {
        return Some(RosterSignal::DateHeader);
    }

    if headers.iter().any(|h| has_day_prefix(h)) {
        return Some(RosterSignal::DayPrefixedHeader);
    }

    if table.len() > 1 && has_embedded_shift_text(table, &config.time_column_markers, excluded) {
        return Some(RosterSignal::EmbeddedShiftText);
    }

    None
}

fn is_day_name_header(header: &str) -> bool {
    let header = header.trim().to_lowercase();
    DAY_NAMES.contains(&header.as_str()) || DAY_ABBREVIATIONS.contains(&header.as_str())
}

fn is_date_header(header: &str, extra_markers: &[String]) -> bool {
    let trimmed = header.trim();
    if DATE_HEADER.is_match(trimmed) || DAY_DATE_HEADER.is_match(trimmed) {
        return true;
    }

    let lowercased = trimmed.to_lowercase();
    MONTH_NAMES.iter().any(|m| lowercased.contains(m))
        || extra_markers.iter().any(|m| trimmed.contains(m.as_str()))
}

fn has_day_prefix(header: &str) -> bool {
    let prefix: String = header.chars().take(3).collect::<String>().to_lowercase();
    DAY_ABBREVIATIONS.contains(&prefix.as_str())
}

/// Samples the first row, skipping explicit time columns.
fn has_embedded_shift_text(
    table: &RawTable,
    time_column_markers: &[String],
    excluded: &[&str],
) -> bool {
    let Some(first) = table.rows().first() else {
        return false;
    };

    table
        .headers()
        .iter()
        .filter(|h| !excluded.contains(&h.as_str()))
        .filter(|h| {
            let lowercased = h.to_lowercase();
            !time_column_markers
                .iter()
                .any(|m| lowercased.contains(m.as_str()))
        })
        .filter_map(|h| match first.cell(h) {
            CellValue::Text(text) => Some(text),
            _ => None,
        })
        .any(|text| text.contains("AM") || text.contains("PM") || text.contains(':'))
}

/// Returns true for headers that name a day-date column of a weekly roster.
pub fn is_day_date_header(header: &str) -> bool {
    header.contains('/') || header.contains(',')
}

/// Returns true if any header mentions an employee or a name.
pub fn has_employee_column(table: &RawTable) -> bool {
    table.headers().iter().any(|h| {
        let lowercased = h.to_lowercase();
        lowercased.contains("employee") || lowercased.contains("name")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_only(headers: Vec<&str>) -> RawTable {
        RawTable::from_grid(headers, vec![])
    }

    // ==========================================================================
    // Header signals
    // ==========================================================================
    #[test]
    fn test_day_name_headers() {
        assert_eq!(
            detect_format(&headers_only(vec!["Employee", "Sun", "Mon"])),
            ScheduleFormat::WeeklyRoster
        );
        assert_eq!(
            detect_format(&headers_only(vec!["Employee", "Wednesday"])),
            ScheduleFormat::WeeklyRoster
        );
    }

    #[test]
    fn test_plain_date_headers() {
        assert_eq!(
            detect_format(&headers_only(vec!["Staff", "5/18/25"])),
            ScheduleFormat::WeeklyRoster
        );
        assert_eq!(
            detect_format(&headers_only(vec!["Staff", "12/1/2025"])),
            ScheduleFormat::WeeklyRoster
        );
    }

    #[test]
    fn test_day_date_compound_header() {
        assert_eq!(
            detect_format(&headers_only(vec!["Name", "Sun, 5/18/25"])),
            ScheduleFormat::WeeklyRoster
        );
    }

    #[test]
    fn test_month_name_header() {
        assert_eq!(
            detect_format(&headers_only(vec!["Staff", "June 2 Shift"])),
            ScheduleFormat::WeeklyRoster
        );
    }

    #[test]
    fn test_configured_date_marker() {
        let config = DetectionConfig {
            extra_date_markers: vec!["wk23".to_string()],
            ..DetectionConfig::default()
        };
        let table = headers_only(vec!["Staff", "wk23-a"]);

        assert_eq!(detect_format(&table), ScheduleFormat::Column);
        assert_eq!(detect_format_with(&table, &config), ScheduleFormat::WeeklyRoster);
    }

    #[test]
    fn test_day_prefixed_header() {
        assert_eq!(
            detect_format(&headers_only(vec!["Staff", "Thu 22"])),
            ScheduleFormat::WeeklyRoster
        );
    }

    #[test]
    fn test_column_headers() {
        assert_eq!(
            detect_format(&headers_only(vec![
                "Employee Name",
                "Start Time",
                "End Time",
                "Area",
                "Day"
            ])),
            ScheduleFormat::Column
        );
    }

    // ==========================================================================
    // Value sampling
    // ==========================================================================
    #[test]
    fn test_embedded_shift_text_needs_more_than_one_row() {
        let one_row = RawTable::from_grid(
            vec!["Staff", "Week"],
            vec![vec!["Bob".into(), "8:00 AM - 4:00 PM".into()]],
        );
        assert_eq!(detect_format(&one_row), ScheduleFormat::Column);

        let two_rows = RawTable::from_grid(
            vec!["Staff", "Week"],
            vec![
                vec!["Bob".into(), "8:00 AM - 4:00 PM".into()],
                vec!["Amy".into(), "".into()],
            ],
        );
        assert_eq!(detect_format(&two_rows), ScheduleFormat::WeeklyRoster);
    }

    #[test]
    fn test_time_columns_are_not_sampled() {
        let table = RawTable::from_grid(
            vec!["Name", "Start", "End", "Area"],
            vec![
                vec!["Jane".into(), "12:00 PM".into(), "8:00 PM".into(), "Drive Thru".into()],
                vec!["Bob".into(), "8:00 AM".into(), "4:00 PM".into(), "Kitchen".into()],
            ],
        );
        assert_eq!(detect_format(&table), ScheduleFormat::Column);
    }

    #[test]
    fn test_excluded_headers_are_not_sampled() {
        let table = RawTable::from_grid(
            vec!["Employee", "In", "Out", "Station"],
            vec![
                vec!["Ray".into(), "7:00 AM".into(), "3:00 PM".into(), "Prep".into()],
                vec!["Sue".into(), "9:00 AM".into(), "5:00 PM".into(), "Cashier".into()],
            ],
        );
        let config = DetectionConfig::default();

        assert_eq!(detect_format_with(&table, &config), ScheduleFormat::WeeklyRoster);
        assert_eq!(
            detect_format_excluding(&table, &config, &["In", "Out"]),
            ScheduleFormat::Column
        );
    }

    #[test]
    fn test_numeric_cells_are_not_shift_text() {
        let table = RawTable::from_grid(
            vec!["Name", "Shift"],
            vec![
                vec!["Jane".into(), 0.5.into()],
                vec!["Bob".into(), 0.25.into()],
            ],
        );
        assert_eq!(detect_format(&table), ScheduleFormat::Column);
    }

    // ==========================================================================
    // Helpers
    // ==========================================================================
    #[test]
    fn test_employee_column_presence() {
        assert!(has_employee_column(&headers_only(vec!["Employee Name", "Start"])));
        assert!(has_employee_column(&headers_only(vec!["NAME"])));
        assert!(!has_employee_column(&headers_only(vec!["Staff", "Start"])));
    }

    #[test]
    fn test_day_date_header() {
        assert!(is_day_date_header("Mon, 5/19/25"));
        assert!(is_day_date_header("5/19"));
        assert!(!is_day_date_header("Employee"));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ScheduleFormat::WeeklyRoster.to_string(), "weekly-roster");
        assert_eq!(
            serde_json::to_string(&ScheduleFormat::WeeklyRoster).unwrap(),
            "\"weekly-roster\""
        );
    }
}
