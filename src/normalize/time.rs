//! Time normalization.
//!
//! Converts one raw time cell into a canonical 24-hour [`ClockTime`]. Inputs
//! arrive as spreadsheet day fractions, 24-hour text, 12-hour text with a
//! spaced `AM`/`PM`, or compact `a`/`p` suffixes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{CellValue, ClockTime, Normalized};

const MINUTES_PER_DAY: f64 = 1440.0;

lazy_static! {
    static ref TWENTY_FOUR_HOUR: Regex =
        Regex::new(r"^(\d{1,2}):(\d{2})$").expect("Failed to compile TWENTY_FOUR_HOUR regex");
    static ref TWELVE_HOUR_SPACED: Regex = Regex::new(r"^(\d{1,2}):(\d{2})\s+(am|pm)$")
        .expect("Failed to compile TWELVE_HOUR_SPACED regex");
    static ref TWELVE_HOUR_SUFFIX: Regex = Regex::new(r"^(\d{1,2}):(\d{2})([ap])$")
        .expect("Failed to compile TWELVE_HOUR_SUFFIX regex");
    static ref BARE_HOUR_SUFFIX: Regex =
        Regex::new(r"^(\d{1,2})([ap])$").expect("Failed to compile BARE_HOUR_SUFFIX regex");
}

/// Normalizes a raw time cell.
///
/// Numeric cells are spreadsheet serial fractions of a day. Empty cells are
/// midnight. Text cells go through [`normalize_time_str`].
///
/// # Example
///
/// ```
/// use schedule_import::models::{CellValue, Normalized};
/// use schedule_import::normalize::normalize_time;
///
/// assert_eq!(normalize_time(&CellValue::Number(0.75)).to_string(), "18:00");
/// assert_eq!(normalize_time(&CellValue::from("2:00 PM")).to_string(), "14:00");
/// assert_eq!(
///     normalize_time(&CellValue::from("close")),
///     Normalized::Unrecognized("close".to_string())
/// );
/// ```
pub fn normalize_time(raw: &CellValue) -> Normalized<ClockTime> {
    match raw {
        CellValue::Empty => Normalized::Parsed(ClockTime::MIDNIGHT),
        CellValue::Number(n) => from_day_fraction(*n)
            .map(Normalized::Parsed)
            .unwrap_or_else(|| Normalized::Unrecognized(n.to_string())),
        CellValue::Text(text) => normalize_time_str(text),
    }
}

/// Normalizes a time written as text.
///
/// Text that parses entirely as a number is treated as a day fraction before
/// any textual format is tried. Otherwise the lowercased, trimmed text must
/// match one of, in order: `H:MM`/`HH:MM` (24-hour), `H:MM am|pm`,
/// `H:MMa|p`, or `Ha|p`. Unmatched text is returned trimmed as
/// [`Normalized::Unrecognized`].
pub fn normalize_time_str(raw: &str) -> Normalized<ClockTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Normalized::Parsed(ClockTime::MIDNIGHT);
    }

    if let Some(time) = trimmed.parse::<f64>().ok().and_then(from_day_fraction) {
        return Normalized::Parsed(time);
    }

    match parse_clock_text(&trimmed.to_lowercase()) {
        Some(time) => Normalized::Parsed(time),
        None => Normalized::Unrecognized(trimmed.to_string()),
    }
}

/// Converts a fraction-of-a-day serial into a clock time.
///
/// Whole days are discarded, so `1.5` is noon like `0.5`. Non-finite input
/// yields `None`.
fn from_day_fraction(serial: f64) -> Option<ClockTime> {
    if !serial.is_finite() {
        return None;
    }

    let total_minutes = (serial * MINUTES_PER_DAY).round() as i64;
    let hours = total_minutes.div_euclid(60).rem_euclid(24);
    let minutes = total_minutes.rem_euclid(60);

    ClockTime::from_hm(hours as u32, minutes as u32)
}

fn parse_clock_text(text: &str) -> Option<ClockTime> {
    if let Some(caps) = TWENTY_FOUR_HOUR.captures(text) {
        if let Some(time) = ClockTime::from_hm(caps[1].parse().ok()?, caps[2].parse().ok()?) {
            return Some(time);
        }
    }

    if let Some(caps) = TWELVE_HOUR_SPACED.captures(text) {
        let is_pm = &caps[3] == "pm";
        if let Some(time) = twelve_hour(caps[1].parse().ok()?, caps[2].parse().ok()?, is_pm) {
            return Some(time);
        }
    }

    if let Some(caps) = TWELVE_HOUR_SUFFIX.captures(text) {
        let is_pm = &caps[3] == "p";
        if let Some(time) = twelve_hour(caps[1].parse().ok()?, caps[2].parse().ok()?, is_pm) {
            return Some(time);
        }
    }

    if let Some(caps) = BARE_HOUR_SUFFIX.captures(text) {
        let is_pm = &caps[2] == "p";
        return twelve_hour(caps[1].parse().ok()?, 0, is_pm);
    }

    None
}

/// 12 AM is midnight, 12 PM stays noon, other PM hours gain twelve.
fn twelve_hour(hour: u32, minute: u32, is_pm: bool) -> Option<ClockTime> {
    if hour > 12 {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    ClockTime::from_hm(hour, minute)
}
