//! Shift record model and the canonical value types it carries.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::Row;

/// A wall-clock time of day, always rendered as 24-hour `HH:MM`.
///
/// # Example
///
/// ```
/// use schedule_import::models::ClockTime;
///
/// let time = ClockTime::from_hm(8, 5).unwrap();
/// assert_eq!(time.to_string(), "08:05");
/// assert!(ClockTime::from_hm(24, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime(NaiveTime::MIN);

    /// Builds a time from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the number of minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M").map(ClockTime)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of normalizing one raw token.
///
/// `Unrecognized` keeps the trimmed input so a reviewer can see and correct it
/// instead of the row being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Normalized<T> {
    /// The token was understood.
    Parsed(T),
    /// The token matched no known format; the raw text is passed through.
    Unrecognized(String),
}

impl<T> Normalized<T> {
    /// Returns true if the token was understood.
    pub fn is_parsed(&self) -> bool {
        matches!(self, Normalized::Parsed(_))
    }

    /// Returns the parsed value, if any.
    pub fn parsed(&self) -> Option<&T> {
        match self {
            Normalized::Parsed(value) => Some(value),
            Normalized::Unrecognized(_) => None,
        }
    }

    /// Returns the passed-through raw text, if the token was not understood.
    pub fn unrecognized(&self) -> Option<&str> {
        match self {
            Normalized::Parsed(_) => None,
            Normalized::Unrecognized(raw) => Some(raw),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Normalized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Parsed(value) => value.fmt(f),
            Normalized::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// One of the seven canonical day identifiers, ordered Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Day {
    /// All days in week order, Sunday first.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Returns the lowercase identifier (`"sunday"` ... `"saturday"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Sunday => "sunday",
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Sunday => Weekday::Sun,
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_sunday() as usize]
    }
}

/// The two canonical department tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Front of house.
    #[serde(rename = "FOH")]
    Foh,
    /// Back of house.
    #[serde(rename = "BOH")]
    Boh,
}

impl Department {
    /// Returns the canonical tag, `"FOH"` or `"BOH"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Foh => "FOH",
            Department::Boh => "BOH",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which input layout a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    /// One row per shift with explicit columns.
    #[serde(rename = "column")]
    Column,
    /// One row per employee, one column per day.
    #[serde(rename = "weekly-roster")]
    WeeklyRoster,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Column => f.write_str("column"),
            SourceFormat::WeeklyRoster => f.write_str("weekly-roster"),
        }
    }
}

/// Where in the input table a record originated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOrigin {
    /// Zero-based index of the source row.
    pub row: usize,
    /// Header of the day column the shift was read from (weekly roster only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

/// One employee's one shift on one day.
///
/// Records are created once by a parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Sanitized employee name.
    pub employee_name: String,
    /// Normalized start time.
    pub shift_start: Normalized<ClockTime>,
    /// Normalized end time.
    pub shift_end: Normalized<ClockTime>,
    /// Canonical department tag.
    pub department: Department,
    /// Canonical day, or `None` when the shift applies to every day.
    pub day: Option<Day>,
    /// Display string `"HH:MM - HH:MM"`.
    pub time_block: String,
    /// Layout the record was parsed from.
    pub source_format: SourceFormat,
    /// Back-reference into the input table.
    pub origin: RecordOrigin,
    /// Copy of the originating row, kept for audit only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_row: Option<Row>,
}

impl ShiftRecord {
    /// Creates a record with a fresh id and derived time block.
    pub fn new(
        employee_name: String,
        shift_start: Normalized<ClockTime>,
        shift_end: Normalized<ClockTime>,
        department: Department,
        day: Option<Day>,
        source_format: SourceFormat,
        origin: RecordOrigin,
    ) -> Self {
        let time_block = format!("{} - {}", shift_start, shift_end);
        Self {
            id: Uuid::new_v4(),
            employee_name,
            shift_start,
            shift_end,
            department,
            day,
            time_block,
            source_format,
            origin,
            source_row: None,
        }
    }

    /// Attaches a copy of the originating row.
    pub fn with_source_row(mut self, row: Row) -> Self {
        self.source_row = Some(row);
        self
    }

    /// Returns true if either time was passed through unrecognized.
    pub fn needs_review(&self) -> bool {
        !self.shift_start.is_parsed() || !self.shift_end.is_parsed()
    }

    /// Returns the scheduled length of the shift in hours.
    ///
    /// A shift whose end is earlier than its start runs past midnight. Returns
    /// `None` if either time is unrecognized.
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_import::models::{
    ///     ClockTime, Department, Normalized, RecordOrigin, ShiftRecord, SourceFormat,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let record = ShiftRecord::new(
    ///     "Jane Doe".to_string(),
    ///     Normalized::Parsed(ClockTime::from_hm(22, 0).unwrap()),
    ///     Normalized::Parsed(ClockTime::from_hm(6, 30).unwrap()),
    ///     Department::Boh,
    ///     None,
    ///     SourceFormat::Column,
    ///     RecordOrigin { row: 0, column: None },
    /// );
    /// assert_eq!(record.scheduled_hours(), Some(Decimal::new(85, 1))); // 8.5 hours
    /// ```
    pub fn scheduled_hours(&self) -> Option<Decimal> {
        let start = i64::from(self.shift_start.parsed()?.minutes_from_midnight());
        let end = i64::from(self.shift_end.parsed()?.minutes_from_midnight());

        let minutes = if end < start { end + 24 * 60 - start } else { end - start };

        Some(Decimal::new(minutes, 0) / Decimal::new(60, 0))
    }
}
