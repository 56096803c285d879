//! Raw table input and column mapping.
//!
//! A [`RawTable`] is the already-decoded spreadsheet handed over by the
//! upstream reader. The engine only ever reads it.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell.
///
/// Serialized untagged so JSON numbers, strings and `null` map directly onto
/// the three variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell (spreadsheet readers deliver time cells as day fractions).
    Number(f64),
    /// A text cell.
    Text(String),
    /// An empty cell.
    #[default]
    Empty,
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// Returns true for empty cells and whitespace-only text.
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_import::models::CellValue;
    ///
    /// assert!(CellValue::Empty.is_blank());
    /// assert!(CellValue::from("  \n ").is_blank());
    /// assert!(!CellValue::from(0.0).is_blank());
    /// ```
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Renders the cell as text.
    ///
    /// Whole numbers print without a fractional part (`5.0` becomes `"5"`),
    /// matching what a spreadsheet shows for the same cell.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(text) => Cow::Borrowed(text.as_str()),
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Cow::Owned(format!("{}", *n as i64))
            }
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Empty => Cow::Borrowed(""),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
            serde_json::Value::String(s) => CellValue::Text(s),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// One table row: a mapping from column header to cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(HashMap<String, CellValue>);

impl Row {
    /// Returns the cell under `header`, if the row has one.
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.0.get(header)
    }

    /// Returns the cell under `header`, treating a missing key as empty.
    pub fn cell(&self, header: &str) -> &CellValue {
        self.0.get(header).unwrap_or(&EMPTY_CELL)
    }

    /// Iterates over `(header, cell)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row(iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect())
    }
}

/// The parsed spreadsheet: ordered headers plus rows keyed by header.
///
/// # Example
///
/// ```
/// use schedule_import::models::{CellValue, RawTable};
///
/// let table = RawTable::from_grid(
///     vec!["Name", "Mon, 5/19/25"],
///     vec![vec!["Bob Johnson".into(), "8:00 AM - 4:00 PM".into()]],
/// );
/// assert_eq!(table.headers()[1], "Mon, 5/19/25");
/// assert_eq!(table.rows()[0].cell("Name"), &CellValue::from("Bob Johnson"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl RawTable {
    /// Creates a table from explicit headers and keyed rows.
    pub fn new<H: Into<String>>(headers: Vec<H>, rows: Vec<Row>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Creates a table from headers and positional rows.
    ///
    /// Cells beyond the header count are dropped; short rows leave the
    /// remaining columns absent.
    pub fn from_grid<H: Into<String>>(headers: Vec<H>, grid: Vec<Vec<CellValue>>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let rows = grid
            .into_iter()
            .map(|cells| headers.iter().cloned().zip(cells).collect())
            .collect();
        Self { headers, rows }
    }

    /// Returns the column headers in spreadsheet order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the rows in spreadsheet order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns true if a column with exactly this header exists.
    pub fn has_header(&self, header: &str) -> bool {
        self.headers.iter().any(|h| h == header)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Names the headers that hold each field of a column-format schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Header of the employee name column.
    pub employee_name: String,
    /// Header of the shift start column.
    pub start_time: String,
    /// Header of the shift end column.
    pub end_time: String,
    /// Header of the area/position column.
    pub area: String,
    /// Header of the optional day column.
    #[serde(default)]
    pub day: Option<String>,
}

impl ColumnMapping {
    /// Creates a mapping without a day column.
    pub fn new(
        employee_name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            area: area.into(),
            day: None,
        }
    }

    /// Adds a day column to the mapping.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    /// The four headers every column-format table must contain.
    pub fn required_headers(&self) -> [&str; 4] {
        [
            &self.employee_name,
            &self.start_time,
            &self.end_time,
            &self.area,
        ]
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::new("Name", "Start", "End", "Area").with_day("Day")
    }
}
