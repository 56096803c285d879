//! Parsed imports awaiting confirmation.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{ImportWarning, RawTable, Row, ShiftRecord};
use crate::parsing::{ParsedShifts, ScheduleFormat};

/// One input row as shown in the review preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    /// Zero-based row index in the uploaded table.
    pub index: usize,
    /// The row's cells, unchanged.
    pub cells: Row,
    /// Number of records produced from this row.
    pub record_count: usize,
    /// Whether a warning or an unrecognized value touches this row.
    pub needs_review: bool,
}

/// The uploaded table's rows as shown to the reviewer before committing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsePreview {
    headers: Vec<String>,
    rows: Vec<PreviewRow>,
}

impl ParsePreview {
    fn new(table: &RawTable, parsed: &ParsedShifts) -> Self {
        // Per source row: (record count, any record needs review)
        let mut per_row: HashMap<usize, (usize, bool)> = HashMap::new();
        for record in &parsed.records {
            let entry = per_row.entry(record.origin.row).or_default();
            entry.0 += 1;
            entry.1 |= record.needs_review();
        }
        let warned_rows: HashSet<usize> = parsed.warnings.iter().filter_map(|w| w.row).collect();

        let rows = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let (record_count, record_needs_review) =
                    per_row.get(&index).copied().unwrap_or_default();
                PreviewRow {
                    index,
                    cells: row.clone(),
                    record_count,
                    needs_review: record_needs_review || warned_rows.contains(&index),
                }
            })
            .collect();

        Self {
            headers: table.headers().to_vec(),
            rows,
        }
    }

    /// Headers of the uploaded table, in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every input row, in order.
    pub fn rows(&self) -> &[PreviewRow] {
        &self.rows
    }

    /// Rows flagged for review.
    pub fn flagged(&self) -> impl Iterator<Item = &PreviewRow> {
        self.rows.iter().filter(|r| r.needs_review)
    }
}

/// The result of a successful import run, held until the reviewer either
/// commits or cancels it.
///
/// Nothing is persisted here. [`PendingImport::commit`] hands the records to
/// the caller; [`PendingImport::cancel`] discards them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingImport {
    import_id: Uuid,
    format: ScheduleFormat,
    records: Vec<ShiftRecord>,
    warnings: Vec<ImportWarning>,
    preview: ParsePreview,
}

impl PendingImport {
    pub(crate) fn new(
        import_id: Uuid,
        format: ScheduleFormat,
        table: &RawTable,
        parsed: ParsedShifts,
    ) -> Self {
        let preview = ParsePreview::new(table, &parsed);
        Self {
            import_id,
            format,
            records: parsed.records,
            warnings: parsed.warnings,
            preview,
        }
    }

    /// Identifier shared by this run's log lines.
    pub fn import_id(&self) -> Uuid {
        self.import_id
    }

    /// The detected layout.
    pub fn format(&self) -> ScheduleFormat {
        self.format
    }

    /// Records produced by the parser.
    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    /// Non-fatal issues found while parsing.
    pub fn warnings(&self) -> &[ImportWarning] {
        &self.warnings
    }

    /// Warning messages as plain strings.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    /// Input rows with per-row review flags.
    pub fn preview(&self) -> &ParsePreview {
        &self.preview
    }

    /// Number of records that carry an unrecognized time.
    pub fn needs_review_count(&self) -> usize {
        self.records.iter().filter(|r| r.needs_review()).count()
    }

    /// Accepts the import and returns its records.
    pub fn commit(self) -> Vec<ShiftRecord> {
        info!(
            import_id = %self.import_id,
            records = self.records.len(),
            "Schedule import committed"
        );
        self.records
    }

    /// Discards the import.
    pub fn cancel(self) {
        info!(import_id = %self.import_id, "Schedule import cancelled");
    }
}
