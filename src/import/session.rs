//! Upload-to-commit lifecycle.
//!
//! An [`ImportSession`] walks one upload through
//! `Idle → Detecting → Validating → Parsing → Ready`, then either to
//! `Committed` on confirmation or back to `Idle` on cancel. Any fatal error
//! during the run returns the session to `Idle`.

use std::fmt;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ImportError, ImportResult};
use crate::models::{ColumnMapping, RawTable, ShiftRecord};

use super::importer::Importer;
use super::pending::PendingImport;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportState {
    /// Waiting for an upload.
    Idle,
    /// Choosing between column and weekly-roster layouts.
    Detecting,
    /// Checking the table has the columns its layout needs.
    Validating,
    /// Turning rows into records.
    Parsing,
    /// Parsed and waiting for the reviewer.
    Ready(PendingImport),
    /// The reviewer accepted the records.
    Committed,
}

impl ImportState {
    /// Lowercase state name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ImportState::Idle => "idle",
            ImportState::Detecting => "detecting",
            ImportState::Validating => "validating",
            ImportState::Parsing => "parsing",
            ImportState::Ready(_) => "ready",
            ImportState::Committed => "committed",
        }
    }
}

impl fmt::Display for ImportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drives a single import from upload to confirmation.
#[derive(Debug, Clone)]
pub struct ImportSession {
    importer: Importer,
    state: ImportState,
}

impl Default for ImportSession {
    fn default() -> Self {
        Self::new(Importer::default())
    }
}

impl ImportSession {
    /// Creates an idle session.
    pub fn new(importer: Importer) -> Self {
        Self {
            importer,
            state: ImportState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ImportState {
        &self.state
    }

    /// The import awaiting review, if any.
    pub fn pending(&self) -> Option<&PendingImport> {
        match &self.state {
            ImportState::Ready(pending) => Some(pending),
            _ => None,
        }
    }

    /// Runs an import for `table`.
    ///
    /// Allowed from `Idle` and `Committed`. On success the session is `Ready`;
    /// on a fatal error it is back to `Idle`.
    pub fn upload(
        &mut self,
        table: &RawTable,
        mapping: &ColumnMapping,
    ) -> ImportResult<&PendingImport> {
        match self.state {
            ImportState::Idle | ImportState::Committed => {}
            _ => return Err(self.invalid("upload")),
        }

        match self.run(table, mapping) {
            Ok(pending) => {
                self.state = ImportState::Ready(pending);
                self.pending().ok_or_else(|| self.invalid("upload"))
            }
            Err(err) => {
                warn!(stage = %self.state, error = %err, "Import failed, returning to idle");
                self.state = ImportState::Idle;
                Err(err)
            }
        }
    }

    /// Accepts the pending import and returns its records.
    pub fn confirm(&mut self) -> ImportResult<Vec<ShiftRecord>> {
        match std::mem::replace(&mut self.state, ImportState::Committed) {
            ImportState::Ready(pending) => Ok(pending.commit()),
            other => {
                self.state = other;
                Err(self.invalid("confirm"))
            }
        }
    }

    /// Discards the pending import.
    ///
    /// Cancelling an idle session does nothing. A committed session cannot
    /// be cancelled.
    pub fn cancel(&mut self) -> ImportResult<()> {
        match std::mem::replace(&mut self.state, ImportState::Idle) {
            ImportState::Ready(pending) => {
                pending.cancel();
                Ok(())
            }
            ImportState::Committed => {
                self.state = ImportState::Committed;
                Err(self.invalid("cancel"))
            }
            _ => Ok(()),
        }
    }

    fn run(&mut self, table: &RawTable, mapping: &ColumnMapping) -> ImportResult<PendingImport> {
        let import_id = Uuid::new_v4();

        self.enter(ImportState::Detecting, import_id);
        self.importer.check_not_empty(table)?;
        let format = self.importer.detect(table, mapping);

        self.enter(ImportState::Validating, import_id);
        self.importer.validate(table, mapping, format)?;

        self.enter(ImportState::Parsing, import_id);
        let parsed = self.importer.parse(table, mapping, format)?;

        self.importer.finish(import_id, table, format, parsed)
    }

    fn enter(&mut self, state: ImportState, import_id: Uuid) {
        debug!(import_id = %import_id, from = %self.state, to = %state, "Import state change");
        self.state = state;
    }

    fn invalid(&self, action: &str) -> ImportError {
        ImportError::InvalidTransition {
            state: self.state.name().to_string(),
            action: action.to_string(),
        }
    }
}
