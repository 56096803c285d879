//! End-to-end import flow.
//!
//! [`import_schedule`] and [`Importer`] run one table through detection,
//! validation and parsing. [`ImportSession`] wraps that in the
//! upload/review/commit lifecycle, [`UploadKind`] gates uploads by file type,
//! and [`WeeklySchedule`] arranges committed records for display.

mod importer;
mod pending;
mod session;
mod upload;
mod weekly;

pub use importer::{Importer, import_schedule};
pub use pending::{ParsePreview, PendingImport, PreviewRow};
pub use session::{ImportSession, ImportState};
pub use upload::UploadKind;
pub use weekly::WeeklySchedule;
