//! Data models for the parse stages and the joined report.

mod diff;
mod language;
mod record;

pub use diff::{FileEntry, FileHunks, HunkEntry};
pub use language::{Language, LanguageRegistry};
pub use record::{DiffReport, FileRecord, LineMark};
