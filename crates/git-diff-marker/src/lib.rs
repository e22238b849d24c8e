//! # git-diff-marker
//!
//! Reconstructs per-file contents from a pair of git diffs and marks which
//! lines were added relative to the narrower of the two.
//!
//! The pair is produced by the caller against the same working tree:
//!
//! - a **full diff**, taken against the empty tree
//!   (`git diff 4b825dc642cb6eb9a060e54bf8d69288fbee4904 HEAD`), in which
//!   every file is wholly new — its diff body *is* the file's content;
//! - a **compare diff**, taken against an arbitrary earlier commit
//!   (`git diff <start-commit> HEAD`), from which only the hunk headers and
//!   line prefixes are consumed.
//!
//! ## Design Principles
//!
//! The core is pure and synchronous: immutable string inputs in, freshly
//! allocated report out, recomputed from scratch whenever an input changes.
//! It never fails — malformed or partial diff text degrades to fewer (or
//! zero) entries, never to an error. The only fallible surface is reading
//! the uploaded file in [`source`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use git_diff_marker::{build_report, read_diff_file};
//!
//! let full = read_diff_file("full.diff")?;
//! let compare = read_diff_file("compare.diff")?;
//!
//! let report = build_report(Some(&full), Some(&compare));
//! for name in &report.file_names {
//!     if let Some(record) = report.files.get(name) {
//!         // record.content, record.highlighted_lines, record.language
//!     }
//! }
//! ```

pub mod highlight;
pub mod model;
pub mod parser;
pub mod report;
pub mod source;

// Re-export commonly used types
pub use highlight::mark_added_lines;
pub use model::{
    DiffReport, FileEntry, FileHunks, FileRecord, HunkEntry, Language, LanguageRegistry, LineMark,
};
pub use parser::{reconstruct_content, sanitize, split_compare_diff, split_full_diff};
pub use report::{build_report, build_report_with};
pub use source::{read_diff_file, SourceError};
