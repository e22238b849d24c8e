//! Entities produced by the two diff splitters.

use serde::{Deserialize, Serialize};

/// One file recovered from a full diff (a diff against the empty tree).
///
/// Because every file in a full diff is wholly new, the diff body *is* the
/// file: `content` holds the raw body lines, each still carrying its leading
/// `+` marker. The markers are stripped when the content is reconstructed
/// (see [`crate::parser::reconstruct_content`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path captured from the `diff --git a/<path> b/...` header.
    pub name: String,
    /// Raw diff body up to the next file header.
    pub content: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// One file's change regions from a compare diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHunks {
    /// Path captured from the `diff --git a/<path> b/...` header.
    pub name: String,
    /// Hunks in textual order. Empty for files with no `@@` headers
    /// (e.g. a pure rename).
    pub hunks: Vec<HunkEntry>,
}

impl FileHunks {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hunks: Vec::new(),
        }
    }
}

/// A contiguous change region from a compare diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunkEntry {
    /// 1-based line number, in the post-change file, of the first body line.
    /// Captured from the `+<start>,<len>` half of the `@@` header.
    pub start_line: u32,
    /// All lines following the `@@` header up to the next header, with their
    /// `+`/`-`/space prefixes intact.
    pub body: String,
}

impl HunkEntry {
    pub fn new(start_line: u32, body: impl Into<String>) -> Self {
        Self {
            start_line,
            body: body.into(),
        }
    }
}
