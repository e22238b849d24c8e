//! The joined per-file records handed to the rendering layer.

use crate::model::Language;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Display annotation for a single line.
///
/// Only one variant exists today: a line that was added relative to the
/// compare point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineMark {
    Added,
}

impl LineMark {
    /// Color the rendering layer should use for this mark.
    pub fn color(&self) -> &'static str {
        match self {
            LineMark::Added => "green",
        }
    }

    /// Gutter label for this mark.
    pub fn label(&self) -> &'static str {
        match self {
            LineMark::Added => "+",
        }
    }
}

/// One file of the final report: reconstructed content, marked lines and a
/// language hint for syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub name: String,
    /// Full reconstructed file content, `+` markers and trailing
    /// no-newline artifacts removed.
    pub content: String,
    /// Marks keyed by 1-based line number within `content`.
    pub highlighted_lines: BTreeMap<u32, LineMark>,
    /// `None` renders as plain text.
    pub language: Option<Language>,
}

/// Everything the rendering layer needs, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    /// Names in the order they appear in the full diff. Populated whenever
    /// the full diff parses, independent of the compare diff.
    pub file_names: Vec<String>,
    /// Per-file records. Empty unless both diffs parsed to at least one
    /// entry each.
    pub files: HashMap<String, FileRecord>,
}

impl DiffReport {
    /// True when neither input produced anything renderable.
    pub fn is_empty(&self) -> bool {
        self.file_names.is_empty() && self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_display_attributes() {
        assert_eq!(LineMark::Added.color(), "green");
        assert_eq!(LineMark::Added.label(), "+");
    }

    #[test]
    fn test_record_serializes_with_line_keys() {
        let mut marks = BTreeMap::new();
        marks.insert(3, LineMark::Added);
        let record = FileRecord {
            name: "src/main.rs".to_string(),
            content: "fn main() {}".to_string(),
            highlighted_lines: marks,
            language: Some(Language::Rust),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["language"], "Rust");
        assert_eq!(json["highlighted_lines"]["3"], "Added");
    }

    #[test]
    fn test_empty_report() {
        assert!(DiffReport::default().is_empty());
    }
}
