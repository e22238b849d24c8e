//! Joins the parsed full diff, the parsed compare diff and the language
//! table into the final per-file report.

use crate::highlight::mark_added_lines;
use crate::model::{DiffReport, FileRecord, HunkEntry, LanguageRegistry};
use crate::parser::{reconstruct_content, split_compare_diff, split_full_diff};
use log::debug;
use std::collections::HashMap;

/// Build the report with the built-in language table.
///
/// `full_diff` must be a diff against the empty tree
/// (`git diff 4b825dc642cb6eb9a060e54bf8d69288fbee4904 HEAD`), so that every
/// file appears as wholly new and its body reconstructs to the whole file.
/// This is not verified: a full diff taken against anything else yields
/// fragment content and misaligned marks. `compare_diff` is a diff against
/// an arbitrary earlier commit of the same tree; only its hunk headers and
/// line prefixes are consumed.
///
/// Either input may be absent (not uploaded yet). `file_names` is populated
/// whenever the full diff parses; `files` stays empty until both diffs
/// produced at least one entry — never partially populated. Files present
/// only in the compare diff are invisible to the output, and files without
/// compare hunks get an empty highlight set.
pub fn build_report(full_diff: Option<&str>, compare_diff: Option<&str>) -> DiffReport {
    build_report_with(full_diff, compare_diff, &LanguageRegistry::default())
}

/// Build the report with a caller-supplied language table.
pub fn build_report_with(
    full_diff: Option<&str>,
    compare_diff: Option<&str>,
    languages: &LanguageRegistry,
) -> DiffReport {
    let files = full_diff.map(split_full_diff).unwrap_or_default();
    let changes = compare_diff.map(split_compare_diff).unwrap_or_default();

    let file_names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
    if files.is_empty() || changes.is_empty() {
        debug!(
            "report withheld: {} files, {} change entries",
            files.len(),
            changes.len()
        );
        return DiffReport {
            file_names,
            files: HashMap::new(),
        };
    }

    // Later compare entries overwrite earlier ones on a name collision.
    let mut hunks_by_name: HashMap<&str, &[HunkEntry]> = HashMap::new();
    for change in &changes {
        hunks_by_name.insert(change.name.as_str(), &change.hunks);
    }

    let mut records = HashMap::new();
    for file in &files {
        let highlighted_lines = hunks_by_name
            .get(file.name.as_str())
            .map(|hunks| mark_added_lines(hunks))
            .unwrap_or_default();
        records.insert(
            file.name.clone(),
            FileRecord {
                name: file.name.clone(),
                content: reconstruct_content(&file.content),
                highlighted_lines,
                language: languages.resolve(&file.name),
            },
        );
    }

    debug!("report ready: {} records", records.len());
    DiffReport {
        file_names,
        files: records,
    }
}
