//! Splits a full diff (every file against the empty tree) into per-file
//! entries whose bodies are the files' complete contents.

use crate::model::FileEntry;
use crate::parser::{diff_git_path, sanitize};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Lines in a full-diff file header.
const HEADER_LEN: usize = 6;

/// Split a full diff into one entry per file.
///
/// The header recognized here is the strict new-file form git emits when
/// diffing against the empty tree:
///
/// ```text
/// diff --git a/<path> b/<anything>
/// new file mode 100644
/// index 0000000..<hex>
/// --- /dev/null
/// +++ b/<anything>
/// @@ -0,0 +<n>[,<m>] @@
/// ```
///
/// Each entry's content is the raw body (leading `+` markers intact) up to
/// the next header. Files with an empty body are dropped. Text with no
/// matching header yields an empty list, the expected state before an
/// upload.
pub fn split_full_diff(text: &str) -> Vec<FileEntry> {
    let text = sanitize(text);
    let lines: Vec<&str> = text.lines().collect();

    let mut entries = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;
    let mut i = 0;
    while i < lines.len() {
        if let Some(name) = match_header(&lines[i..]) {
            flush(&mut entries, current.take());
            current = Some((name.to_string(), Vec::new()));
            i += HEADER_LEN;
            continue;
        }
        // Lines before the first header are ignored.
        if let Some((_, body)) = current.as_mut() {
            body.push(lines[i]);
        }
        i += 1;
    }
    flush(&mut entries, current);

    debug!("full diff: {} file entries", entries.len());
    entries
}

fn flush(entries: &mut Vec<FileEntry>, current: Option<(String, Vec<&str>)>) {
    if let Some((name, body)) = current {
        if !body.is_empty() {
            entries.push(FileEntry::new(name, body.join("\n")));
        }
    }
}

/// Match the six-line new-file header at the start of `lines`, returning the
/// captured path.
fn match_header<'a>(lines: &[&'a str]) -> Option<&'a str> {
    if lines.len() < HEADER_LEN {
        return None;
    }
    let name = diff_git_path(lines[0])?;
    if lines[1] != "new file mode 100644" {
        return None;
    }
    if !index_line(lines[2]) {
        return None;
    }
    if lines[3] != "--- /dev/null" {
        return None;
    }
    if !target_line(lines[4]) {
        return None;
    }
    if !hunk_line(lines[5]) {
        return None;
    }
    Some(name)
}

fn index_line(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^index 0{7}\.\.[a-f0-9]+$").unwrap())
        .is_match(line)
}

fn target_line(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+{2,3} b/.+$").unwrap())
        .is_match(line)
}

fn hunk_line(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^@@ -0,0 \+\d+(,\d+)? @@").unwrap())
        .is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_DIFF: &str = "\
diff --git a/src/main.rs b/src/main.rs
new file mode 100644
index 0000000..9dae284
--- /dev/null
+++ b/src/main.rs
@@ -0,0 +1,3 @@
+fn main() {
+    println!(\"hello\");
+}
diff --git a/notes.md b/notes.md
new file mode 100644
index 0000000..83bd221
--- /dev/null
+++ b/notes.md
@@ -0,0 +1 @@
+# Notes
";

    #[test]
    fn test_splits_into_files() {
        let entries = split_full_diff(FULL_DIFF);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "src/main.rs");
        assert_eq!(
            entries[0].content,
            "+fn main() {\n+    println!(\"hello\");\n+}"
        );
        assert_eq!(entries[1].name, "notes.md");
        assert_eq!(entries[1].content, "+# Notes");
    }

    #[test]
    fn test_no_headers_yields_empty_list() {
        assert!(split_full_diff("").is_empty());
        assert!(split_full_diff("not a diff at all\njust text\n").is_empty());
    }

    #[test]
    fn test_leading_garbage_is_ignored() {
        let text = format!("stray line\nanother one\n{FULL_DIFF}");
        assert_eq!(split_full_diff(&text).len(), 2);
    }

    #[test]
    fn test_header_at_end_of_text_is_dropped() {
        let header_only = "\
diff --git a/empty.txt b/empty.txt
new file mode 100644
index 0000000..e69de29
--- /dev/null
+++ b/empty.txt
@@ -0,0 +0,0 @@
";
        assert!(split_full_diff(header_only).is_empty());

        let text = format!("{header_only}{FULL_DIFF}");
        let entries = split_full_diff(&text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "src/main.rs");
    }

    #[test]
    fn test_modified_file_header_does_not_match() {
        let text = "\
diff --git a/src/lib.rs b/src/lib.rs
index 5f0c9aa..9dae284 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,2 +1,2 @@
-old
+new
";
        assert!(split_full_diff(text).is_empty());
    }

    #[test]
    fn test_hunk_header_with_count_and_without() {
        assert!(hunk_line("@@ -0,0 +42 @@"));
        assert!(hunk_line("@@ -0,0 +42,7 @@"));
        assert!(!hunk_line("@@ -1,2 +1,2 @@"));
    }

    #[test]
    fn test_carriage_returns_are_scrubbed_before_matching() {
        let crlf = FULL_DIFF.replace('\n', "\r\n");
        assert_eq!(split_full_diff(&crlf).len(), 2);
    }
}
