//! Splits a compare diff (against an arbitrary earlier commit) into
//! per-file hunk lists.

use crate::model::{FileHunks, HunkEntry};
use crate::parser::{diff_git_path, sanitize};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Split a compare diff into one hunk list per file.
///
/// The header here is the permissive form covering both new and modified
/// files:
///
/// ```text
/// diff --git a/<path> b/<anything>
/// [new file mode 100644]
/// index <hex>..<hex>[ 100644]
/// --- (a/<anything> | /dev/null)
/// +++ b/<anything>
/// ```
///
/// Each file's body is then split on `@@ -<a>,<b> +<start>,<len> @@` lines,
/// capturing `<start>` as the hunk's post-change start line. A file whose
/// body has no hunk headers contributes zero hunks (a pure rename, for
/// instance, is silently skipped). Only hunk headers and line prefixes are
/// consumed downstream; context content is never validated.
pub fn split_compare_diff(text: &str) -> Vec<FileHunks> {
    let text = sanitize(text);
    let lines: Vec<&str> = text.lines().collect();

    let mut files = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;
    let mut i = 0;
    while i < lines.len() {
        if let Some((name, consumed)) = match_header(&lines[i..]) {
            flush(&mut files, current.take());
            current = Some((name.to_string(), Vec::new()));
            i += consumed;
            continue;
        }
        if let Some((_, body)) = current.as_mut() {
            body.push(lines[i]);
        }
        i += 1;
    }
    flush(&mut files, current);

    debug!(
        "compare diff: {} files, {} hunks",
        files.len(),
        files.iter().map(|f| f.hunks.len()).sum::<usize>()
    );
    files
}

fn flush(files: &mut Vec<FileHunks>, current: Option<(String, Vec<&str>)>) {
    if let Some((name, body)) = current {
        let mut file = FileHunks::new(name);
        file.hunks = split_hunks(&body);
        files.push(file);
    }
}

/// Match the file header at the start of `lines`, returning the captured
/// path and the number of header lines consumed (5, or 6 with the optional
/// `new file mode` line).
fn match_header<'a>(lines: &[&'a str]) -> Option<(&'a str, usize)> {
    let name = diff_git_path(lines.first()?)?;
    let mut i = 1;
    if lines.get(i).copied() == Some("new file mode 100644") {
        i += 1;
    }
    if !index_line(lines.get(i)?) {
        return None;
    }
    i += 1;
    if !source_line(lines.get(i)?) {
        return None;
    }
    i += 1;
    if !target_line(lines.get(i)?) {
        return None;
    }
    Some((name, i + 1))
}

/// Second pass: partition a file body into hunks at `@@` headers. Lines
/// before the first header are discarded.
fn split_hunks(lines: &[&str]) -> Vec<HunkEntry> {
    let mut hunks = Vec::new();
    let mut current: Option<(u32, Vec<&str>)> = None;
    for line in lines {
        if let Some(start_line) = hunk_start_line(line) {
            flush_hunk(&mut hunks, current.take());
            current = Some((start_line, Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    flush_hunk(&mut hunks, current);
    hunks
}

fn flush_hunk(hunks: &mut Vec<HunkEntry>, current: Option<(u32, Vec<&str>)>) {
    if let Some((start_line, body)) = current {
        hunks.push(HunkEntry::new(start_line, body.join("\n")));
    }
}

fn index_line(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^index [a-f0-9]+\.\.[a-f0-9]+( 100644)?$").unwrap())
        .is_match(line)
}

fn source_line(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^--- (a/.+|/dev/null)$").unwrap())
        .is_match(line)
}

fn target_line(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+{3} b/.+$").unwrap())
        .is_match(line)
}

/// Capture the post-change start line from an
/// `@@ -<a>,<b> +<start>,<len> @@` header.
fn hunk_start_line(line: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^@@ -\d+,\d+ \+(\d+),\d+ @@").unwrap());
    re.captures(line)?.get(1)?.as_str().parse().ok()
}
