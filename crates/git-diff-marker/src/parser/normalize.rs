//! Turns a raw full-diff body into the reconstructed file content.

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Reconstruct file content from a raw full-diff body.
///
/// Strips the single leading `+` each added line carries, so reconstructed
/// line *i* equals source line *i* exactly, then drops the
/// `\ No newline at end of file` marker a diff appends when the file lacks
/// a final newline (together with the blank line following it, if present),
/// so the file does not gain a spurious trailing line.
pub fn reconstruct_content(raw: &str) -> String {
    let mut lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_prefix('+').unwrap_or(line))
        .collect();
    trim_no_newline_marker(&mut lines);
    lines.join("\n")
}

fn trim_no_newline_marker(lines: &mut Vec<&str>) {
    match lines.as_slice() {
        // Marker followed by the artifact blank line.
        [.., marker, ""] if *marker == NO_NEWLINE_MARKER => {
            lines.truncate(lines.len() - 2);
        }
        [.., marker] if *marker == NO_NEWLINE_MARKER => {
            lines.pop();
        }
        _ => {}
    }
}
