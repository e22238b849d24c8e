//! Walks hunk bodies to compute which absolute line numbers were added.

use crate::model::{HunkEntry, LineMark};
use std::collections::BTreeMap;

/// Reduce one file's hunks to a map of added line numbers.
///
/// Diff line numbers restart per hunk at the hunk's post-change start line,
/// and deleted lines do not exist in the post-change file, so they must not
/// consume a line-number slot. Each hunk is walked with a running deletion
/// `offset`: a `-` line increments it, a `+` line marks
/// `start_line + index - offset`, anything else only advances `index`.
///
/// Hunks are processed in textual order; on a line-number collision the
/// later hunk's mark wins.
pub fn mark_added_lines(hunks: &[HunkEntry]) -> BTreeMap<u32, LineMark> {
    let mut marks = BTreeMap::new();
    for hunk in hunks {
        let mut offset: u32 = 0;
        for (index, line) in hunk.body.split('\n').enumerate() {
            if line.starts_with('-') {
                offset += 1;
            } else if line.starts_with('+') {
                // A `+` line was preceded by at most `index` deletions, so
                // the subtraction cannot underflow on well-formed hunks.
                let line_no = hunk
                    .start_line
                    .saturating_add(index as u32)
                    .saturating_sub(offset);
                marks.insert(line_no, LineMark::Added);
            }
        }
    }
    marks
}
