//! Parsers for the two diff kinds.
//!
//! Both splitters are line-oriented state machines: they scan for a
//! multi-line file header, then collect body lines until the next header.
//! Malformed input never fails, it just produces fewer entries.

mod compare;
mod full;
mod normalize;
mod sanitize;

pub use compare::split_compare_diff;
pub use full::split_full_diff;
pub use normalize::reconstruct_content;
pub use sanitize::sanitize;

use regex::Regex;
use std::sync::OnceLock;

/// Capture the path from a `diff --git a/<path> b/<anything>` line.
pub(crate) fn diff_git_path(line: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^diff --git a/(.+) b/.+$").unwrap());
    Some(re.captures(line)?.get(1)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_git_path() {
        assert_eq!(
            diff_git_path("diff --git a/src/main.rs b/src/main.rs"),
            Some("src/main.rs")
        );
        assert_eq!(
            diff_git_path("diff --git a/a name with spaces.txt b/a name with spaces.txt"),
            Some("a name with spaces.txt")
        );
        assert_eq!(diff_git_path("index 0000000..9dae284"), None);
        assert_eq!(diff_git_path("+diff --git a/x b/x"), None);
    }
}
