//! Scrubs encoding artifacts from raw diff text before parsing.

/// Remove the contamination a lossy upload can introduce: U+FFFD
/// replacement characters, NUL bytes and carriage returns.
///
/// Pure and idempotent; never fails.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{FFFD}' | '\0' | '\r'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_artifacts() {
        assert_eq!(sanitize("a\u{FFFD}b\0c\rd"), "abcd");
        assert_eq!(sanitize("line one\r\nline two\r\n"), "line one\nline two\n");
    }

    #[test]
    fn test_clean_text_passes_through() {
        let text = "diff --git a/x b/x\n+added\n";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize("a\u{FFFD}\r\0b");
        assert_eq!(sanitize(&once), once);
    }
}
