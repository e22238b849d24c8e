//! The upload boundary: reading a `.diff` file from disk.
//!
//! This is the only fallible surface. Everything past it — parsing,
//! reconciliation, the join — degrades to empty results instead of
//! erroring.

use std::path::Path;
use thiserror::Error;

/// Errors at the file-read boundary.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read diff file: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a diff file as text.
///
/// Bytes are decoded lossily: invalid sequences become U+FFFD replacement
/// characters, which the sanitizer scrubs before parsing. Only an
/// unreadable file is an error.
pub fn read_diff_file(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_text() {
        let mut path = std::env::temp_dir();
        path.push("git-diff-marker-read-test.diff");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"diff --git a/x b/x\n").unwrap();
        drop(file);

        let text = read_diff_file(&path).unwrap();
        assert_eq!(text, "diff --git a/x b/x\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_diff_file("/nonexistent/never-here.diff");
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[test]
    fn test_invalid_utf8_decodes_lossily() {
        let mut path = std::env::temp_dir();
        path.push("git-diff-marker-lossy-test.diff");
        std::fs::write(&path, [b'+', b'a', 0xFF, b'b', b'\n']).unwrap();

        let text = read_diff_file(&path).unwrap();
        assert!(text.contains('\u{FFFD}'));
        assert_eq!(crate::parser::sanitize(&text), "+ab\n");
        std::fs::remove_file(&path).unwrap();
    }
}
