use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;

use crate::error::{DictError, Result};

/// Reads a UTF-8 table file, dropping a leading BOM if one is present.
pub fn read_table(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(DictError::io(path))?;

    let (text, had_errors) = UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(DictError::Decode {
            file: path.to_path_buf(),
        });
    }

    Ok(text.into_owned())
}

/// Yields `(1-based line number, line)` with the line terminator removed.
/// Lines end at `\n`, `\r\n` or a bare `\r`.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = text;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let line = match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..end];
                rest = &rest[end + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };

        Some(line)
    })
    .enumerate()
    .map(|(i, line)| (i + 1, line))
}

pub fn parse_error(file: &Path, line: usize, reason: impl Into<String>) -> DictError {
    DictError::Parse {
        file: PathBuf::from(file),
        line,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_lines_from_one_and_strips_crlf() {
        let lines: Vec<_> = numbered_lines("a\tb\r\nc\td\n").collect();
        assert_eq!(lines, vec![(1, "a\tb"), (2, "c\td")]);
    }

    #[test]
    fn bare_carriage_return_ends_a_line() {
        let lines: Vec<_> = numbered_lines("a\tx\rb\ty\n").collect();
        assert_eq!(lines, vec![(1, "a\tx"), (2, "b\ty")]);
    }

    #[test]
    fn mixed_terminators_and_missing_final_newline() {
        let lines: Vec<_> = numbered_lines("a\r\rb\r\nc").collect();
        assert_eq!(lines, vec![(1, "a"), (2, ""), (3, "b"), (4, "c")]);
    }

    #[test]
    fn keeps_blank_lines_in_the_count() {
        let lines: Vec<_> = numbered_lines("a\n\nb").collect();
        assert_eq!(lines, vec![(1, "a"), (2, ""), (3, "b")]);
    }

    #[test]
    fn read_table_drops_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.tsv");
        fs::write(&path, b"\xEF\xBB\xBFfr\tFrench\n").unwrap();

        assert_eq!(read_table(&path).unwrap(), "fr\tFrench\n");
    }

    #[test]
    fn read_table_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"caf\xE9\t/kafe/\n").unwrap();

        match read_table(&path) {
            Err(DictError::Decode { file }) => assert_eq!(file, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
