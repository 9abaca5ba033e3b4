//! # File Loading
//!
//! Reads the raw reference files and splits them into rows of string cells.
//!
//! The files are nominally UTF-8 tab-delimited text, but copies exported from
//! older tooling arrive as Windows-1252 and occasionally comma- or
//! semicolon-delimited. Decoding tries strict UTF-8 first (stripping a BOM if
//! present) and falls back to Windows-1252; row splitting has a strict-tab
//! mode and a delimiter-sniffing mode for the legacy files.
//!
//! Rows are never discarded here: blank lines survive as empty rows so that
//! downstream structural detection sees the file's true row positions.

use std::fs;
use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};
use log::debug;

use crate::errors::{DataError, DataResult};

/// Bytes of leading text examined when sniffing a delimiter.
const SNIFF_SAMPLE: usize = 8192;

/// Read a reference file as text.
///
/// Strict UTF-8 with BOM stripping first; on malformed UTF-8 the whole file
/// is re-decoded as Windows-1252. A missing or unreadable file is fatal: the
/// engine cannot operate without its required tables.
pub fn read_text(path: &Path) -> DataResult<String> {
    let bytes = fs::read(path).map_err(|err| {
        DataError::file_error("read", path.display().to_string(), err.to_string())
    })?;

    let (text, _, malformed) = UTF_8.decode(&bytes);
    if !malformed {
        return Ok(text.into_owned());
    }

    debug!(
        "{}: not valid UTF-8, retrying as Windows-1252",
        path.display()
    );
    let (text, _, _) = WINDOWS_1252.decode(&bytes);
    Ok(text.into_owned())
}

/// Split file text into rows of cells on the tab delimiter.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    rows_with_delimiter(text, b'\t')
}

/// Split file text into rows, sniffing the delimiter first.
///
/// Legacy mode for files whose format is not guaranteed tab-only. The
/// candidate (tab, comma, semicolon) with the most occurrences in the leading
/// sample wins; ties and empty samples default to tab.
pub fn parse_rows_sniffed(text: &str) -> Vec<Vec<String>> {
    rows_with_delimiter(text, sniff_delimiter(text))
}

fn sniff_delimiter(text: &str) -> u8 {
    let sample = &text.as_bytes()[..text.len().min(SNIFF_SAMPLE)];
    let mut best = b'\t';
    let mut best_count = sample.iter().filter(|&&b| b == b'\t').count();
    for candidate in [b',', b';'] {
        let count = sample.iter().filter(|&&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Line-by-line so blank lines survive as empty rows; the csv parser still
/// handles quoted cells within each line.
fn rows_with_delimiter(text: &str, delimiter: u8) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| parse_line(line, delimiter))
        .collect()
}

fn parse_line(line: &str, delimiter: u8) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        // Unbalanced quoting; keep the raw line rather than losing the row.
        _ => vec![line.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_text_utf8_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"\xEF\xBB\xBFspec\tmaterial\n").unwrap();

        let text = read_text(&path).unwrap();
        assert_eq!(text, "spec\tmaterial\n");
    }

    #[test]
    fn test_read_text_windows_1252_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.txt");
        let mut file = fs::File::create(&path).unwrap();
        // 0xE9 is 'é' in Windows-1252 and invalid as standalone UTF-8
        file.write_all(b"temp\xE9r\n").unwrap();

        let text = read_text(&path).unwrap();
        assert_eq!(text, "tempér\n");
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = read_text(Path::new("/no/such/file.txt")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_parse_rows_preserves_empty_cells_and_blank_rows() {
        let rows = parse_rows("a\t\tc\n\nd\te\n");
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "".to_string(), "c".to_string()],
                vec![],
                vec!["d".to_string(), "e".to_string()],
            ]
        );
    }

    #[test]
    fn test_parse_rows_is_strictly_tab() {
        // Commas are plain cell content in the primary mode
        let rows = parse_rows("a,b\tc\n");
        assert_eq!(rows, vec![vec!["a,b".to_string(), "c".to_string()]]);
    }

    #[test]
    fn test_parse_rows_quoted_cells() {
        let rows = parse_rows("\"a\tb\"\tc\n");
        assert_eq!(rows, vec![vec!["a\tb".to_string(), "c".to_string()]]);
    }

    #[test]
    fn test_sniff_comma_and_semicolon() {
        let rows = parse_rows_sniffed("a,b,c\nd,e,f\n");
        assert_eq!(rows[0], vec!["a", "b", "c"]);

        let rows = parse_rows_sniffed("a;b;c\n");
        assert_eq!(rows[0], vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sniff_defaults_to_tab() {
        // No delimiter at all: single-cell rows
        let rows = parse_rows_sniffed("abc\ndef\n");
        assert_eq!(rows, vec![vec!["abc".to_string()], vec!["def".to_string()]]);

        // Tab wins ties
        let rows = parse_rows_sniffed("a\tb,c\td,e\n");
        assert_eq!(rows[0].len(), 3);
    }
}
