//! Minimal comma-delimited parser for roster uploads.
//!
//! There is no quoting or escaping: every comma is a column boundary, so a
//! value such as `Doe, Jr.` shifts the remaining columns one place right.
//! Malformed rows never fail; missing cells come back as empty strings and
//! are left for the validator to report.

use indexmap::IndexMap;

/// One parsed data line, keyed by column name in header order.
///
/// A header that appears twice keeps its first position and the value of
/// its last occurrence.
pub type RowRecord = IndexMap<String, String>;

/// Parse CSV text whose first non-empty line is the header.
///
/// Header names are trimmed. Returns an empty vector for empty or all-blank
/// input.
pub fn parse_csv(text: &str) -> Vec<RowRecord> {
    let mut lines = non_empty_lines(text);
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    lines.map(|line| build_row(line, &headers)).collect()
}

/// Parse CSV text using `headers` as the column names.
///
/// Every non-empty line is treated as data; the supplied names are used
/// verbatim.
pub fn parse_csv_with_headers(text: &str, headers: &[String]) -> Vec<RowRecord> {
    non_empty_lines(text)
        .map(|line| build_row(line, headers))
        .collect()
}

/// Split on `\n` or `\r\n`, skipping lines that are blank after trimming.
fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

/// Assign cells to headers by position. Short rows are padded with empty
/// strings, cells past the last header are ignored.
fn build_row(line: &str, headers: &[String]) -> RowRecord {
    let values: Vec<&str> = line.split(',').collect();
    let mut row = RowRecord::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let value = values.get(i).map(|v| v.trim()).unwrap_or("");
        row.insert(header.clone(), value.to_string());
    }
    row
}
