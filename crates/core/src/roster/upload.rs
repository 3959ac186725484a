//! One upload interaction: decode the file, parse it, validate it.
//!
//! Runs synchronously to completion. Nothing is shared between calls, so
//! concurrent uploads never observe each other.

use serde::Serialize;

use super::csv::{parse_csv, RowRecord};
use super::record::EmployeeRecord;
use super::validation::validate_employee_data;

/// Reported when the uploaded bytes cannot be read as text.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid CSV file format";

const UTF8_BOM: char = '\u{feff}';

/// Parsed rows plus the validation outcome for one uploaded file.
#[derive(Debug, Clone, Serialize)]
pub struct UploadPreview {
    pub rows: Vec<RowRecord>,
    pub errors: Vec<String>,
    /// True when there is at least one row and no errors.
    pub can_upload: bool,
}

impl UploadPreview {
    fn new(rows: Vec<RowRecord>, errors: Vec<String>) -> Self {
        let can_upload = !rows.is_empty() && errors.is_empty();
        Self {
            rows,
            errors,
            can_upload,
        }
    }

    /// Typed records ready for submission.
    pub fn records(&self) -> Vec<EmployeeRecord> {
        self.rows.iter().map(EmployeeRecord::from_row).collect()
    }
}

/// Decode, parse and validate an uploaded roster file.
///
/// Never fails: undecodable input becomes a preview with no rows and a
/// single format error.
pub fn preview_upload(bytes: &[u8]) -> UploadPreview {
    match std::str::from_utf8(bytes) {
        Ok(text) => preview_text(text.strip_prefix(UTF8_BOM).unwrap_or(text)),
        Err(_) => UploadPreview::new(Vec::new(), vec![INVALID_FORMAT_MESSAGE.to_string()]),
    }
}

/// Parse and validate already-decoded CSV text.
pub fn preview_text(text: &str) -> UploadPreview {
    let rows = parse_csv(text);
    let errors = validate_employee_data(&rows);
    UploadPreview::new(rows, errors)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::roster::template::csv_template;

    #[test]
    fn template_upload_is_ready() {
        let preview = preview_upload(csv_template().as_bytes());
        assert_eq!(preview.rows.len(), 1);
        assert!(preview.errors.is_empty());
        assert!(preview.can_upload);
        assert_eq!(preview.records()[0].email, "john.doe@example.com");
    }

    #[test]
    fn invalid_utf8_yields_single_format_error() {
        let preview = preview_upload(&[0x6e, 0x61, 0xff, 0xfe, 0x0a]);
        assert!(preview.rows.is_empty());
        assert_eq!(preview.errors, [INVALID_FORMAT_MESSAGE]);
        assert!(!preview.can_upload);
    }

    #[test]
    fn bom_is_stripped_from_header() {
        let text = format!("{UTF8_BOM}{}", csv_template());
        let preview = preview_upload(text.as_bytes());
        assert_matches!(preview.rows[0].get_index(0), Some((key, _)) if key == "name");
        assert!(preview.can_upload);
    }

    #[test]
    fn empty_file_cannot_be_uploaded() {
        let preview = preview_upload(b"name,email,position,department\n");
        assert!(preview.rows.is_empty());
        assert!(preview.errors.is_empty());
        assert!(!preview.can_upload);
    }

    #[test]
    fn errors_block_upload() {
        let preview = preview_text("name,email,position,department\nAlice,bad,Eng,Eng");
        assert_eq!(preview.errors, ["Row 1: Invalid email format"]);
        assert!(!preview.can_upload);
    }

    #[test]
    fn serializes_rows_in_column_order() {
        let preview = preview_text("name,email,position,department\nA,a@b.com,P,D");
        let json = serde_json::to_string(&preview).unwrap();
        assert_eq!(
            json,
            r#"{"rows":[{"name":"A","email":"a@b.com","position":"P","department":"D"}],"errors":[],"can_upload":true}"#
        );
    }
}
