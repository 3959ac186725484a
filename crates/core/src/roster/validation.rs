//! Batch validation of parsed roster rows.
//!
//! Every row is checked for the four required columns and a well-formed,
//! batch-unique email. Failures accumulate; nothing short-circuits.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::csv::RowRecord;

/// Basic `local@domain.tld` shape.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// A single failed check, tied to the 1-based position of the row in the
/// batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

impl RowError {
    fn new(row: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            message: message.into(),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row, self.message)
    }
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check every row and return the failures in row order.
///
/// Per row the checks run as: name, email presence, email format, email
/// uniqueness, position, department. Uniqueness is only tracked for
/// well-formed emails, and the first occurrence is never reported.
pub fn check_employee_rows(rows: &[RowRecord]) -> Vec<RowError> {
    let mut errors = Vec::new();
    let mut seen_emails: HashSet<&str> = HashSet::new();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;

        if present(row, "name").is_none() {
            errors.push(RowError::new(row_number, "Name is required"));
        }

        match present(row, "email") {
            None => errors.push(RowError::new(row_number, "Email is required")),
            Some(email) if !is_valid_email(email) => {
                errors.push(RowError::new(row_number, "Invalid email format"));
            }
            Some(email) => {
                if !seen_emails.insert(email) {
                    errors.push(RowError::new(
                        row_number,
                        format!("Duplicate email '{email}'"),
                    ));
                }
            }
        }

        if present(row, "position").is_none() {
            errors.push(RowError::new(row_number, "Position is required"));
        }
        if present(row, "department").is_none() {
            errors.push(RowError::new(row_number, "Department is required"));
        }
    }

    errors
}

/// Validate a batch and render each failure as `Row <n>: <message>`.
///
/// An empty result means every row passed.
pub fn validate_employee_data(rows: &[RowRecord]) -> Vec<String> {
    check_employee_rows(rows)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// The trimmed value of `column`, if it exists and is not blank.
fn present<'a>(row: &'a RowRecord, column: &str) -> Option<&'a str> {
    row.get(column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
