//! Typed view of a roster row once the required columns are known.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::csv::RowRecord;
use super::template::REQUIRED_COLUMNS;

/// An employee as submitted for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
}

impl EmployeeRecord {
    /// Pull the required columns out of a parsed row. Absent columns become
    /// empty strings; values are trimmed.
    pub fn from_row(row: &RowRecord) -> Self {
        let column = |name: &str| {
            row.get(name)
                .map(|value| value.trim().to_string())
                .unwrap_or_default()
        };
        Self {
            name: column("name"),
            email: column("email"),
            position: column("position"),
            department: column("department"),
        }
    }
}

/// Columns outside the required set, kept for preview display only.
pub fn extra_columns(row: &RowRecord) -> IndexMap<String, String> {
    row.iter()
        .filter(|(key, _)| !REQUIRED_COLUMNS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::csv::parse_csv;

    #[test]
    fn from_row_maps_required_columns() {
        let rows = parse_csv("department,name,email,position\nOps,Bob,bob@co.com,Manager");
        let record = EmployeeRecord::from_row(&rows[0]);
        assert_eq!(
            record,
            EmployeeRecord {
                name: "Bob".into(),
                email: "bob@co.com".into(),
                position: "Manager".into(),
                department: "Ops".into(),
            }
        );
    }

    #[test]
    fn from_row_fills_missing_columns() {
        let rows = parse_csv("name\nBob");
        let record = EmployeeRecord::from_row(&rows[0]);
        assert_eq!(record.name, "Bob");
        assert!(record.email.is_empty());
        assert!(record.department.is_empty());
    }

    #[test]
    fn extra_columns_excludes_required() {
        let rows = parse_csv("name,email,phone,position,department,start\nA,a@b.com,555,P,D,Monday");
        let extra = extra_columns(&rows[0]);
        let keys: Vec<&str> = extra.keys().map(String::as_str).collect();
        assert_eq!(keys, ["phone", "start"]);
        assert_eq!(extra["phone"], "555");
    }
}
