//! Employee roster bulk import.
//!
//! Parses an uploaded CSV file into row records, validates them against the
//! required employee columns, and produces the template users start from.

pub mod csv;
pub mod record;
pub mod template;
pub mod upload;
pub mod validation;

pub use csv::RowRecord;
