use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffhub_core::types::{DbId, Timestamp};

/// Role assigned to every employee created through a roster import.
pub const DEFAULT_EMPLOYEE_ROLE: &str = "employee";

/// A row from the `employees` table.
///
/// `role`, `is_active` and `must_change_password` are account provisioning
/// fields filled by column defaults on insert.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Employee {
    pub id: DbId,
    pub employer_id: DbId,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub role: String,
    pub is_active: bool,
    pub must_change_password: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
