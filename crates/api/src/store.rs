//! Persistence seam for employer rosters.
//!
//! Handlers only see [`EmployeeStore`]; the binary wires in
//! [`PgEmployeeStore`], integration tests substitute an in-memory store.

use async_trait::async_trait;
use staffhub_core::error::CoreError;
use staffhub_core::roster::record::EmployeeRecord;
use staffhub_core::types::DbId;
use staffhub_db::models::employee::Employee;
use staffhub_db::repositories::EmployeeRepo;
use staffhub_db::DbPool;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Create every record for `employer_id`, or none of them.
    async fn create_batch(
        &self,
        employer_id: DbId,
        records: &[EmployeeRecord],
    ) -> Result<Vec<Employee>, CoreError>;

    /// The employer's current roster.
    async fn list_for_employer(&self, employer_id: DbId) -> Result<Vec<Employee>, CoreError>;

    /// Whether the backing store is reachable.
    async fn ping(&self) -> Result<(), CoreError>;
}

/// [`EmployeeStore`] backed by PostgreSQL.
pub struct PgEmployeeStore {
    pool: DbPool,
}

impl PgEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn create_batch(
        &self,
        employer_id: DbId,
        records: &[EmployeeRecord],
    ) -> Result<Vec<Employee>, CoreError> {
        EmployeeRepo::create_batch(&self.pool, employer_id, records)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list_for_employer(&self, employer_id: DbId) -> Result<Vec<Employee>, CoreError> {
        EmployeeRepo::list_by_employer(&self.pool, employer_id)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        staffhub_db::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

/// Map a sqlx error onto the domain error taxonomy.
///
/// Unique constraint violations (PostgreSQL `23505` on a constraint named
/// `uq_*`) become [`CoreError::Conflict`]; everything else is internal.
fn classify_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}
