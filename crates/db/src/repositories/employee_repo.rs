//! Repository for the `employees` table.

use sqlx::PgPool;
use staffhub_core::roster::record::EmployeeRecord;
use staffhub_core::types::DbId;

use crate::models::employee::Employee;

/// Column list for `employees` queries.
const COLUMNS: &str = "id, employer_id, name, email, position, department, role, \
                       is_active, must_change_password, created_at, updated_at";

/// Provides persistence for employer rosters.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a whole batch for one employer inside a single transaction.
    ///
    /// Either every record is created or none is. The returned rows are in
    /// input order.
    pub async fn create_batch(
        pool: &PgPool,
        employer_id: DbId,
        records: &[EmployeeRecord],
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(records.len());

        let query = format!(
            "INSERT INTO employees (employer_id, name, email, position, department) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );

        for record in records {
            let row = sqlx::query_as::<_, Employee>(&query)
                .bind(employer_id)
                .bind(&record.name)
                .bind(&record.email)
                .bind(&record.position)
                .bind(&record.department)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row);
        }

        tx.commit().await?;
        tracing::debug!(employer_id, count = created.len(), "Employee batch committed");
        Ok(created)
    }

    /// List an employer's roster, oldest first.
    pub async fn list_by_employer(
        pool: &PgPool,
        employer_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE employer_id = $1 ORDER BY id");
        sqlx::query_as::<_, Employee>(&query)
            .bind(employer_id)
            .fetch_all(pool)
            .await
    }

    /// Find an employee by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
