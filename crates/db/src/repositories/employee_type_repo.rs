//! Repository for the `employee_type` table.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee_type::{CreateEmployeeType, EmployeeType};
use crate::repositories::cascade;

const COLUMNS: &str = "employee_type_id, role_name, created_at";

/// CRUD operations for employee types (roles).
pub struct EmployeeTypeRepo;

impl EmployeeTypeRepo {
    /// Insert a new employee type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEmployeeType,
    ) -> Result<EmployeeType, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_type (role_name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeType>(&query)
            .bind(&input.role_name)
            .fetch_one(pool)
            .await
    }

    /// Find an employee type by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EmployeeType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_type WHERE employee_type_id = $1");
        sqlx::query_as::<_, EmployeeType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employee types ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_type ORDER BY employee_type_id");
        sqlx::query_as::<_, EmployeeType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Full-replace update. Returns `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateEmployeeType,
    ) -> Result<Option<EmployeeType>, sqlx::Error> {
        let query = format!(
            "UPDATE employee_type SET role_name = $2
             WHERE employee_type_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmployeeType>(&query)
            .bind(id)
            .bind(&input.role_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee type and, transitively, every employee holding it.
    ///
    /// Runs in a single transaction. Returns `false` if the type was absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let employee_ids: Vec<DbId> =
            sqlx::query_scalar("SELECT employee_id FROM employee WHERE employee_type_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;
        cascade::delete_employees(&mut *tx, &employee_ids).await?;

        let result = sqlx::query("DELETE FROM employee_type WHERE employee_type_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
