//! Repository for the `employee` table.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, EmployeeProfileRow};
use crate::repositories::cascade;

const COLUMNS: &str =
    "employee_id, employee_name, email, password, employee_type_id, created_at";

/// Joined select backing the public profile shape.
const PROFILE_SELECT: &str = "SELECT e.employee_id, e.email, e.employee_name, \
     t.role_name, e.created_at \
     FROM employee e \
     JOIN employee_type t ON t.employee_type_id = e.employee_type_id";

/// CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee. The password hash is computed by the caller;
    /// the plaintext never reaches this layer.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEmployee,
        password_hash: &str,
    ) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee (employee_name, email, password, employee_type_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.employee_name)
            .bind(&input.email)
            .bind(password_hash)
            .bind(input.employee_type_id)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee WHERE employee_id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee WHERE email = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all employees with their role embedded, ordered by id.
    pub async fn list_profiles(pool: &PgPool) -> Result<Vec<EmployeeProfileRow>, sqlx::Error> {
        let query = format!("{PROFILE_SELECT} ORDER BY e.employee_id");
        sqlx::query_as::<_, EmployeeProfileRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch one employee profile by id.
    pub async fn profile_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EmployeeProfileRow>, sqlx::Error> {
        let query = format!("{PROFILE_SELECT} WHERE e.employee_id = $1");
        sqlx::query_as::<_, EmployeeProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee and everything that depends on them: their
    /// initiatives (with all child reviews/ratings/task logs/subscriptions,
    /// transitively), the reference rows they authored, and the rows they
    /// contributed to other initiatives.
    ///
    /// Runs in a single transaction. Returns `false` if the employee was
    /// absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let removed = cascade::delete_employees(&mut *tx, &[id]).await?;
        tx.commit().await?;
        Ok(removed > 0)
    }
}
