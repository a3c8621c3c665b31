//! Repository for the `status_code` table.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::status_code::{CreateStatusCode, StatusCode, StatusCodeDetailRow};
use crate::repositories::cascade;

const COLUMNS: &str = "status_id, description, created_at, created_by, updated_at, updated_by";

const DETAIL_SELECT: &str = "SELECT s.status_id, s.description, s.created_at, s.updated_at, \
     s.created_by, c.employee_name AS creator_name, \
     s.updated_by, u.employee_name AS updater_name \
     FROM status_code s \
     JOIN employee c ON c.employee_id = s.created_by \
     JOIN employee u ON u.employee_id = s.updated_by";

/// CRUD operations for initiative status codes.
pub struct StatusCodeRepo;

impl StatusCodeRepo {
    /// Insert a new status code, stamping both audit columns with the actor.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStatusCode,
        actor_id: DbId,
    ) -> Result<StatusCode, sqlx::Error> {
        let query = format!(
            "INSERT INTO status_code (description, created_by, updated_by)
             VALUES ($1, $2, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StatusCode>(&query)
            .bind(&input.description)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a status code by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StatusCode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM status_code WHERE status_id = $1");
        sqlx::query_as::<_, StatusCode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all status codes ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<StatusCode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM status_code ORDER BY status_id");
        sqlx::query_as::<_, StatusCode>(&query).fetch_all(pool).await
    }

    /// Fetch one status code with its audit references resolved.
    pub async fn detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StatusCodeDetailRow>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE s.status_id = $1");
        sqlx::query_as::<_, StatusCodeDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-replace update: overwrite the description, move `updated_by` to
    /// the actor, and refresh `updated_at`. `created_by`/`created_at` never
    /// change. Returns `None` if the row is absent.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateStatusCode,
        actor_id: DbId,
    ) -> Result<Option<StatusCode>, sqlx::Error> {
        let query = format!(
            "UPDATE status_code
             SET description = $2, updated_by = $3, updated_at = NOW()
             WHERE status_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StatusCode>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(actor_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a status code and every initiative referencing it (children
    /// first), inside one transaction. Returns `false` if the row was absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let initiative_ids: Vec<DbId> =
            sqlx::query_scalar("SELECT initiative_id FROM initiative WHERE status_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;
        cascade::delete_initiative_children(&mut *tx, &initiative_ids).await?;

        sqlx::query("DELETE FROM initiative WHERE status_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM status_code WHERE status_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
