//! Repository for the `initiative` table.
//!
//! Update and delete address rows by `status_id`, not `initiative_id` -- the
//! `{id}` path segment of those endpoints matches the status column, and
//! multiple initiatives sharing that status are all affected. See DESIGN.md.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::initiative::{
    CreateInitiative, Initiative, InitiativeDetailRow, InitiativeSummaryRow,
};
use crate::repositories::cascade;

const COLUMNS: &str = "initiative_id, title, description, initiative_type, status_id, \
     created_at, created_by, updated_at, updated_by";

const SUMMARY_SELECT: &str = "SELECT i.initiative_id, i.title, i.description, \
     t.name AS type_name, s.description AS status_description \
     FROM initiative i \
     JOIN initiative_type t ON t.initiative_type_id = i.initiative_type \
     JOIN status_code s ON s.status_id = i.status_id";

const DETAIL_SELECT: &str = "SELECT i.initiative_id, i.title, i.description, \
     i.initiative_type, i.status_id, \
     t.name AS type_name, s.description AS status_description, \
     i.created_at, i.created_by, c.employee_name AS creator_name, \
     i.updated_at, i.updated_by, u.employee_name AS updater_name \
     FROM initiative i \
     JOIN initiative_type t ON t.initiative_type_id = i.initiative_type \
     JOIN status_code s ON s.status_id = i.status_id \
     JOIN employee c ON c.employee_id = i.created_by \
     JOIN employee u ON u.employee_id = i.updated_by";

/// CRUD operations for initiatives.
pub struct InitiativeRepo;

impl InitiativeRepo {
    /// Insert a new initiative, stamping both audit columns with the actor.
    /// Type and status defaults are applied by the payload deserialization.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInitiative,
        actor_id: DbId,
    ) -> Result<Initiative, sqlx::Error> {
        let query = format!(
            "INSERT INTO initiative (title, description, initiative_type, status_id, created_by, updated_by)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Initiative>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.initiative_type)
            .bind(input.status_id)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// List all initiatives with type and status embedded, ordered by id.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<InitiativeSummaryRow>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} ORDER BY i.initiative_id");
        sqlx::query_as::<_, InitiativeSummaryRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch one initiative summary by `initiative_id`.
    pub async fn summary_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InitiativeSummaryRow>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE i.initiative_id = $1");
        sqlx::query_as::<_, InitiativeSummaryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one initiative with every related object resolved, by
    /// `initiative_id`.
    pub async fn detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InitiativeDetailRow>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE i.initiative_id = $1");
        sqlx::query_as::<_, InitiativeDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-replace update of every initiative whose `status_id` equals the
    /// path id. Overwrites title, description, type, and status; moves
    /// `updated_by` to the actor and refreshes `updated_at`.
    ///
    /// Returns the id of the first updated initiative, or `None` when no row
    /// matched.
    pub async fn update_where_status(
        pool: &PgPool,
        status_id: DbId,
        input: &CreateInitiative,
        actor_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let updated: Vec<DbId> = sqlx::query_scalar(
            "UPDATE initiative
             SET title = $2, description = $3, initiative_type = $4, status_id = $5,
                 updated_by = $6, updated_at = NOW()
             WHERE status_id = $1
             RETURNING initiative_id",
        )
        .bind(status_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.initiative_type)
        .bind(input.status_id)
        .bind(actor_id)
        .fetch_all(pool)
        .await?;
        Ok(updated.first().copied())
    }

    /// Delete every initiative whose `status_id` equals the path id, children
    /// first, inside one transaction. Returns `false` when no row matched.
    pub async fn delete_where_status(pool: &PgPool, status_id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let initiative_ids: Vec<DbId> =
            sqlx::query_scalar("SELECT initiative_id FROM initiative WHERE status_id = $1")
                .bind(status_id)
                .fetch_all(&mut *tx)
                .await?;
        if initiative_ids.is_empty() {
            return Ok(false);
        }
        cascade::delete_initiative_children(&mut *tx, &initiative_ids).await?;

        sqlx::query("DELETE FROM initiative WHERE initiative_id = ANY($1)")
            .bind(&initiative_ids)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
