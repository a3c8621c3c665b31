//! Repository for the `initiative_type` table.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::initiative_type::{
    CreateInitiativeType, InitiativeType, InitiativeTypeDetailRow,
};
use crate::repositories::cascade;

const COLUMNS: &str =
    "initiative_type_id, name, description, created_at, created_by, updated_at, updated_by";

const DETAIL_SELECT: &str = "SELECT t.initiative_type_id, t.name, t.description, \
     t.created_at, t.updated_at, \
     t.created_by, c.employee_name AS creator_name, \
     t.updated_by, u.employee_name AS updater_name \
     FROM initiative_type t \
     JOIN employee c ON c.employee_id = t.created_by \
     JOIN employee u ON u.employee_id = t.updated_by";

/// CRUD operations for initiative types (categories).
pub struct InitiativeTypeRepo;

impl InitiativeTypeRepo {
    /// Insert a new initiative type, stamping both audit columns with the actor.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInitiativeType,
        actor_id: DbId,
    ) -> Result<InitiativeType, sqlx::Error> {
        let query = format!(
            "INSERT INTO initiative_type (name, description, created_by, updated_by)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InitiativeType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find an initiative type by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InitiativeType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM initiative_type WHERE initiative_type_id = $1");
        sqlx::query_as::<_, InitiativeType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all initiative types ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<InitiativeType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM initiative_type ORDER BY initiative_type_id");
        sqlx::query_as::<_, InitiativeType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch one initiative type with its audit references resolved.
    pub async fn detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InitiativeTypeDetailRow>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE t.initiative_type_id = $1");
        sqlx::query_as::<_, InitiativeTypeDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-replace update: overwrite name and description, move `updated_by`
    /// to the actor, refresh `updated_at`. Returns `None` if the row is absent.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateInitiativeType,
        actor_id: DbId,
    ) -> Result<Option<InitiativeType>, sqlx::Error> {
        let query = format!(
            "UPDATE initiative_type
             SET name = $2, description = $3, updated_by = $4, updated_at = NOW()
             WHERE initiative_type_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InitiativeType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(actor_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an initiative type and every initiative referencing it
    /// (children first), inside one transaction. Returns `false` if absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let initiative_ids: Vec<DbId> =
            sqlx::query_scalar("SELECT initiative_id FROM initiative WHERE initiative_type = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;
        cascade::delete_initiative_children(&mut *tx, &initiative_ids).await?;

        sqlx::query("DELETE FROM initiative WHERE initiative_type = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM initiative_type WHERE initiative_type_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
