//! Repository for the `rating` table.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::{CreateRating, Rating, RatingJoinRow};

const COLUMNS: &str = "rating_id, initiative_id, point, given_by, given_at, updated_at";

const JOIN_SELECT: &str = "SELECT r.rating_id, r.point, \
     r.initiative_id, i.title AS initiative_title, \
     r.given_by, e.employee_name AS rater_name, \
     r.given_at, r.updated_at \
     FROM rating r \
     JOIN initiative i ON i.initiative_id = r.initiative_id \
     JOIN employee e ON e.employee_id = r.given_by";

/// CRUD operations for ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert a new rating, stamping `given_by` with the actor.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRating,
        actor_id: DbId,
    ) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO rating (initiative_id, point, given_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(input.initiative_id)
            .bind(input.point)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a rating row by id (used for ownership checks).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rating WHERE rating_id = $1");
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all ratings with initiative and rater embedded.
    pub async fn list_joined(pool: &PgPool) -> Result<Vec<RatingJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} ORDER BY r.rating_id");
        sqlx::query_as::<_, RatingJoinRow>(&query).fetch_all(pool).await
    }

    /// List ratings belonging to one initiative.
    pub async fn list_joined_by_initiative(
        pool: &PgPool,
        initiative_id: DbId,
    ) -> Result<Vec<RatingJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} WHERE r.initiative_id = $1 ORDER BY r.rating_id");
        sqlx::query_as::<_, RatingJoinRow>(&query)
            .bind(initiative_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one joined rating row by id.
    pub async fn joined_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RatingJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} WHERE r.rating_id = $1");
        sqlx::query_as::<_, RatingJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-replace update: overwrite initiative and point, refresh
    /// `updated_at`. `given_by`/`given_at` never change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateRating,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!(
            "UPDATE rating
             SET initiative_id = $2, point = $3, updated_at = NOW()
             WHERE rating_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .bind(input.initiative_id)
            .bind(input.point)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rating. Returns `false` if the row was absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rating WHERE rating_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
