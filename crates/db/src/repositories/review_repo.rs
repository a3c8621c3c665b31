//! Repository for the `review` table.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, ReviewJoinRow};

const COLUMNS: &str = "review_id, initiative_id, description, given_by, given_at, updated_at";

const JOIN_SELECT: &str = "SELECT r.review_id, r.description, \
     r.initiative_id, i.title AS initiative_title, \
     r.given_by, e.employee_name AS reviewer_name, \
     r.given_at, r.updated_at \
     FROM review r \
     JOIN initiative i ON i.initiative_id = r.initiative_id \
     JOIN employee e ON e.employee_id = r.given_by";

/// CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, stamping `given_by` with the actor.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReview,
        actor_id: DbId,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO review (initiative_id, description, given_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.initiative_id)
            .bind(&input.description)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a review row by id (used for ownership checks).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM review WHERE review_id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reviews with initiative and reviewer embedded.
    pub async fn list_joined(pool: &PgPool) -> Result<Vec<ReviewJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} ORDER BY r.review_id");
        sqlx::query_as::<_, ReviewJoinRow>(&query).fetch_all(pool).await
    }

    /// List reviews belonging to one initiative.
    pub async fn list_joined_by_initiative(
        pool: &PgPool,
        initiative_id: DbId,
    ) -> Result<Vec<ReviewJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} WHERE r.initiative_id = $1 ORDER BY r.review_id");
        sqlx::query_as::<_, ReviewJoinRow>(&query)
            .bind(initiative_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one joined review row by id.
    pub async fn joined_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ReviewJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} WHERE r.review_id = $1");
        sqlx::query_as::<_, ReviewJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-replace update: overwrite initiative and description, refresh
    /// `updated_at`. `given_by`/`given_at` never change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE review
             SET initiative_id = $2, description = $3, updated_at = NOW()
             WHERE review_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(input.initiative_id)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review. Returns `false` if the row was absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM review WHERE review_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
