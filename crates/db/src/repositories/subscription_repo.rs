//! Repository for the `subscription` table. Subscriptions are created and
//! deleted, never updated.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::subscription::{Subscription, SubscriptionJoinRow};

const COLUMNS: &str = "subscription_id, subscribed_by, initiative_id, subscribed_at";

const JOIN_SELECT: &str = "SELECT s.subscription_id, \
     s.initiative_id, i.title AS initiative_title, \
     s.subscribed_by, e.employee_name AS subscriber_name, \
     s.subscribed_at \
     FROM subscription s \
     JOIN initiative i ON i.initiative_id = s.initiative_id \
     JOIN employee e ON e.employee_id = s.subscribed_by";

/// Create/read/delete operations for subscriptions.
pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Insert a new subscription, stamping `subscribed_by` with the actor.
    pub async fn create(
        pool: &PgPool,
        initiative_id: DbId,
        actor_id: DbId,
    ) -> Result<Subscription, sqlx::Error> {
        let query = format!(
            "INSERT INTO subscription (initiative_id, subscribed_by)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&query)
            .bind(initiative_id)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a subscription row by id (used for ownership checks).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscription WHERE subscription_id = $1");
        sqlx::query_as::<_, Subscription>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all subscriptions with initiative and subscriber embedded.
    pub async fn list_joined(pool: &PgPool) -> Result<Vec<SubscriptionJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} ORDER BY s.subscription_id");
        sqlx::query_as::<_, SubscriptionJoinRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List subscriptions belonging to one initiative.
    pub async fn list_joined_by_initiative(
        pool: &PgPool,
        initiative_id: DbId,
    ) -> Result<Vec<SubscriptionJoinRow>, sqlx::Error> {
        let query =
            format!("{JOIN_SELECT} WHERE s.initiative_id = $1 ORDER BY s.subscription_id");
        sqlx::query_as::<_, SubscriptionJoinRow>(&query)
            .bind(initiative_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one joined subscription row by id.
    pub async fn joined_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubscriptionJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} WHERE s.subscription_id = $1");
        sqlx::query_as::<_, SubscriptionJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subscription. Returns `false` if the row was absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subscription WHERE subscription_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
