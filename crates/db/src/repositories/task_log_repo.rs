//! Repository for the `task_log` table.

use initrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::task_log::{CreateTaskLog, TaskLog, TaskLogJoinRow};

const COLUMNS: &str = "task_id, initiative_id, description, logged_at, logged_by, updated_at";

const JOIN_SELECT: &str = "SELECT tl.task_id, tl.description, \
     tl.initiative_id, i.title AS initiative_title, \
     tl.logged_by, e.employee_name AS creator_name, \
     tl.logged_at, tl.updated_at \
     FROM task_log tl \
     JOIN initiative i ON i.initiative_id = tl.initiative_id \
     JOIN employee e ON e.employee_id = tl.logged_by";

/// CRUD operations for task logs.
pub struct TaskLogRepo;

impl TaskLogRepo {
    /// Insert a new task log, stamping `logged_by` with the actor.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTaskLog,
        actor_id: DbId,
    ) -> Result<TaskLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_log (initiative_id, description, logged_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskLog>(&query)
            .bind(input.initiative_id)
            .bind(&input.description)
            .bind(actor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a task log row by id (used for ownership checks).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_log WHERE task_id = $1");
        sqlx::query_as::<_, TaskLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all task logs with initiative and author embedded.
    pub async fn list_joined(pool: &PgPool) -> Result<Vec<TaskLogJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} ORDER BY tl.task_id");
        sqlx::query_as::<_, TaskLogJoinRow>(&query).fetch_all(pool).await
    }

    /// List task logs belonging to one initiative.
    pub async fn list_joined_by_initiative(
        pool: &PgPool,
        initiative_id: DbId,
    ) -> Result<Vec<TaskLogJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} WHERE tl.initiative_id = $1 ORDER BY tl.task_id");
        sqlx::query_as::<_, TaskLogJoinRow>(&query)
            .bind(initiative_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one joined task log row by id.
    pub async fn joined_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaskLogJoinRow>, sqlx::Error> {
        let query = format!("{JOIN_SELECT} WHERE tl.task_id = $1");
        sqlx::query_as::<_, TaskLogJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-replace update: overwrite initiative and description, refresh
    /// `updated_at`. `logged_by`/`logged_at` never change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CreateTaskLog,
    ) -> Result<Option<TaskLog>, sqlx::Error> {
        let query = format!(
            "UPDATE task_log
             SET initiative_id = $2, description = $3, updated_at = NOW()
             WHERE task_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskLog>(&query)
            .bind(id)
            .bind(input.initiative_id)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task log. Returns `false` if the row was absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task_log WHERE task_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
