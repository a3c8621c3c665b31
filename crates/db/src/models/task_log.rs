//! Task log model and DTOs. Append-style activity notes on an initiative.

use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::employee::EmployeeRef;
use super::initiative::InitiativeRef;

/// Full row from the `task_log` table.
#[derive(Debug, Clone, FromRow)]
pub struct TaskLog {
    pub task_id: DbId,
    pub initiative_id: DbId,
    pub description: String,
    pub logged_at: Timestamp,
    pub logged_by: DbId,
    pub updated_at: Timestamp,
}

/// Create payload, also applied wholesale on update. `logged_by` is stamped
/// from the authenticated caller, never taken from the payload.
#[derive(Debug, Deserialize)]
pub struct CreateTaskLog {
    pub initiative_id: DbId,
    pub description: String,
}

/// List/create response shape.
#[derive(Debug, Serialize)]
pub struct TaskLogSummary {
    pub task_id: DbId,
    pub description: String,
    pub initiative: InitiativeRef,
    pub creator: EmployeeRef,
}

/// Info/update response shape.
#[derive(Debug, Serialize)]
pub struct TaskLogDetail {
    pub task_id: DbId,
    pub description: String,
    pub initiative: InitiativeRef,
    pub creator: EmployeeRef,
    pub logged_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat join row backing both response shapes.
#[derive(Debug, FromRow)]
pub struct TaskLogJoinRow {
    pub task_id: DbId,
    pub description: String,
    pub initiative_id: DbId,
    pub initiative_title: String,
    pub logged_by: DbId,
    pub creator_name: String,
    pub logged_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TaskLogJoinRow> for TaskLogSummary {
    fn from(row: TaskLogJoinRow) -> Self {
        TaskLogSummary {
            task_id: row.task_id,
            description: row.description,
            initiative: InitiativeRef {
                initiative_id: row.initiative_id,
                title: row.initiative_title,
            },
            creator: EmployeeRef {
                employee_id: row.logged_by,
                employee_name: row.creator_name,
            },
        }
    }
}

impl From<TaskLogJoinRow> for TaskLogDetail {
    fn from(row: TaskLogJoinRow) -> Self {
        TaskLogDetail {
            task_id: row.task_id,
            description: row.description,
            initiative: InitiativeRef {
                initiative_id: row.initiative_id,
                title: row.initiative_title,
            },
            creator: EmployeeRef {
                employee_id: row.logged_by,
                employee_name: row.creator_name,
            },
            logged_at: row.logged_at,
            updated_at: row.updated_at,
        }
    }
}
