//! Status code model and DTOs. Admin-managed lifecycle states for initiatives.

use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::employee::EmployeeRef;

/// Full row from the `status_code` table.
#[derive(Debug, Clone, FromRow)]
pub struct StatusCode {
    pub status_id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub updated_at: Timestamp,
    pub updated_by: DbId,
}

/// Create payload, also applied wholesale on update.
#[derive(Debug, Deserialize)]
pub struct CreateStatusCode {
    pub description: String,
}

/// List/create response shape.
#[derive(Debug, Serialize)]
pub struct StatusCodeSummary {
    pub status_id: DbId,
    pub description: String,
}

impl From<StatusCode> for StatusCodeSummary {
    fn from(s: StatusCode) -> Self {
        StatusCodeSummary {
            status_id: s.status_id,
            description: s.description,
        }
    }
}

/// Info/update response shape with audit references embedded.
#[derive(Debug, Serialize)]
pub struct StatusCodeDetail {
    pub status_id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub creator: EmployeeRef,
    pub updater: EmployeeRef,
}

/// Flat join row backing [`StatusCodeDetail`].
#[derive(Debug, FromRow)]
pub struct StatusCodeDetailRow {
    pub status_id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub created_by: DbId,
    pub creator_name: String,
    pub updated_by: DbId,
    pub updater_name: String,
}

impl From<StatusCodeDetailRow> for StatusCodeDetail {
    fn from(row: StatusCodeDetailRow) -> Self {
        StatusCodeDetail {
            status_id: row.status_id,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
            creator: EmployeeRef {
                employee_id: row.created_by,
                employee_name: row.creator_name,
            },
            updater: EmployeeRef {
                employee_id: row.updated_by,
                employee_name: row.updater_name,
            },
        }
    }
}
