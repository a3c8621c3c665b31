//! Initiative model and DTOs. The central aggregate: task logs, reviews,
//! ratings, and subscriptions all hang off an initiative.

use initrack_core::roles::{DEFAULT_INITIATIVE_TYPE_ID, DEFAULT_STATUS_ID};
use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::employee::EmployeeRef;

/// Full row from the `initiative` table.
#[derive(Debug, Clone, FromRow)]
pub struct Initiative {
    pub initiative_id: DbId,
    pub title: String,
    pub description: String,
    pub initiative_type: DbId,
    pub status_id: DbId,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub updated_at: Timestamp,
    pub updated_by: DbId,
}

/// Create payload, also applied wholesale on update.
///
/// The serde defaults are part of the API contract: an update payload that
/// omits `initiative_type` or `status_id` resets them to the defaults.
#[derive(Debug, Deserialize)]
pub struct CreateInitiative {
    pub title: String,
    pub description: String,
    #[serde(default = "default_initiative_type")]
    pub initiative_type: DbId,
    #[serde(default = "default_status")]
    pub status_id: DbId,
}

fn default_initiative_type() -> DbId {
    DEFAULT_INITIATIVE_TYPE_ID
}

fn default_status() -> DbId {
    DEFAULT_STATUS_ID
}

/// Nested type reference carrying only the category name.
#[derive(Debug, Serialize)]
pub struct InitiativeTypeRef {
    pub name: String,
}

/// Nested status reference carrying only the description.
#[derive(Debug, Serialize)]
pub struct StatusRef {
    pub description: String,
}

/// Short initiative reference embedded in task log / review / rating shapes.
#[derive(Debug, Serialize)]
pub struct InitiativeRef {
    pub initiative_id: DbId,
    pub title: String,
}

/// List/create response shape with type and status embedded.
#[derive(Debug, Serialize)]
pub struct InitiativeSummary {
    pub initiative_id: DbId,
    pub title: String,
    pub description: String,
    pub init_type: InitiativeTypeRef,
    pub status: StatusRef,
}

/// Flat join row backing [`InitiativeSummary`].
#[derive(Debug, FromRow)]
pub struct InitiativeSummaryRow {
    pub initiative_id: DbId,
    pub title: String,
    pub description: String,
    pub type_name: String,
    pub status_description: String,
}

impl From<InitiativeSummaryRow> for InitiativeSummary {
    fn from(row: InitiativeSummaryRow) -> Self {
        InitiativeSummary {
            initiative_id: row.initiative_id,
            title: row.title,
            description: row.description,
            init_type: InitiativeTypeRef {
                name: row.type_name,
            },
            status: StatusRef {
                description: row.status_description,
            },
        }
    }
}

/// Info/update response shape with every related object embedded.
#[derive(Debug, Serialize)]
pub struct InitiativeDetail {
    pub initiative_id: DbId,
    pub title: String,
    pub description: String,
    pub initiative_type: DbId,
    pub status_id: DbId,
    pub init_type: InitiativeTypeRef,
    pub status: StatusRef,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub creator: EmployeeRef,
    pub updater: EmployeeRef,
}

/// Flat join row backing [`InitiativeDetail`].
#[derive(Debug, FromRow)]
pub struct InitiativeDetailRow {
    pub initiative_id: DbId,
    pub title: String,
    pub description: String,
    pub initiative_type: DbId,
    pub status_id: DbId,
    pub type_name: String,
    pub status_description: String,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub creator_name: String,
    pub updated_at: Timestamp,
    pub updated_by: DbId,
    pub updater_name: String,
}

impl From<InitiativeDetailRow> for InitiativeDetail {
    fn from(row: InitiativeDetailRow) -> Self {
        InitiativeDetail {
            initiative_id: row.initiative_id,
            title: row.title,
            description: row.description,
            initiative_type: row.initiative_type,
            status_id: row.status_id,
            init_type: InitiativeTypeRef {
                name: row.type_name,
            },
            status: StatusRef {
                description: row.status_description,
            },
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
