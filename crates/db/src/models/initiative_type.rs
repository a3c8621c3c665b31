//! Initiative type (category) model and DTOs. Admin-managed reference data.

use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::employee::EmployeeRef;

/// Full row from the `initiative_type` table.
#[derive(Debug, Clone, FromRow)]
pub struct InitiativeType {
    pub initiative_type_id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub created_by: DbId,
    pub updated_at: Timestamp,
    pub updated_by: DbId,
}

/// Create payload, also applied wholesale on update.
#[derive(Debug, Deserialize)]
pub struct CreateInitiativeType {
    pub name: String,
    pub description: String,
}

/// List/create response shape.
#[derive(Debug, Serialize)]
pub struct InitiativeTypeSummary {
    pub initiative_type_id: DbId,
    pub name: String,
    pub description: String,
}

impl From<InitiativeType> for InitiativeTypeSummary {
    fn from(t: InitiativeType) -> Self {
        InitiativeTypeSummary {
            initiative_type_id: t.initiative_type_id,
            name: t.name,
            description: t.description,
        }
    }
}

/// Info/update response shape with audit references embedded.
#[derive(Debug, Serialize)]
pub struct InitiativeTypeDetail {
    pub initiative_type_id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub creator: EmployeeRef,
    pub updater: EmployeeRef,
}

/// Flat join row backing [`InitiativeTypeDetail`].
#[derive(Debug, FromRow)]
pub struct InitiativeTypeDetailRow {
    pub initiative_type_id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub created_by: DbId,
    pub creator_name: String,
    pub updated_by: DbId,
    pub updater_name: String,
}

impl From<InitiativeTypeDetailRow> for InitiativeTypeDetail {
    fn from(row: InitiativeTypeDetailRow) -> Self {
        InitiativeTypeDetail {
            initiative_type_id: row.initiative_type_id,
            name: row.name,
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
