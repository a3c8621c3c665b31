//! Employee type (role) model and DTOs. Immutable reference data apart from
//! admin-managed renames.

use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `employee_type` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeType {
    pub employee_type_id: DbId,
    pub role_name: String,
    pub created_at: Timestamp,
}

/// Create payload, also applied wholesale on update.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeType {
    pub role_name: String,
}
