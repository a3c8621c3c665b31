//! Employee entity model and DTOs.

use initrack_core::roles::DEFAULT_EMPLOYEE_TYPE_ID;
use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full row from the `employee` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`EmployeeOut`] or [`EmployeeProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub employee_id: DbId,
    pub employee_name: String,
    pub email: String,
    pub password: String,
    pub employee_type_id: DbId,
    pub created_at: Timestamp,
}

/// Registration payload. `employee_type_id` falls back to the "Normal User"
/// role when omitted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployee {
    pub employee_name: String,
    #[serde(default = "default_employee_type")]
    pub employee_type_id: DbId,
    #[validate(email)]
    pub email: String,
    pub password: String,
}

fn default_employee_type() -> DbId {
    DEFAULT_EMPLOYEE_TYPE_ID
}

/// Minimal registration response.
#[derive(Debug, Serialize)]
pub struct EmployeeOut {
    pub employee_id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<Employee> for EmployeeOut {
    fn from(e: Employee) -> Self {
        EmployeeOut {
            employee_id: e.employee_id,
            email: e.email,
            created_at: e.created_at,
        }
    }
}

/// Nested role reference embedded in profiles.
#[derive(Debug, Serialize)]
pub struct RoleRef {
    pub role_name: String,
}

/// Short employee reference embedded in detail shapes of other entities.
#[derive(Debug, Serialize)]
pub struct EmployeeRef {
    pub employee_id: DbId,
    pub employee_name: String,
}

/// Public employee representation with the role embedded.
#[derive(Debug, Serialize)]
pub struct EmployeeProfile {
    pub employee_id: DbId,
    pub email: String,
    pub employee_name: String,
    pub employee_type: RoleRef,
    pub created_at: Timestamp,
}

/// Flat join row backing [`EmployeeProfile`].
#[derive(Debug, FromRow)]
pub struct EmployeeProfileRow {
    pub employee_id: DbId,
    pub email: String,
    pub employee_name: String,
    pub role_name: String,
    pub created_at: Timestamp,
}

impl From<EmployeeProfileRow> for EmployeeProfile {
    fn from(row: EmployeeProfileRow) -> Self {
        EmployeeProfile {
            employee_id: row.employee_id,
            email: row.email,
            employee_name: row.employee_name,
            employee_type: RoleRef {
                role_name: row.role_name,
            },
            created_at: row.created_at,
        }
    }
}
