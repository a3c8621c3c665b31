//! Rating model and DTOs.

use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::employee::EmployeeRef;
use super::initiative::InitiativeRef;

/// Full row from the `rating` table.
#[derive(Debug, Clone, FromRow)]
pub struct Rating {
    pub rating_id: DbId,
    pub initiative_id: DbId,
    pub point: i64,
    pub given_by: DbId,
    pub given_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create payload, also applied wholesale on update. `given_by` is stamped
/// from the authenticated caller.
#[derive(Debug, Deserialize)]
pub struct CreateRating {
    pub initiative_id: DbId,
    pub point: i64,
}

/// List/create response shape.
#[derive(Debug, Serialize)]
pub struct RatingSummary {
    pub rating_id: DbId,
    pub point: i64,
    pub initiative: InitiativeRef,
    pub rater: EmployeeRef,
}

/// Info/update response shape.
#[derive(Debug, Serialize)]
pub struct RatingDetail {
    pub rating_id: DbId,
    pub point: i64,
    pub initiative: InitiativeRef,
    pub rater: EmployeeRef,
    pub given_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat join row backing both response shapes.
#[derive(Debug, FromRow)]
pub struct RatingJoinRow {
    pub rating_id: DbId,
    pub point: i64,
    pub initiative_id: DbId,
    pub initiative_title: String,
    pub given_by: DbId,
    pub rater_name: String,
    pub given_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RatingJoinRow> for RatingSummary {
    fn from(row: RatingJoinRow) -> Self {
        RatingSummary {
            rating_id: row.rating_id,
            point: row.point,
            initiative: InitiativeRef {
                initiative_id: row.initiative_id,
                title: row.initiative_title,
            },
            rater: EmployeeRef {
                employee_id: row.given_by,
                employee_name: row.rater_name,
            },
        }
    }
}

impl From<RatingJoinRow> for RatingDetail {
    fn from(row: RatingJoinRow) -> Self {
        RatingDetail {
            rating_id: row.rating_id,
            point: row.point,
            initiative: InitiativeRef {
                initiative_id: row.initiative_id,
                title: row.initiative_title,
            },
            rater: EmployeeRef {
                employee_id: row.given_by,
                employee_name: row.rater_name,
            },
            given_at: row.given_at,
            updated_at: row.updated_at,
        }
    }
}
