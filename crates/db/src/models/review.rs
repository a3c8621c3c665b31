//! Review model and DTOs. An employee may submit multiple reviews for the
//! same initiative; no uniqueness constraint exists.

use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::employee::EmployeeRef;
use super::initiative::InitiativeRef;

/// Full row from the `review` table.
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub review_id: DbId,
    pub initiative_id: DbId,
    pub description: String,
    pub given_by: DbId,
    pub given_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create payload, also applied wholesale on update. `given_by` is stamped
/// from the authenticated caller.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub initiative_id: DbId,
    pub description: String,
}

/// List/create response shape.
#[derive(Debug, Serialize)]
pub struct ReviewSummary {
    pub review_id: DbId,
    pub description: String,
    pub initiative: InitiativeRef,
    pub reviewer: EmployeeRef,
}

/// Info/update response shape.
#[derive(Debug, Serialize)]
pub struct ReviewDetail {
    pub review_id: DbId,
    pub description: String,
    pub initiative: InitiativeRef,
    pub reviewer: EmployeeRef,
    pub given_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat join row backing both response shapes.
#[derive(Debug, FromRow)]
pub struct ReviewJoinRow {
    pub review_id: DbId,
    pub description: String,
    pub initiative_id: DbId,
    pub initiative_title: String,
    pub given_by: DbId,
    pub reviewer_name: String,
    pub given_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ReviewJoinRow> for ReviewSummary {
    fn from(row: ReviewJoinRow) -> Self {
        ReviewSummary {
            review_id: row.review_id,
            description: row.description,
            initiative: InitiativeRef {
                initiative_id: row.initiative_id,
                title: row.initiative_title,
            },
            reviewer: EmployeeRef {
                employee_id: row.given_by,
                employee_name: row.reviewer_name,
            },
        }
    }
}

impl From<ReviewJoinRow> for ReviewDetail {
    fn from(row: ReviewJoinRow) -> Self {
        ReviewDetail {
            review_id: row.review_id,
            description: row.description,
            initiative: InitiativeRef {
                initiative_id: row.initiative_id,
                title: row.initiative_title,
            },
            reviewer: EmployeeRef {
                employee_id: row.given_by,
                employee_name: row.reviewer_name,
            },
            given_at: row.given_at,
            updated_at: row.updated_at,
        }
    }
}
