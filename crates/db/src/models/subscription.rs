//! Subscription model and DTOs. A follower relationship between an employee
//! and an initiative; immutable after creation.

use initrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::employee::EmployeeRef;
use super::initiative::InitiativeRef;

/// Full row from the `subscription` table.
#[derive(Debug, Clone, FromRow)]
pub struct Subscription {
    pub subscription_id: DbId,
    pub subscribed_by: DbId,
    pub initiative_id: DbId,
    pub subscribed_at: Timestamp,
}

/// Create payload. `subscribed_by` is stamped from the authenticated caller.
#[derive(Debug, Deserialize)]
pub struct CreateSubscription {
    pub initiative_id: DbId,
}

/// Response shape with the initiative and subscriber embedded.
#[derive(Debug, Serialize)]
pub struct SubscriptionSummary {
    pub subscription_id: DbId,
    pub initiative: InitiativeRef,
    pub subscriber: EmployeeRef,
    pub subscribed_at: Timestamp,
}

/// Flat join row backing [`SubscriptionSummary`].
#[derive(Debug, FromRow)]
pub struct SubscriptionJoinRow {
    pub subscription_id: DbId,
    pub initiative_id: DbId,
    pub initiative_title: String,
    pub subscribed_by: DbId,
    pub subscriber_name: String,
    pub subscribed_at: Timestamp,
}

impl From<SubscriptionJoinRow> for SubscriptionSummary {
    fn from(row: SubscriptionJoinRow) -> Self {
        SubscriptionSummary {
            subscription_id: row.subscription_id,
            initiative: InitiativeRef {
                initiative_id: row.initiative_id,
                title: row.initiative_title,
            },
            subscriber: EmployeeRef {
                employee_id: row.subscribed_by,
                employee_name: row.subscriber_name,
            },
            subscribed_at: row.subscribed_at,
        }
    }
}
