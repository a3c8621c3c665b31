//! Handlers for subscriptions (an employee following an initiative).
//!
//! Listings are open. Creation requires authentication and stamps
//! `subscribed_by` from the token. Unsubscribing is gated on the subscribing
//! employee. Subscriptions carry no payload, so there is no update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::policy::{self, Access};
use initrack_core::types::DbId;
use initrack_db::models::subscription::{CreateSubscription, SubscriptionSummary};
use initrack_db::repositories::SubscriptionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::state::AppState;

/// GET /subscription/all
pub async fn list_subscriptions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = SubscriptionRepo::list_joined(&state.pool).await?;
    let subs: Vec<SubscriptionSummary> = rows.into_iter().map(SubscriptionSummary::from).collect();
    Ok(Json(subs))
}

/// GET /subscription/all/initiative/{id}
pub async fn list_subscriptions_for_initiative(
    State(state): State<AppState>,
    Path(initiative_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = SubscriptionRepo::list_joined_by_initiative(&state.pool, initiative_id).await?;
    let subs: Vec<SubscriptionSummary> = rows.into_iter().map(SubscriptionSummary::from).collect();
    Ok(Json(subs))
}

/// POST /subscription/create
pub async fn create_subscription(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Json(input): Json<CreateSubscription>,
) -> AppResult<impl IntoResponse> {
    let subscription =
        SubscriptionRepo::create(&state.pool, input.initiative_id, actor.employee_id).await?;

    tracing::info!(
        subscription_id = subscription.subscription_id,
        initiative_id = subscription.initiative_id,
        employee_id = actor.employee_id,
        "Subscription created",
    );

    let row = SubscriptionRepo::joined_by_id(&state.pool, subscription.subscription_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subscription",
            id: subscription.subscription_id,
        }))?;

    Ok((StatusCode::CREATED, Json(SubscriptionSummary::from(row))))
}

/// DELETE /subscription/delete/{id}
pub async fn delete_subscription(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Path(subscription_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = SubscriptionRepo::find_by_id(&state.pool, subscription_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subscription",
            id: subscription_id,
        }))?;

    policy::authorize(
        &actor,
        Access::OwnerOnly {
            owner: existing.subscribed_by,
        },
    )?;

    SubscriptionRepo::delete(&state.pool, subscription_id).await?;

    tracing::info!(
        subscription_id,
        employee_id = actor.employee_id,
        "Subscription deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
