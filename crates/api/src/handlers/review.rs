//! Handlers for reviews (written feedback on an initiative).
//!
//! Reads are open. Creation requires authentication and stamps `given_by`
//! from the token. Update and delete are gated on the reviewing employee;
//! administrators get no override here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::policy::{self, Access};
use initrack_core::types::DbId;
use initrack_db::models::review::{CreateReview, ReviewDetail, ReviewSummary};
use initrack_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::state::AppState;

/// GET /review/all
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = ReviewRepo::list_joined(&state.pool).await?;
    let reviews: Vec<ReviewSummary> = rows.into_iter().map(ReviewSummary::from).collect();
    Ok(Json(reviews))
}

/// GET /review/all/initiative/{id}
pub async fn list_reviews_for_initiative(
    State(state): State<AppState>,
    Path(initiative_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = ReviewRepo::list_joined_by_initiative(&state.pool, initiative_id).await?;
    let reviews: Vec<ReviewSummary> = rows.into_iter().map(ReviewSummary::from).collect();
    Ok(Json(reviews))
}

/// GET /review/info/{id}
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ReviewRepo::joined_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;

    Ok(Json(ReviewDetail::from(row)))
}

/// POST /review/create
pub async fn create_review(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::create(&state.pool, &input, actor.employee_id).await?;

    tracing::info!(
        review_id = review.review_id,
        initiative_id = review.initiative_id,
        employee_id = actor.employee_id,
        "Review created",
    );

    let row = ReviewRepo::joined_by_id(&state.pool, review.review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review.review_id,
        }))?;

    Ok((StatusCode::CREATED, Json(ReviewSummary::from(row))))
}

/// PUT /review/update/{id}
///
/// Full replace by the reviewing employee only. `given_by` and `given_at`
/// never change; `updated_at` moves to now.
pub async fn update_review(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    let existing = ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;

    policy::authorize(
        &actor,
        Access::OwnerOnly {
            owner: existing.given_by,
        },
    )?;

    ReviewRepo::update(&state.pool, review_id, &input).await?;

    tracing::info!(review_id, employee_id = actor.employee_id, "Review updated");

    let row = ReviewRepo::joined_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;

    Ok(Json(ReviewDetail::from(row)))
}

/// DELETE /review/delete/{id}
pub async fn delete_review(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;

    policy::authorize(
        &actor,
        Access::OwnerOnly {
            owner: existing.given_by,
        },
    )?;

    ReviewRepo::delete(&state.pool, review_id).await?;

    tracing::info!(review_id, employee_id = actor.employee_id, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}
