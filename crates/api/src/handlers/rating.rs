//! Handlers for ratings (numeric scores on an initiative).
//!
//! Reads are open. Creation requires authentication and stamps `given_by`
//! from the token. Update and delete are gated on the rating employee;
//! administrators get no override here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::policy::{self, Access};
use initrack_core::types::DbId;
use initrack_db::models::rating::{CreateRating, RatingDetail, RatingSummary};
use initrack_db::repositories::RatingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::state::AppState;

/// GET /rating/all
pub async fn list_ratings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = RatingRepo::list_joined(&state.pool).await?;
    let ratings: Vec<RatingSummary> = rows.into_iter().map(RatingSummary::from).collect();
    Ok(Json(ratings))
}

/// GET /rating/all/initiative/{id}
pub async fn list_ratings_for_initiative(
    State(state): State<AppState>,
    Path(initiative_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = RatingRepo::list_joined_by_initiative(&state.pool, initiative_id).await?;
    let ratings: Vec<RatingSummary> = rows.into_iter().map(RatingSummary::from).collect();
    Ok(Json(ratings))
}

/// GET /rating/info/{id}
pub async fn get_rating(
    State(state): State<AppState>,
    Path(rating_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = RatingRepo::joined_by_id(&state.pool, rating_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rating",
            id: rating_id,
        }))?;

    Ok(Json(RatingDetail::from(row)))
}

/// POST /rating/create
pub async fn create_rating(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Json(input): Json<CreateRating>,
) -> AppResult<impl IntoResponse> {
    let rating = RatingRepo::create(&state.pool, &input, actor.employee_id).await?;

    tracing::info!(
        rating_id = rating.rating_id,
        initiative_id = rating.initiative_id,
        point = rating.point,
        employee_id = actor.employee_id,
        "Rating created",
    );

    let row = RatingRepo::joined_by_id(&state.pool, rating.rating_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rating",
            id: rating.rating_id,
        }))?;

    Ok((StatusCode::CREATED, Json(RatingSummary::from(row))))
}

/// PUT /rating/update/{id}
///
/// Full replace by the rating employee only.
pub async fn update_rating(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Path(rating_id): Path<DbId>,
    Json(input): Json<CreateRating>,
) -> AppResult<impl IntoResponse> {
    let existing = RatingRepo::find_by_id(&state.pool, rating_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rating",
            id: rating_id,
        }))?;

    policy::authorize(
        &actor,
        Access::OwnerOnly {
            owner: existing.given_by,
        },
    )?;

    RatingRepo::update(&state.pool, rating_id, &input).await?;

    tracing::info!(rating_id, employee_id = actor.employee_id, "Rating updated");

    let row = RatingRepo::joined_by_id(&state.pool, rating_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rating",
            id: rating_id,
        }))?;

    Ok(Json(RatingDetail::from(row)))
}

/// DELETE /rating/delete/{id}
pub async fn delete_rating(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Path(rating_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = RatingRepo::find_by_id(&state.pool, rating_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rating",
            id: rating_id,
        }))?;

    policy::authorize(
        &actor,
        Access::OwnerOnly {
            owner: existing.given_by,
        },
    )?;

    RatingRepo::delete(&state.pool, rating_id).await?;

    tracing::info!(rating_id, employee_id = actor.employee_id, "Rating deleted");

    Ok(StatusCode::NO_CONTENT)
}
