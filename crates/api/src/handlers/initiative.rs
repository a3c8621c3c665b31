//! Handlers for initiatives.
//!
//! The listing is open; create, info, update, and delete are admin-only.
//! Update and delete address initiatives by their **status id**, not their
//! primary key, and act on every matching row (see DESIGN.md).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::types::DbId;
use initrack_db::models::initiative::{CreateInitiative, InitiativeDetail, InitiativeSummary};
use initrack_db::repositories::InitiativeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /initiative/all
pub async fn list_initiatives(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = InitiativeRepo::list_summaries(&state.pool).await?;
    let initiatives: Vec<InitiativeSummary> = rows.into_iter().map(InitiativeSummary::from).collect();
    Ok(Json(initiatives))
}

/// POST /initiative/create
///
/// Omitted `initiative_type` and `status_id` fall back to their serde
/// defaults (type 2, status 3). The creator is stamped from the token.
pub async fn create_initiative(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateInitiative>,
) -> AppResult<impl IntoResponse> {
    let initiative = InitiativeRepo::create(&state.pool, &input, admin.employee_id).await?;

    tracing::info!(
        initiative_id = initiative.initiative_id,
        title = %initiative.title,
        employee_id = admin.employee_id,
        "Initiative created",
    );

    let summary = InitiativeRepo::summary_by_id(&state.pool, initiative.initiative_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Initiative",
            id: initiative.initiative_id,
        }))?;

    Ok((StatusCode::CREATED, Json(InitiativeSummary::from(summary))))
}

/// GET /initiative/info/{id}
pub async fn get_initiative(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(initiative_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = InitiativeRepo::detail_by_id(&state.pool, initiative_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Initiative",
            id: initiative_id,
        }))?;

    Ok(Json(InitiativeDetail::from(detail)))
}

/// PUT /initiative/update/{id}
///
/// `{id}` is a **status id**: every initiative currently carrying that
/// status is rewritten with the payload (full replace, defaults applied to
/// omitted fields). 404 when no initiative carries the status.
pub async fn update_initiatives_by_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(status_id): Path<DbId>,
    Json(input): Json<CreateInitiative>,
) -> AppResult<impl IntoResponse> {
    let first_updated =
        InitiativeRepo::update_where_status(&state.pool, status_id, &input, admin.employee_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Initiative",
                id: status_id,
            }))?;

    tracing::info!(
        status_id,
        employee_id = admin.employee_id,
        "Initiatives updated by status",
    );

    let detail = InitiativeRepo::detail_by_id(&state.pool, first_updated)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Initiative",
            id: first_updated,
        }))?;

    Ok(Json(InitiativeDetail::from(detail)))
}

/// DELETE /initiative/delete/{id}
///
/// `{id}` is a **status id**: every initiative currently carrying that
/// status is removed along with its child records. 404 when no initiative
/// carries the status.
pub async fn delete_initiatives_by_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(status_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = InitiativeRepo::delete_where_status(&state.pool, status_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Initiative",
            id: status_id,
        }));
    }

    tracing::info!(
        status_id,
        employee_id = admin.employee_id,
        "Initiatives deleted by status",
    );

    Ok(StatusCode::NO_CONTENT)
}
