//! Handlers for initiative types (categories). The listing is open;
//! everything else is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::types::DbId;
use initrack_db::models::initiative_type::{
    CreateInitiativeType, InitiativeTypeDetail, InitiativeTypeSummary,
};
use initrack_db::repositories::InitiativeTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /initiative-type/all
pub async fn list_initiative_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = InitiativeTypeRepo::list(&state.pool).await?;
    let types: Vec<InitiativeTypeSummary> =
        rows.into_iter().map(InitiativeTypeSummary::from).collect();
    Ok(Json(types))
}

/// POST /initiative-type/create
pub async fn create_initiative_type(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateInitiativeType>,
) -> AppResult<impl IntoResponse> {
    let initiative_type = InitiativeTypeRepo::create(&state.pool, &input, admin.employee_id).await?;

    tracing::info!(
        initiative_type_id = initiative_type.initiative_type_id,
        name = %initiative_type.name,
        employee_id = admin.employee_id,
        "Initiative type created",
    );

    Ok((
        StatusCode::CREATED,
        Json(InitiativeTypeSummary::from(initiative_type)),
    ))
}

/// GET /initiative-type/info/{id}
pub async fn get_initiative_type(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(type_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = InitiativeTypeRepo::detail_by_id(&state.pool, type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Initiative Type",
            id: type_id,
        }))?;

    Ok(Json(InitiativeTypeDetail::from(detail)))
}

/// PUT /initiative-type/update/{id}
///
/// Full replace: the payload is the same shape as create.
pub async fn update_initiative_type(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(type_id): Path<DbId>,
    Json(input): Json<CreateInitiativeType>,
) -> AppResult<impl IntoResponse> {
    InitiativeTypeRepo::update(&state.pool, type_id, &input, admin.employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Initiative Type",
            id: type_id,
        }))?;

    tracing::info!(
        initiative_type_id = type_id,
        employee_id = admin.employee_id,
        "Initiative type updated",
    );

    let detail = InitiativeTypeRepo::detail_by_id(&state.pool, type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Initiative Type",
            id: type_id,
        }))?;

    Ok(Json(InitiativeTypeDetail::from(detail)))
}

/// DELETE /initiative-type/delete/{id}
///
/// Removes the type along with every initiative categorized under it and
/// those initiatives' child records.
pub async fn delete_initiative_type(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(type_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = InitiativeTypeRepo::delete(&state.pool, type_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Initiative Type",
            id: type_id,
        }));
    }

    tracing::info!(
        initiative_type_id = type_id,
        employee_id = admin.employee_id,
        "Initiative type deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
