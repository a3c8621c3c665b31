//! Handlers for status codes. The listing is open; everything else is
//! admin-only. Creation stamps both `created_by` and `updated_by` from the
//! authenticated administrator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::types::DbId;
use initrack_db::models::status_code::{CreateStatusCode, StatusCodeDetail, StatusCodeSummary};
use initrack_db::repositories::StatusCodeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /status-code/all
pub async fn list_status_codes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = StatusCodeRepo::list(&state.pool).await?;
    let codes: Vec<StatusCodeSummary> = rows.into_iter().map(StatusCodeSummary::from).collect();
    Ok(Json(codes))
}

/// POST /status-code/create
pub async fn create_status_code(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateStatusCode>,
) -> AppResult<impl IntoResponse> {
    let status_code = StatusCodeRepo::create(&state.pool, &input, admin.employee_id).await?;

    tracing::info!(
        status_id = status_code.status_id,
        employee_id = admin.employee_id,
        "Status code created",
    );

    Ok((
        StatusCode::CREATED,
        Json(StatusCodeSummary::from(status_code)),
    ))
}

/// GET /status-code/info/{id}
pub async fn get_status_code(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(status_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = StatusCodeRepo::detail_by_id(&state.pool, status_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Status Code",
            id: status_id,
        }))?;

    Ok(Json(StatusCodeDetail::from(detail)))
}

/// PUT /status-code/update/{id}
///
/// Full replace: the payload is the same shape as create. `updated_by` and
/// `updated_at` move to the caller and now; `created_by` is untouched.
pub async fn update_status_code(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(status_id): Path<DbId>,
    Json(input): Json<CreateStatusCode>,
) -> AppResult<impl IntoResponse> {
    let updated = StatusCodeRepo::update(&state.pool, status_id, &input, admin.employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Status Code",
            id: status_id,
        }))?;

    tracing::info!(
        status_id = updated.status_id,
        employee_id = admin.employee_id,
        "Status code updated",
    );

    let detail = StatusCodeRepo::detail_by_id(&state.pool, status_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Status Code",
            id: status_id,
        }))?;

    Ok(Json(StatusCodeDetail::from(detail)))
}

/// DELETE /status-code/delete/{id}
///
/// Removes the status code along with every initiative carrying it and those
/// initiatives' child records.
pub async fn delete_status_code(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(status_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StatusCodeRepo::delete(&state.pool, status_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Status Code",
            id: status_id,
        }));
    }

    tracing::info!(
        status_id,
        employee_id = admin.employee_id,
        "Status code deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
