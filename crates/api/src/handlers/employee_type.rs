//! Handlers for employee type (role) management. Every route here is
//! admin-only, including the listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::types::DbId;
use initrack_db::models::employee_type::CreateEmployeeType;
use initrack_db::repositories::EmployeeTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /employee-type/all
pub async fn list_employee_types(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let types = EmployeeTypeRepo::list(&state.pool).await?;
    Ok(Json(types))
}

/// POST /employee-type/create
pub async fn create_employee_type(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeType>,
) -> AppResult<impl IntoResponse> {
    let employee_type = EmployeeTypeRepo::create(&state.pool, &input).await?;

    tracing::info!(
        employee_type_id = employee_type.employee_type_id,
        role_name = %employee_type.role_name,
        employee_id = admin.employee_id,
        "Employee type created",
    );

    Ok((StatusCode::CREATED, Json(employee_type)))
}

/// GET /employee-type/info/{id}
pub async fn get_employee_type(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(type_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee_type = EmployeeTypeRepo::find_by_id(&state.pool, type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee Type",
            id: type_id,
        }))?;

    Ok(Json(employee_type))
}

/// PUT /employee-type/update/{id}
pub async fn update_employee_type(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(type_id): Path<DbId>,
    Json(input): Json<CreateEmployeeType>,
) -> AppResult<impl IntoResponse> {
    let employee_type = EmployeeTypeRepo::update(&state.pool, type_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee Type",
            id: type_id,
        }))?;

    tracing::info!(
        employee_type_id = type_id,
        employee_id = admin.employee_id,
        "Employee type updated",
    );

    Ok(Json(employee_type))
}

/// DELETE /employee-type/delete/{id}
///
/// Removes the role and everything it transitively owns: employees of this
/// type, their initiatives, and all child records of those initiatives.
pub async fn delete_employee_type(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(type_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EmployeeTypeRepo::delete(&state.pool, type_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Employee Type",
            id: type_id,
        }));
    }

    tracing::info!(
        employee_type_id = type_id,
        employee_id = admin.employee_id,
        "Employee type deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
