//! Handlers for employee registration and profiles.
//!
//! Registration and the profile listing are open (there is no separate
//! signup surface), `/me` requires a token, and deletion is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::types::DbId;
use initrack_db::models::employee::{CreateEmployee, EmployeeOut, EmployeeProfile};
use initrack_db::repositories::EmployeeRepo;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /employee/all
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = EmployeeRepo::list_profiles(&state.pool).await?;
    let profiles: Vec<EmployeeProfile> = rows.into_iter().map(EmployeeProfile::from).collect();
    Ok(Json(profiles))
}

/// POST /employee/create
///
/// Register a new employee. The email must be unique; duplicates are
/// rejected with 403. The plaintext password is hashed here and never
/// reaches the persistence layer.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if EmployeeRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Employee Already Exists !!!".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let employee = EmployeeRepo::create(&state.pool, &input, &password_hash).await?;

    tracing::info!(
        employee_id = employee.employee_id,
        email = %employee.email,
        employee_type_id = employee.employee_type_id,
        "Employee registered",
    );

    Ok((StatusCode::CREATED, Json(EmployeeOut::from(employee))))
}

/// GET /employee/me
pub async fn get_current_employee(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let row = EmployeeRepo::profile_by_id(&state.pool, actor.employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: actor.employee_id,
        }))?;

    Ok(Json(EmployeeProfile::from(row)))
}

/// GET /employee/info/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = EmployeeRepo::profile_by_id(&state.pool, employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        }))?;

    Ok(Json(EmployeeProfile::from(row)))
}

/// DELETE /employee/delete/{id}
///
/// Removes the employee and everything they own: their initiatives (with all
/// child records), plus status codes and initiative types they authored and
/// the initiatives referencing those.
pub async fn delete_employee(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EmployeeRepo::delete(&state.pool, employee_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        }));
    }

    tracing::info!(
        deleted_employee_id = employee_id,
        employee_id = admin.employee_id,
        "Employee deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
