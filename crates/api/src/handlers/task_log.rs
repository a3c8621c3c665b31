//! Handlers for task logs (progress notes on an initiative).
//!
//! Reads are open. Creation requires authentication and stamps `logged_by`
//! from the token. Update and delete are gated on the logging employee;
//! administrators get no override here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_core::policy::{self, Access};
use initrack_core::types::DbId;
use initrack_db::models::task_log::{CreateTaskLog, TaskLogDetail, TaskLogSummary};
use initrack_db::repositories::TaskLogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::state::AppState;

/// GET /task-log/all
pub async fn list_task_logs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = TaskLogRepo::list_joined(&state.pool).await?;
    let logs: Vec<TaskLogSummary> = rows.into_iter().map(TaskLogSummary::from).collect();
    Ok(Json(logs))
}

/// GET /task-log/all/initiative/{id}
pub async fn list_task_logs_for_initiative(
    State(state): State<AppState>,
    Path(initiative_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rows = TaskLogRepo::list_joined_by_initiative(&state.pool, initiative_id).await?;
    let logs: Vec<TaskLogSummary> = rows.into_iter().map(TaskLogSummary::from).collect();
    Ok(Json(logs))
}

/// GET /task-log/info/{id}
pub async fn get_task_log(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = TaskLogRepo::joined_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task Log",
            id: task_id,
        }))?;

    Ok(Json(TaskLogDetail::from(row)))
}

/// POST /task-log/create
pub async fn create_task_log(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Json(input): Json<CreateTaskLog>,
) -> AppResult<impl IntoResponse> {
    let task_log = TaskLogRepo::create(&state.pool, &input, actor.employee_id).await?;

    tracing::info!(
        task_id = task_log.task_id,
        initiative_id = task_log.initiative_id,
        employee_id = actor.employee_id,
        "Task log created",
    );

    let row = TaskLogRepo::joined_by_id(&state.pool, task_log.task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task Log",
            id: task_log.task_id,
        }))?;

    Ok((StatusCode::CREATED, Json(TaskLogSummary::from(row))))
}

/// PUT /task-log/update/{id}
///
/// Full replace by the logging employee only. `logged_by` and `logged_at`
/// never change; `updated_at` moves to now.
pub async fn update_task_log(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
    Json(input): Json<CreateTaskLog>,
) -> AppResult<impl IntoResponse> {
    let existing = TaskLogRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task Log",
            id: task_id,
        }))?;

    policy::authorize(
        &actor,
        Access::OwnerOnly {
            owner: existing.logged_by,
        },
    )?;

    TaskLogRepo::update(&state.pool, task_id, &input).await?;

    tracing::info!(task_id, employee_id = actor.employee_id, "Task log updated");

    let row = TaskLogRepo::joined_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task Log",
            id: task_id,
        }))?;

    Ok(Json(TaskLogDetail::from(row)))
}

/// DELETE /task-log/delete/{id}
pub async fn delete_task_log(
    AuthEmployee(actor): AuthEmployee,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = TaskLogRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task Log",
            id: task_id,
        }))?;

    policy::authorize(
        &actor,
        Access::OwnerOnly {
            owner: existing.logged_by,
        },
    )?;

    TaskLogRepo::delete(&state.pool, task_id).await?;

    tracing::info!(task_id, employee_id = actor.employee_id, "Task log deleted");

    Ok(StatusCode::NO_CONTENT)
}
