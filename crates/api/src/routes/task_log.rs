use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::task_log;
use crate::state::AppState;

/// Task log routes mounted at `/task-log`.
///
/// ```text
/// GET    /all                  -> list_task_logs
/// GET    /all/initiative/{id}  -> list_task_logs_for_initiative
/// GET    /info/{id}            -> get_task_log
/// POST   /create               -> create_task_log
/// PUT    /update/{id}          -> update_task_log
/// DELETE /delete/{id}          -> delete_task_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(task_log::list_task_logs))
        .route(
            "/all/initiative/{id}",
            get(task_log::list_task_logs_for_initiative),
        )
        .route("/info/{id}", get(task_log::get_task_log))
        .route("/create", post(task_log::create_task_log))
        .route("/update/{id}", put(task_log::update_task_log))
        .route("/delete/{id}", delete(task_log::delete_task_log))
}
