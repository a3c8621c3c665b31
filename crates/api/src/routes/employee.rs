use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Employee routes mounted at `/employee`.
///
/// ```text
/// GET    /all          -> list_employees
/// POST   /create       -> create_employee
/// GET    /me           -> get_current_employee
/// GET    /info/{id}    -> get_employee
/// DELETE /delete/{id}  -> delete_employee
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(employee::list_employees))
        .route("/create", post(employee::create_employee))
        .route("/me", get(employee::get_current_employee))
        .route("/info/{id}", get(employee::get_employee))
        .route("/delete/{id}", delete(employee::delete_employee))
}
