use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::employee_type;
use crate::state::AppState;

/// Employee type routes mounted at `/employee-type`.
///
/// ```text
/// GET    /all          -> list_employee_types
/// POST   /create       -> create_employee_type
/// GET    /info/{id}    -> get_employee_type
/// PUT    /update/{id}  -> update_employee_type
/// DELETE /delete/{id}  -> delete_employee_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(employee_type::list_employee_types))
        .route("/create", post(employee_type::create_employee_type))
        .route("/info/{id}", get(employee_type::get_employee_type))
        .route("/update/{id}", put(employee_type::update_employee_type))
        .route("/delete/{id}", delete(employee_type::delete_employee_type))
}
