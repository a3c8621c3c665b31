use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::status_code;
use crate::state::AppState;

/// Status code routes mounted at `/status-code`.
///
/// ```text
/// GET    /all          -> list_status_codes
/// POST   /create       -> create_status_code
/// GET    /info/{id}    -> get_status_code
/// PUT    /update/{id}  -> update_status_code
/// DELETE /delete/{id}  -> delete_status_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(status_code::list_status_codes))
        .route("/create", post(status_code::create_status_code))
        .route("/info/{id}", get(status_code::get_status_code))
        .route("/update/{id}", put(status_code::update_status_code))
        .route("/delete/{id}", delete(status_code::delete_status_code))
}
