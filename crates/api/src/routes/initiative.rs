use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::initiative;
use crate::state::AppState;

/// Initiative routes mounted at `/initiative`.
///
/// `update` and `delete` take a **status id**, not an initiative id, and act
/// on every initiative carrying that status.
///
/// ```text
/// GET    /all          -> list_initiatives
/// POST   /create       -> create_initiative
/// GET    /info/{id}    -> get_initiative            (initiative id)
/// PUT    /update/{id}  -> update_initiatives_by_status  (status id)
/// DELETE /delete/{id}  -> delete_initiatives_by_status  (status id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(initiative::list_initiatives))
        .route("/create", post(initiative::create_initiative))
        .route("/info/{id}", get(initiative::get_initiative))
        .route("/update/{id}", put(initiative::update_initiatives_by_status))
        .route(
            "/delete/{id}",
            delete(initiative::delete_initiatives_by_status),
        )
}
