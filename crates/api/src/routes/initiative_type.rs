use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::initiative_type;
use crate::state::AppState;

/// Initiative type routes mounted at `/initiative-type`.
///
/// ```text
/// GET    /all          -> list_initiative_types
/// POST   /create       -> create_initiative_type
/// GET    /info/{id}    -> get_initiative_type
/// PUT    /update/{id}  -> update_initiative_type
/// DELETE /delete/{id}  -> delete_initiative_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(initiative_type::list_initiative_types))
        .route("/create", post(initiative_type::create_initiative_type))
        .route("/info/{id}", get(initiative_type::get_initiative_type))
        .route("/update/{id}", put(initiative_type::update_initiative_type))
        .route(
            "/delete/{id}",
            delete(initiative_type::delete_initiative_type),
        )
}
