use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::rating;
use crate::state::AppState;

/// Rating routes mounted at `/rating`.
///
/// ```text
/// GET    /all                  -> list_ratings
/// GET    /all/initiative/{id}  -> list_ratings_for_initiative
/// GET    /info/{id}            -> get_rating
/// POST   /create               -> create_rating
/// PUT    /update/{id}          -> update_rating
/// DELETE /delete/{id}          -> delete_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(rating::list_ratings))
        .route(
            "/all/initiative/{id}",
            get(rating::list_ratings_for_initiative),
        )
        .route("/info/{id}", get(rating::get_rating))
        .route("/create", post(rating::create_rating))
        .route("/update/{id}", put(rating::update_rating))
        .route("/delete/{id}", delete(rating::delete_rating))
}
