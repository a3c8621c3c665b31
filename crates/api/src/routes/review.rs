use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Review routes mounted at `/review`.
///
/// ```text
/// GET    /all                  -> list_reviews
/// GET    /all/initiative/{id}  -> list_reviews_for_initiative
/// GET    /info/{id}            -> get_review
/// POST   /create               -> create_review
/// PUT    /update/{id}          -> update_review
/// DELETE /delete/{id}          -> delete_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(review::list_reviews))
        .route(
            "/all/initiative/{id}",
            get(review::list_reviews_for_initiative),
        )
        .route("/info/{id}", get(review::get_review))
        .route("/create", post(review::create_review))
        .route("/update/{id}", put(review::update_review))
        .route("/delete/{id}", delete(review::delete_review))
}
