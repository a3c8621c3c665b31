use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::subscription;
use crate::state::AppState;

/// Subscription routes mounted at `/subscription`. Subscriptions carry no
/// payload, so there is no update route.
///
/// ```text
/// GET    /all                  -> list_subscriptions
/// GET    /all/initiative/{id}  -> list_subscriptions_for_initiative
/// POST   /create               -> create_subscription
/// DELETE /delete/{id}          -> delete_subscription
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(subscription::list_subscriptions))
        .route(
            "/all/initiative/{id}",
            get(subscription::list_subscriptions_for_initiative),
        )
        .route("/create", post(subscription::create_subscription))
        .route("/delete/{id}", delete(subscription::delete_subscription))
}
