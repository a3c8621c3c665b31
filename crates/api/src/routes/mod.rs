pub mod auth;
pub mod employee;
pub mod employee_type;
pub mod health;
pub mod initiative;
pub mod initiative_type;
pub mod rating;
pub mod review;
pub mod status_code;
pub mod subscription;
pub mod task_log;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the root, next to `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /login                                login (public)
///
/// /employee-type/all                    list roles (admin only)
/// /employee-type/create                 create role
/// /employee-type/info/{id}              get role
/// /employee-type/update/{id}            update role
/// /employee-type/delete/{id}            delete role (cascades)
///
/// /employee/all                         list profiles (public)
/// /employee/create                      register (public)
/// /employee/me                          authenticated profile
/// /employee/info/{id}                   get profile (public)
/// /employee/delete/{id}                 delete employee (admin, cascades)
///
/// /status-code/all                      list (public)
/// /status-code/create|info|update|delete   admin only
///
/// /initiative-type/all                  list (public)
/// /initiative-type/create|info|update|delete   admin only
///
/// /initiative/all                       list (public)
/// /initiative/create                    create (admin)
/// /initiative/info/{id}                 get by initiative id (admin)
/// /initiative/update/{id}               update by STATUS id (admin)
/// /initiative/delete/{id}               delete by STATUS id (admin)
///
/// /task-log/all                         list (public)
/// /task-log/all/initiative/{id}         list for initiative (public)
/// /task-log/info/{id}                   get (public)
/// /task-log/create                      create (authenticated)
/// /task-log/update|delete/{id}          logging employee only
///
/// /review/...                           same shape as /task-log
/// /rating/...                           same shape as /task-log
///
/// /subscription/all                     list (public)
/// /subscription/all/initiative/{id}     list for initiative (public)
/// /subscription/create                  subscribe (authenticated)
/// /subscription/delete/{id}             unsubscribe (subscriber only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Login (public).
        .merge(auth::router())
        // Role management (admin only, including the listing).
        .nest("/employee-type", employee_type::router())
        // Registration and profiles.
        .nest("/employee", employee::router())
        // Status codes for initiatives.
        .nest("/status-code", status_code::router())
        // Initiative categories.
        .nest("/initiative-type", initiative_type::router())
        // Initiatives.
        .nest("/initiative", initiative::router())
        // Progress notes on initiatives.
        .nest("/task-log", task_log::router())
        // Written feedback on initiatives.
        .nest("/review", review::router())
        // Numeric scores on initiatives.
        .nest("/rating", rating::router())
        // Followers of initiatives.
        .nest("/subscription", subscription::router())
}
