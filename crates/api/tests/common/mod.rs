//! Shared test harness: app construction, seed helpers, and request helpers.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use initrack_api::app::build_app;
use initrack_api::auth::jwt::{generate_access_token, JwtConfig};
use initrack_api::auth::password::hash_password;
use initrack_api::config::ServerConfig;
use initrack_api::state::AppState;
use initrack_core::types::DbId;
use initrack_db::models::employee::{CreateEmployee, Employee};
use initrack_db::models::initiative_type::CreateInitiativeType;
use initrack_db::models::status_code::CreateStatusCode;
use initrack_db::repositories::{EmployeeRepo, InitiativeTypeRepo, StatusCodeRepo};

/// Plaintext password used for every test employee.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 30,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(AppState::new(pool, test_config()))
}

/// Mint an access token for the given employee using the test JWT config.
pub fn token_for(employee_id: DbId) -> String {
    generate_access_token(employee_id, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create a test employee directly in the database with [`TEST_PASSWORD`].
pub async fn create_employee(
    pool: &PgPool,
    name: &str,
    email: &str,
    employee_type_id: DbId,
) -> Employee {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = CreateEmployee {
        employee_name: name.to_string(),
        employee_type_id,
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    EmployeeRepo::create(pool, &input, &hashed)
        .await
        .expect("employee creation should succeed")
}

/// Seed the reference data most endpoint tests need: one administrator plus
/// enough initiative types and status codes that the create-time defaults
/// (type 2, status 3) resolve to real rows.
///
/// Returns the administrator. Types end up as 1 "Hackathon", 2 "Meetup";
/// statuses as 1 "Proposed", 2 "Approved", 3 "In Discussion".
pub async fn seed_reference(pool: &PgPool) -> Employee {
    let admin = create_employee(pool, "Admin", "admin@test.com", 1).await;

    for (name, description) in [
        ("Hackathon", "Time-boxed build event"),
        ("Meetup", "Recurring community gathering"),
    ] {
        InitiativeTypeRepo::create(
            pool,
            &CreateInitiativeType {
                name: name.to_string(),
                description: description.to_string(),
            },
            admin.employee_id,
        )
        .await
        .expect("initiative type seed should succeed");
    }

    for description in ["Proposed", "Approved", "In Discussion"] {
        StatusCodeRepo::create(
            pool,
            &CreateStatusCode {
                description: description.to_string(),
            },
            admin.employee_id,
        )
        .await
        .expect("status code seed should succeed");
    }

    admin
}

// ---------------------------------------------------------------------------
// Request helpers (tower::oneshot against the in-memory router)
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Send a PUT request with a JSON body and a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
