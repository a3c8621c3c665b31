//! HTTP-level integration tests for login, token handling, and the
//! authenticated identity endpoint.

mod common;

use axum::http::header::WWW_AUTHENTICATE;
use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, token_for};
use sqlx::PgPool;

use initrack_api::auth::jwt::validate_token;

/// Successful login returns 200 with a bearer access token carrying the
/// employee id in its claims.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "admin@test.com",
        "password": common::TEST_PASSWORD,
    });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["token_type"], "bearer");

    let token = json["access_token"].as_str().expect("token must be a string");
    let claims =
        validate_token(token, &common::test_config().jwt).expect("token must validate");
    assert_eq!(claims.employee_id, admin.employee_id);
}

/// Login with an incorrect password returns 403 with the credentials message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "admin@test.com",
        "password": "incorrect_password",
    });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid Credentials !!!");
}

/// Login with an unknown email returns the same 403 as a wrong password, so
/// registered addresses cannot be probed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ghost@test.com",
        "password": "whatever",
    });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid Credentials !!!");
}

/// `/employee/me` returns the caller's profile with the role embedded.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_caller_profile(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);

    let token = token_for(admin.employee_id);
    let response = get_auth(app, "/employee/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["employee_id"], admin.employee_id);
    assert_eq!(json["email"], "admin@test.com");
    assert_eq!(json["employee_type"]["role_name"], "Administrator");
}

/// A protected route without a token returns 401 with a `WWW-Authenticate:
/// Bearer` challenge.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_token_gets_bearer_challenge(pool: PgPool) {
    common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/employee/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get(WWW_AUTHENTICATE)
            .expect("challenge header must be present"),
        "Bearer"
    );
}

/// A syntactically broken token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_garbage_token_rejected(pool: PgPool) {
    common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/employee/me", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Could not validate credentials");
}

/// A valid token for an employee that has since been deleted stops working,
/// because the employee row is re-read on every request.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_for_deleted_employee_rejected(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let victim = common::create_employee(&pool, "Victim", "victim@test.com", 4).await;
    let token = token_for(victim.employee_id);

    let app = common::build_test_app(pool.clone());
    let admin_token = token_for(admin.employee_id);
    let response = common::delete_auth(
        app.clone(),
        &format!("/employee/delete/{}", victim.employee_id),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, "/employee/me", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
