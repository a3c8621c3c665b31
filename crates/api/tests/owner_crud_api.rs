//! Integration tests for the owner-gated child resources: task logs,
//! reviews, ratings, and subscriptions.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth, token_for};
use sqlx::PgPool;

use initrack_core::types::DbId;
use initrack_db::models::employee::Employee;

/// Seed an admin, two normal users, and one initiative. Returns
/// `(admin, alice, bob, initiative_id)`.
async fn seed_with_initiative(pool: &PgPool) -> (Employee, Employee, Employee, DbId) {
    let admin = common::seed_reference(pool).await;
    let alice = common::create_employee(pool, "Alice", "alice@test.com", 4).await;
    let bob = common::create_employee(pool, "Bob", "bob@test.com", 4).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/initiative/create",
        &token_for(admin.employee_id),
        serde_json::json!({ "title": "Shared", "description": "Has children" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let initiative_id = body_json(response).await["initiative_id"]
        .as_i64()
        .expect("id must be a number");

    (admin, alice, bob, initiative_id)
}

/// Any authenticated employee can log a task; `logged_by` comes from the
/// token, and the reads are open.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_task_log_create_and_open_reads(pool: PgPool) {
    let (_admin, alice, _bob, initiative_id) = seed_with_initiative(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/task-log/create",
        &token_for(alice.employee_id),
        serde_json::json!({ "initiative_id": initiative_id, "description": "Kickoff done" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["creator"]["employee_id"], alice.employee_id);
    assert_eq!(created["initiative"]["initiative_id"], initiative_id);

    let task_id = created["task_id"].as_i64().expect("id must be a number");
    let response = get(app.clone(), &format!("/task-log/info/{task_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        app.clone(),
        &format!("/task-log/all/initiative/{initiative_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().expect("array").len(), 1);

    // Unauthenticated creation is rejected.
    let response = common::post_json(
        app,
        "/task-log/create",
        serde_json::json!({ "initiative_id": initiative_id, "description": "Anon" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Only the logging employee may update a task log. Administrators get no
/// override on owner-gated operations.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_task_log_update_owner_only(pool: PgPool) {
    let (admin, alice, bob, initiative_id) = seed_with_initiative(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/task-log/create",
        &token_for(alice.employee_id),
        serde_json::json!({ "initiative_id": initiative_id, "description": "Draft" }),
    )
    .await;
    let task_id = body_json(response).await["task_id"].as_i64().expect("id");

    let payload = serde_json::json!({ "initiative_id": initiative_id, "description": "Final" });

    for intruder in [bob.employee_id, admin.employee_id] {
        let response = put_json_auth(
            app.clone(),
            &format!("/task-log/update/{task_id}"),
            &token_for(intruder),
            payload.clone(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Not Authorized to perform requested action!");
    }

    let response = put_json_auth(
        app,
        &format!("/task-log/update/{task_id}"),
        &token_for(alice.employee_id),
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["description"], "Final");
    assert_eq!(
        updated["creator"]["employee_id"], alice.employee_id,
        "the logging employee never changes"
    );
}

/// Review delete is gated on the reviewing employee; a successful delete
/// makes the info route 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_delete_owner_only(pool: PgPool) {
    let (_admin, alice, bob, initiative_id) = seed_with_initiative(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/review/create",
        &token_for(alice.employee_id),
        serde_json::json!({ "initiative_id": initiative_id, "description": "Thorough" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let review_id = body_json(response).await["review_id"].as_i64().expect("id");

    let response = delete_auth(
        app.clone(),
        &format!("/review/delete/{review_id}"),
        &token_for(bob.employee_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(
        app.clone(),
        &format!("/review/delete/{review_id}"),
        &token_for(alice.employee_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/review/info/{review_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        format!("Review with id: {review_id} not found!")
    );
}

/// Rating create/update round trip: the point value is replaced wholesale
/// and the rater is stamped from the token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_rating_lifecycle(pool: PgPool) {
    let (_admin, alice, _bob, initiative_id) = seed_with_initiative(&pool).await;
    let app = common::build_test_app(pool);
    let token = token_for(alice.employee_id);

    let response = post_json_auth(
        app.clone(),
        "/rating/create",
        &token,
        serde_json::json!({ "initiative_id": initiative_id, "point": 4 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["point"], 4);
    assert_eq!(created["rater"]["employee_id"], alice.employee_id);

    let rating_id = created["rating_id"].as_i64().expect("id");
    let response = put_json_auth(
        app.clone(),
        &format!("/rating/update/{rating_id}"),
        &token,
        serde_json::json!({ "initiative_id": initiative_id, "point": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["point"], 5);

    let response = get(app, &format!("/rating/all/initiative/{initiative_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let ratings = body_json(response).await;
    assert_eq!(ratings.as_array().expect("array").len(), 1);
    assert_eq!(ratings[0]["point"], 5);
}

/// Subscriptions: create stamps the subscriber, listings are open, and only
/// the subscriber can unsubscribe.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_subscription_lifecycle(pool: PgPool) {
    let (_admin, alice, bob, initiative_id) = seed_with_initiative(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/subscription/create",
        &token_for(alice.employee_id),
        serde_json::json!({ "initiative_id": initiative_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["subscriber"]["employee_id"], alice.employee_id);
    let subscription_id = created["subscription_id"].as_i64().expect("id");

    let response = get(app.clone(), "/subscription/all").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().expect("array").len(), 1);

    let response = delete_auth(
        app.clone(),
        &format!("/subscription/delete/{subscription_id}"),
        &token_for(bob.employee_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(
        app.clone(),
        &format!("/subscription/delete/{subscription_id}"),
        &token_for(alice.employee_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/subscription/all/initiative/{initiative_id}")).await;
    assert!(body_json(response).await.as_array().expect("array").is_empty());
}
