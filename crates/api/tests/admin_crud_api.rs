//! Integration tests for the admin-gated reference entities (employee types,
//! status codes, initiative types) and for initiatives, including the
//! status-addressed update/delete behavior.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, token_for};
use sqlx::PgPool;

use initrack_db::repositories::InitiativeRepo;

// ---------------------------------------------------------------------------
// Authorization matrix
// ---------------------------------------------------------------------------

/// The employee-type listing is admin-only, unlike the other listings.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_employee_type_listing_is_admin_only(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let plain = common::create_employee(&pool, "Plain", "plain@test.com", 4).await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/employee-type/all").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app.clone(), "/employee-type/all", &token_for(plain.employee_id)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/employee-type/all", &token_for(admin.employee_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().expect("array").len(), 4, "seeded roles");
}

/// Status code and initiative type listings are public; their mutating
/// routes reject non-administrators.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reference_listings_public_but_writes_admin_only(pool: PgPool) {
    common::seed_reference(&pool).await;
    let plain = common::create_employee(&pool, "Plain", "plain@test.com", 4).await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/status-code/all").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().expect("array").len(), 3);

    let response = get(app.clone(), "/initiative-type/all").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().expect("array").len(), 2);

    let token = token_for(plain.employee_id);
    let response = post_json_auth(
        app.clone(),
        "/status-code/create",
        &token,
        serde_json::json!({ "description": "Rejected" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        app.clone(),
        "/initiative-type/update/1",
        &token,
        serde_json::json!({ "name": "Nope", "description": "Nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app, "/status-code/delete/1", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Reference entity lifecycle
// ---------------------------------------------------------------------------

/// Status code create/info/update round trip, with audit fields tracked.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_code_lifecycle(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);
    let token = token_for(admin.employee_id);

    let response = post_json_auth(
        app.clone(),
        "/status-code/create",
        &token,
        serde_json::json!({ "description": "On Hold" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let status_id = created["status_id"].as_i64().expect("id must be a number");
    assert_eq!(created["description"], "On Hold");

    let response = get_auth(app.clone(), &format!("/status-code/info/{status_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["creator"]["employee_id"], admin.employee_id);
    assert_eq!(detail["updater"]["employee_id"], admin.employee_id);

    let response = put_json_auth(
        app.clone(),
        &format!("/status-code/update/{status_id}"),
        &token,
        serde_json::json!({ "description": "Paused" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["description"], "Paused");

    let response = get_auth(app, "/status-code/info/999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting an initiative type removes the initiatives categorized under it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_initiative_type_delete_cascades(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = token_for(admin.employee_id);

    let response = post_json_auth(
        app.clone(),
        "/initiative/create",
        &token,
        serde_json::json!({
            "title": "Categorized",
            "description": "Lives under type 2",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let initiative_id = body_json(response).await["initiative_id"]
        .as_i64()
        .expect("id must be a number");

    let response = delete_auth(app, "/initiative-type/delete/2", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let gone = InitiativeRepo::detail_by_id(&pool, initiative_id)
        .await
        .expect("lookup should succeed");
    assert!(gone.is_none(), "initiatives of the deleted type must go too");
}

// ---------------------------------------------------------------------------
// Initiatives
// ---------------------------------------------------------------------------

/// Creating an initiative without type/status falls back to type 2
/// ("Meetup") and status 3 ("In Discussion").
#[sqlx::test(migrations = "../db/migrations")]
async fn test_initiative_create_defaults(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let app = common::build_test_app(pool);
    let token = token_for(admin.employee_id);

    let response = post_json_auth(
        app.clone(),
        "/initiative/create",
        &token,
        serde_json::json!({
            "title": "Summer Meetup",
            "description": "Quarterly community event",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let summary = body_json(response).await;
    assert_eq!(summary["init_type"]["name"], "Meetup");
    assert_eq!(summary["status"]["description"], "In Discussion");

    let initiative_id = summary["initiative_id"].as_i64().expect("id");
    let response = get_auth(app, &format!("/initiative/info/{initiative_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["initiative_type"], 2);
    assert_eq!(detail["status_id"], 3);
    assert_eq!(detail["creator"]["employee_id"], admin.employee_id);
}

/// The initiative listing is public; create and info are admin-only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_initiative_read_gates(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let plain = common::create_employee(&pool, "Plain", "plain@test.com", 4).await;
    let app = common::build_test_app(pool);
    let admin_token = token_for(admin.employee_id);

    let response = post_json_auth(
        app.clone(),
        "/initiative/create",
        &admin_token,
        serde_json::json!({ "title": "Visible", "description": "In the listing" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let initiative_id = body_json(response).await["initiative_id"].as_i64().expect("id");

    let response = get(app.clone(), "/initiative/all").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().expect("array").len(), 1);

    let response = get_auth(
        app.clone(),
        &format!("/initiative/info/{initiative_id}"),
        &token_for(plain.employee_id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        app,
        "/initiative/create",
        &token_for(plain.employee_id),
        serde_json::json!({ "title": "Denied", "description": "Non-admin" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// `PUT /initiative/update/{id}` addresses rows by status id and rewrites
/// every match, resetting omitted fields to their defaults.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_initiative_update_by_status(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = token_for(admin.employee_id);

    // Two initiatives on status 1, one on the default status 3.
    for (title, status) in [("First", 1), ("Second", 1), ("Untouched", 3)] {
        let response = post_json_auth(
            app.clone(),
            "/initiative/create",
            &token,
            serde_json::json!({
                "title": title,
                "description": "Before",
                "initiative_type": 1,
                "status_id": status,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Payload omits initiative_type and status_id, so both reset to defaults.
    let response = put_json_auth(
        app.clone(),
        "/initiative/update/1",
        &token,
        serde_json::json!({ "title": "Rewritten", "description": "After" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["title"], "Rewritten");
    assert_eq!(detail["initiative_type"], 2);
    assert_eq!(detail["status_id"], 3);

    // Both status-1 rows were rewritten; the status-3 row kept its title.
    let summaries = InitiativeRepo::list_summaries(&pool)
        .await
        .expect("listing should succeed");
    let rewritten = summaries.iter().filter(|s| s.title == "Rewritten").count();
    assert_eq!(rewritten, 2, "every matching row is rewritten");
    assert!(summaries.iter().any(|s| s.title == "Untouched"));

    // No initiative carries status 1 anymore.
    let response = put_json_auth(
        app,
        "/initiative/update/1",
        &token,
        serde_json::json!({ "title": "Nobody", "description": "Home" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// `DELETE /initiative/delete/{id}` removes every initiative on the status,
/// along with their child records.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_initiative_delete_by_status(pool: PgPool) {
    let admin = common::seed_reference(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = token_for(admin.employee_id);

    let response = post_json_auth(
        app.clone(),
        "/initiative/create",
        &token,
        serde_json::json!({ "title": "Doomed", "description": "Default status" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let initiative_id = body_json(response).await["initiative_id"].as_i64().expect("id");

    let response = post_json_auth(
        app.clone(),
        "/review/create",
        &token,
        serde_json::json!({ "initiative_id": initiative_id, "description": "Looks good" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Default status is 3.
    let response = delete_auth(app.clone(), "/initiative/delete/3", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), "/initiative/all").await;
    assert!(body_json(response).await.as_array().expect("array").is_empty());

    let response = get(app.clone(), "/review/all").await;
    assert!(
        body_json(response).await.as_array().expect("array").is_empty(),
        "reviews on the deleted initiative must go too"
    );

    // Nothing left on status 3.
    let response = delete_auth(app, "/initiative/delete/3", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
