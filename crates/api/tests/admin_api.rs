//! HTTP-level integration tests for the admin moderation surface.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, patch_json_auth, post_json_auth, seed_user};
use sqlx::PgPool;

use screenlog_core::roles::Role;

async fn submit_entry(pool: &PgPool, token: &str, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/media",
        token,
        serde_json::json!({
            "title": title,
            "type": "Movie",
            "director": "Jane Doe",
            "budget": 1_000_000.0,
            "location": "Hollywood",
            "duration": "120 min",
            "releaseYear": 2020
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn moderate(pool: &PgPool, token: &str, id: i64, action: &str) -> (StatusCode, serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/media/{id}/{action}"),
        token,
        serde_json::json!({}),
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// RBAC
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_moderation_requires_admin_role(pool: PgPool) {
    let (_alice, alice_token) = seed_user(&pool, "alice", "alice@test.com", Role::User).await;
    let id = submit_entry(&pool, &alice_token, "Mine").await;

    // Even the entry's own creator cannot moderate without the admin role.
    let (status, json) = moderate(&pool, &alice_token, id, "approve").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Admin role required");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/media/pending", &alice_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_moderation_requires_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/admin/media/pending").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Pending queue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_pending_queue_lists_only_pending(pool: PgPool) {
    let (alice, alice_token) = seed_user(&pool, "alice", "alice@test.com", Role::User).await;
    let (_admin, admin_token) = seed_user(&pool, "root", "root@test.com", Role::Admin).await;

    let approved = submit_entry(&pool, &alice_token, "Approved Already").await;
    submit_entry(&pool, &alice_token, "Still Waiting").await;
    moderate(&pool, &admin_token, approved, "approve").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/media/pending", &admin_token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Still Waiting");
    assert_eq!(data[0]["status"], "pending");
    // The creator is resolved to {id, name}.
    assert_eq!(data[0]["createdBy"]["id"], alice.id);
    assert_eq!(data[0]["createdBy"]["name"], "alice");
}

// ---------------------------------------------------------------------------
// Approve / reject
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_makes_entry_visible_to_others(pool: PgPool) {
    let (_alice, alice_token) = seed_user(&pool, "alice", "alice@test.com", Role::User).await;
    let (_bob, bob_token) = seed_user(&pool, "bob", "bob@test.com", Role::User).await;
    let (_admin, admin_token) = seed_user(&pool, "root", "root@test.com", Role::Admin).await;
    let id = submit_entry(&pool, &alice_token, "Soon Public").await;

    // Invisible to Bob while pending.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/media", &bob_token).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let (status, json) = moderate(&pool, &admin_token, id, "approve").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "approved");

    // Now visible.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/media", &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["title"], "Soon Public");
}

/// There is no transition graph: a rejected entry can later be approved.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reject_then_approve(pool: PgPool) {
    let (_alice, alice_token) = seed_user(&pool, "alice", "alice@test.com", Role::User).await;
    let (_admin, admin_token) = seed_user(&pool, "root", "root@test.com", Role::Admin).await;
    let id = submit_entry(&pool, &alice_token, "Second Chance").await;

    let (status, json) = moderate(&pool, &admin_token, id, "reject").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "rejected");

    let (status, json) = moderate(&pool, &admin_token, id, "approve").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "approved");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_moderating_missing_or_deleted_entry_returns_404(pool: PgPool) {
    let (_alice, alice_token) = seed_user(&pool, "alice", "alice@test.com", Role::User).await;
    let (_admin, admin_token) = seed_user(&pool, "root", "root@test.com", Role::Admin).await;

    let (status, _) = moderate(&pool, &admin_token, 999_999, "approve").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Soft-deleted entries are indistinguishable from absent ones.
    let id = submit_entry(&pool, &alice_token, "Deleted Before Review").await;
    let app = common::build_test_app(pool.clone());
    let response = common::delete_auth(app, &format!("/api/v1/media/{id}"), &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = moderate(&pool, &admin_token, id, "approve").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// End-to-end walkthrough: submit, moderate, list, mutate.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_full_moderation_flow(pool: PgPool) {
    let (_alice, alice_token) = seed_user(&pool, "alice", "alice@test.com", Role::User).await;
    let (_bob, bob_token) = seed_user(&pool, "bob", "bob@test.com", Role::User).await;
    let (_admin, admin_token) = seed_user(&pool, "root", "root@test.com", Role::Admin).await;

    let first = submit_entry(&pool, &alice_token, "First Film").await;
    let second = submit_entry(&pool, &alice_token, "Second Film").await;

    // Admin sees both in the queue, newest first.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/media/pending", &admin_token).await;
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Second Film", "First Film"]);

    moderate(&pool, &admin_token, first, "approve").await;
    moderate(&pool, &admin_token, second, "reject").await;

    // Queue is now empty.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/media/pending", &admin_token).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Bob sees only the approved entry; Alice still sees both of hers.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/media", &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "First Film");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/media", &alice_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
