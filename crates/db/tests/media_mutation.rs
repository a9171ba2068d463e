//! Integration tests for mutation and moderation behaviour.
//!
//! - COALESCE merge: absent patch fields keep their prior values
//! - Protected columns (status, created_by) survive any patch
//! - Soft-deleted entries are gone for every subsequent operation
//! - Status transitions are unrestricted, including rejected -> approved

use sqlx::PgPool;

use screenlog_core::media::{MediaStatus, MediaType};
use screenlog_core::roles::Role;
use screenlog_db::models::media_entry::{CreateMediaEntry, UpdateMediaEntry};
use screenlog_db::models::user::CreateUser;
use screenlog_db::repositories::{MediaRepo, UserRepo};

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        name: email.split('@').next().unwrap().to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$test-hash".to_string(),
        role: Role::User,
    };
    UserRepo::create(pool, &input).await.expect("user insert").id
}

fn sample_entry() -> CreateMediaEntry {
    CreateMediaEntry {
        title: "Original Title".to_string(),
        media_type: MediaType::Movie,
        director: "Jane Doe".to_string(),
        budget: 2_500_000.0,
        location: "Hollywood".to_string(),
        duration: "95 min".to_string(),
        release_year: 2019,
        poster_url: String::new(),
        thumbnail_url: String::new(),
    }
}

#[sqlx::test]
async fn test_create_forces_pending_status(pool: PgPool) {
    let owner = seed_user(&pool, "alice@test.com").await;
    let created = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert");

    assert_eq!(created.status, MediaStatus::Pending);
    assert_eq!(created.created_by, owner);
    assert!(!created.is_deleted);
    assert!(created.deleted_at.is_none());
}

#[sqlx::test]
async fn test_update_merges_only_present_fields(pool: PgPool) {
    let owner = seed_user(&pool, "alice@test.com").await;
    let created = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert");

    let patch = UpdateMediaEntry {
        title: Some("New Title".to_string()),
        ..Default::default()
    };
    let updated = MediaRepo::update(&pool, created.id, &patch)
        .await
        .expect("update")
        .expect("entry exists");

    assert_eq!(updated.title, "New Title");
    // Everything not in the patch keeps its prior value.
    assert_eq!(updated.director, created.director);
    assert_eq!(updated.budget, created.budget);
    assert_eq!(updated.location, created.location);
    assert_eq!(updated.duration, created.duration);
    assert_eq!(updated.release_year, created.release_year);
    assert_eq!(updated.media_type, created.media_type);
}

#[sqlx::test]
async fn test_update_cannot_touch_protected_columns(pool: PgPool) {
    let owner = seed_user(&pool, "alice@test.com").await;
    let created = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert");
    MediaRepo::set_status(&pool, created.id, MediaStatus::Approved)
        .await
        .expect("status");

    // The patch DTO has no status/created_by fields at all; a full patch
    // of every settable field must leave both untouched.
    let patch = UpdateMediaEntry {
        title: Some("T".to_string()),
        media_type: Some(MediaType::TvShow),
        director: Some("D".to_string()),
        budget: Some(1.0),
        location: Some("L".to_string()),
        duration: Some("1 min".to_string()),
        release_year: Some(1999),
        poster_url: Some("https://img.example/p.png".to_string()),
        thumbnail_url: Some("https://img.example/t.png".to_string()),
    };
    let updated = MediaRepo::update(&pool, created.id, &patch)
        .await
        .expect("update")
        .expect("entry exists");

    assert_eq!(updated.status, MediaStatus::Approved);
    assert_eq!(updated.created_by, owner);
    assert!(!updated.is_deleted);
}

#[sqlx::test]
async fn test_soft_delete_hides_entry_from_everything(pool: PgPool) {
    let owner = seed_user(&pool, "alice@test.com").await;
    let created = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert");

    assert!(MediaRepo::soft_delete(&pool, created.id).await.expect("delete"));

    // Gone for lookup.
    assert!(MediaRepo::find_by_id(&pool, created.id)
        .await
        .expect("find")
        .is_none());

    // Gone for patching.
    let patch = UpdateMediaEntry {
        title: Some("Zombie".to_string()),
        ..Default::default()
    };
    assert!(MediaRepo::update(&pool, created.id, &patch)
        .await
        .expect("update")
        .is_none());

    // Gone for moderation.
    assert!(MediaRepo::set_status(&pool, created.id, MediaStatus::Approved)
        .await
        .expect("status")
        .is_none());

    // A second delete reports nothing to delete.
    assert!(!MediaRepo::soft_delete(&pool, created.id).await.expect("redelete"));
}

#[sqlx::test]
async fn test_status_transitions_are_unrestricted(pool: PgPool) {
    let owner = seed_user(&pool, "alice@test.com").await;
    let created = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert");

    for status in [
        MediaStatus::Approved,
        MediaStatus::Rejected,
        MediaStatus::Approved,
        MediaStatus::Pending,
    ] {
        let updated = MediaRepo::set_status(&pool, created.id, status)
            .await
            .expect("status")
            .expect("entry exists");
        assert_eq!(updated.status, status);
    }
}

#[sqlx::test]
async fn test_pending_queue_excludes_moderated_and_deleted(pool: PgPool) {
    let owner = seed_user(&pool, "alice@test.com").await;

    let pending = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert")
        .id;
    let approved = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert")
        .id;
    MediaRepo::set_status(&pool, approved, MediaStatus::Approved)
        .await
        .expect("status");
    let deleted = MediaRepo::create(&pool, &sample_entry(), owner)
        .await
        .expect("insert")
        .id;
    MediaRepo::soft_delete(&pool, deleted).await.expect("delete");

    let queue = MediaRepo::list_pending(&pool).await.expect("pending");
    let ids: Vec<i64> = queue.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![pending]);
    assert_eq!(queue[0].created_by_name, "alice");
}

#[sqlx::test]
async fn test_duplicate_email_rejected_by_unique_index(pool: PgPool) {
    seed_user(&pool, "dup@test.com").await;

    let input = CreateUser {
        name: "dup2".to_string(),
        email: "dup@test.com".to_string(),
        password_hash: "$argon2id$test-hash".to_string(),
        role: Role::User,
    };
    let err = UserRepo::create(&pool, &input).await.expect_err("duplicate");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}
