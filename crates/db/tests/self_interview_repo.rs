//! Integration tests for the self-interview repository.
//!
//! Exercises `SelfInterviewRepo` against a real database:
//! - Create assigns ids and echoes fields
//! - Update overwrites in place and misses on unknown ids
//! - Delete removes rows and misses on unknown ids
//! - List ordering and bulk clear

use sqlx::PgPool;
use pickme_db::models::self_interview::{SelfInterviewDto, SelfInterviewResponse};
use pickme_db::repositories::SelfInterviewRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_self_interview(title: &str, content: &str) -> SelfInterviewDto {
    SelfInterviewDto {
        title: title.to_string(),
        content: content.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_id_and_echoes_fields(pool: PgPool) {
    let input = new_self_interview("회사를 고를 때 가장 중요하게 생각하는 것은?", "배울 것이 많은 직장");
    let created = SelfInterviewRepo::create(&pool, &input).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.title, input.title);
    assert_eq!(created.content, input.content);
    assert_eq!(created.created_at, created.updated_at);

    let found = SelfInterviewRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created row should be found");
    assert_eq!(
        SelfInterviewResponse::from(found),
        SelfInterviewResponse::from(created)
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn ids_are_unique(pool: PgPool) {
    let a = SelfInterviewRepo::create(&pool, &new_self_interview("A", "a"))
        .await
        .unwrap();
    let b = SelfInterviewRepo::create(&pool, &new_self_interview("A", "a"))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_missing_returns_none(pool: PgPool) {
    let found = SelfInterviewRepo::find_by_id(&pool, -1).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_replaces_content_and_keeps_id(pool: PgPool) {
    let created = SelfInterviewRepo::create(&pool, &new_self_interview("Title", "Before"))
        .await
        .unwrap();

    let updated = SelfInterviewRepo::update(&pool, created.id, &new_self_interview("Title", "After"))
        .await
        .unwrap()
        .expect("existing row should update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Title");
    assert_eq!(updated.content, "After");
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_missing_returns_none(pool: PgPool) {
    let result = SelfInterviewRepo::update(&pool, 999_999, &new_self_interview("T", "C"))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: PgPool) {
    let created = SelfInterviewRepo::create(&pool, &new_self_interview("T", "C"))
        .await
        .unwrap();

    let deleted = SelfInterviewRepo::delete(&pool, created.id).await.unwrap();
    assert_eq!(deleted.map(|row| row.id), Some(created.id));

    let found = SelfInterviewRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(found.is_none());

    // Second delete is a miss.
    let again = SelfInterviewRepo::delete(&pool, created.id).await.unwrap();
    assert!(again.is_none());
}

// ---------------------------------------------------------------------------
// List / delete_all
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_is_ordered_by_id_and_delete_all_clears(pool: PgPool) {
    for i in 0..3 {
        SelfInterviewRepo::create(&pool, &new_self_interview(&format!("Q{i}"), "A"))
            .await
            .unwrap();
    }

    let rows = SelfInterviewRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(rows[0].title, "Q0");

    let removed = SelfInterviewRepo::delete_all(&pool).await.unwrap();
    assert_eq!(removed, 3);
    assert!(SelfInterviewRepo::list(&pool).await.unwrap().is_empty());
}
