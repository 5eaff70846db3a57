//! Integration tests for soft-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted entities are hidden from `find_active_by_id` and `list`
//! - `find_including_deleted` and `list(.., true)` still return them
//! - Soft-delete is idempotent (second call returns `false`)
//! - Existence lookups treat soft-deleted rows as missing

use assert_matches::assert_matches;
use catalog_db::models::cast_member::CreateCastMember;
use catalog_db::models::category::CreateCategory;
use catalog_db::repositories::{CastMemberRepo, CategoryRepo, EntityRepo, ExistenceRepo};
use catalog_db::writer::EntityWriter;
use catalog_db::DbError;
use sqlx::PgPool;

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        description: Some("soft delete test".to_string()),
        is_active: None,
    }
}

// ---------------------------------------------------------------------------
// Test: soft_delete hides entity from active reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_active_reads(pool: PgPool) {
    let category = EntityWriter::create::<CategoryRepo>(&pool, &new_category("Hidden"), &[])
        .await
        .unwrap();

    let deleted = CategoryRepo::soft_delete(&pool, category.id).await.unwrap();
    assert!(deleted, "soft_delete should return true on first call");

    let err = CategoryRepo::find_active_by_id(&pool, category.id)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::NotFound { entity: "Category", .. });

    let row = CategoryRepo::find_including_deleted(&pool, category.id)
        .await
        .unwrap();
    assert!(row.deleted_at.is_some());
}

// ---------------------------------------------------------------------------
// Test: list respects include_deleted
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_list(pool: PgPool) {
    let kept = EntityWriter::create::<CategoryRepo>(&pool, &new_category("Kept"), &[])
        .await
        .unwrap();
    let gone = EntityWriter::create::<CategoryRepo>(&pool, &new_category("Gone"), &[])
        .await
        .unwrap();
    CategoryRepo::soft_delete(&pool, gone.id).await.unwrap();

    let active = CategoryRepo::list(&pool, false).await.unwrap();
    assert!(active.iter().any(|c| c.id == kept.id));
    assert!(!active.iter().any(|c| c.id == gone.id));

    let all = CategoryRepo::list(&pool, true).await.unwrap();
    assert_eq!(all.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: soft_delete is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_twice_returns_false(pool: PgPool) {
    let input = CreateCastMember {
        name: "Director".to_string(),
        member_type: 0,
    };
    let member = EntityWriter::create::<CastMemberRepo>(&pool, &input, &[])
        .await
        .unwrap();

    assert!(CastMemberRepo::soft_delete(&pool, member.id).await.unwrap());
    assert!(!CastMemberRepo::soft_delete(&pool, member.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: existence lookup ignores soft-deleted rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_existence_rejects_soft_deleted(pool: PgPool) {
    let live = EntityWriter::create::<CategoryRepo>(&pool, &new_category("Live"), &[])
        .await
        .unwrap();
    let dead = EntityWriter::create::<CategoryRepo>(&pool, &new_category("Dead"), &[])
        .await
        .unwrap();
    CategoryRepo::soft_delete(&pool, dead.id).await.unwrap();
    let unknown = uuid::Uuid::new_v4();

    let missing = ExistenceRepo::missing_active_ids(&pool, "categories", &[live.id, dead.id, unknown])
        .await
        .unwrap();
    assert_eq!(missing, vec![dead.id, unknown]);

    let none_missing = ExistenceRepo::missing_active_ids(&pool, "categories", &[live.id])
        .await
        .unwrap();
    assert!(none_missing.is_empty());
}
