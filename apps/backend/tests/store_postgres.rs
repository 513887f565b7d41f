//! PostgreSQL store tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running with `--ignored`.

use std::sync::Arc;

use chrono::NaiveDate;
use leitner_backend::store::{CardStore, PgCardStore};
use leitner_core::{CardId, CardUpdate, Category, CoreError, NewCard};
use uuid::Uuid;

async fn connect() -> PgCardStore {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    let store = PgCardStore::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    store
        .run_migrations()
        .await
        .expect("Failed to run migrations");

    store
}

/// Tag unique to one test run so tests do not see each other's rows.
fn unique_tag(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().to_string()[..8])
}

async fn cleanup(store: &PgCardStore, tag: &str) {
    let _ = sqlx::query("DELETE FROM cards WHERE tag = $1")
        .bind(tag)
        .execute(store.pool())
        .await;
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Test create then get returns the same card.
#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_get() {
    let store = connect().await;
    let tag = unique_tag("roundtrip");

    let created = store
        .create(NewCard::new("2+2?", "4", Some(tag.as_str())))
        .await
        .unwrap();
    let fetched = store.get(&created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.category, Category::First);
    assert_eq!(fetched.last_reviewed_at, None);

    cleanup(&store, &tag).await;
}

/// Test tag filtering keeps insertion order.
#[tokio::test]
#[ignore = "requires database"]
async fn test_list_by_tag() {
    let store = connect().await;
    let tag = unique_tag("list");
    let other = unique_tag("other");

    let first = store.create(NewCard::new("Q1", "A", Some(tag.as_str()))).await.unwrap();
    store.create(NewCard::new("Q2", "A", Some(other.as_str()))).await.unwrap();
    let third = store.create(NewCard::new("Q3", "A", Some(tag.as_str()))).await.unwrap();

    let cards = store.list(&[tag.clone()]).await.unwrap();
    let ids: Vec<CardId> = cards.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    cleanup(&store, &tag).await;
    cleanup(&store, &other).await;
}

/// Test unknown ids are reported as not found.
#[tokio::test]
#[ignore = "requires database"]
async fn test_unknown_card() {
    let store = connect().await;
    let missing = CardId::generate();

    assert!(matches!(store.get(&missing).await, Err(CoreError::NotFound(_))));

    let result = store
        .update(&missing, &|_| CardUpdate {
            category: Category::Done,
            reviewed_at: today(),
        })
        .await;
    assert!(matches!(result, Err(CoreError::NotFound(_))));
}

/// Test concurrent updates on one row are serialized by the row lock.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires database"]
async fn test_concurrent_updates_not_lost() {
    let store = Arc::new(connect().await);
    let tag = unique_tag("concurrent");
    let card = store.create(NewCard::new("Q", "A", Some(tag.as_str()))).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..6 {
        let store = store.clone();
        let id = card.id.clone();
        handles.push(tokio::spawn(async move {
            store
                .update(&id, &|c| CardUpdate {
                    category: c.category.next(),
                    reviewed_at: today(),
                })
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let card = store.get(&card.id).await.unwrap();
    assert_eq!(card.category, Category::Seventh);
    assert_eq!(card.last_reviewed_at, Some(today()));

    cleanup(&store, &tag).await;
}
