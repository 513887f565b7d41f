//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring an in-memory store and a pinned clock into the router
//! - Helper functions for seeding cards in a given category

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use chrono::NaiveDate;

use leitner_backend::store::{CardStore, MemoryCardStore};
use leitner_backend::{router, AppState};
use leitner_core::{Card, CardId, Category, FixedClock, NewCard};

/// Test context containing an in-memory store and the application router.
///
/// The clock is pinned to [`TestContext::today`] so answers are stamped
/// deterministically; quiz dates are moved with the `date` query parameter.
pub struct TestContext {
    pub store: Arc<MemoryCardStore>,
    app: Router,
}

impl TestContext {
    /// Create a new test context with an empty store.
    pub fn new() -> Self {
        let store = Arc::new(MemoryCardStore::new());
        let clock = Arc::new(FixedClock(Self::today()));
        let state = AppState::new(store.clone(), clock);

        Self {
            store,
            app: router(state),
        }
    }

    /// The date the service believes it is.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Get a test server for the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).unwrap()
    }

    /// Store a fresh card directly, bypassing HTTP.
    pub async fn create_card(&self, question: &str, tag: Option<&str>) -> Card {
        self.store
            .create(NewCard::new(question, "answer", tag))
            .await
            .expect("Failed to create test card")
    }

    /// Read a card straight from the store.
    pub async fn store_card(&self, id: &str) -> Card {
        self.store
            .get(&CardId::from(id))
            .await
            .expect("Card missing from store")
    }

    /// Store a card already sitting in `category`.
    pub fn seed_card(&self, category: Category, last_reviewed_at: Option<NaiveDate>) -> Card {
        let mut card = Card::create(CardId::generate(), NewCard::new("Q?", "A", None::<String>))
            .expect("Failed to build test card");
        card.category = category;
        card.last_reviewed_at = last_reviewed_at;
        self.store.insert(card.clone());
        card
    }
}
