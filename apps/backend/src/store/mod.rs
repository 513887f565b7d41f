//! Card persistence.
//!
//! [`CardStore`] is the only way the scheduler and routes touch card state.
//! Implementations must serialize [`CardStore::update`] per card id so a
//! read-modify-write never loses a concurrent answer.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use leitner_core::{Card, CardId, CardUpdate, NewCard, Result};

pub use memory::MemoryCardStore;
pub use postgres::PgCardStore;

/// Computes a scheduling change from the card's current state.
pub type Mutation<'a> = &'a (dyn Fn(&Card) -> CardUpdate + Send + Sync);

#[async_trait]
pub trait CardStore: Send + Sync {
    /// Validate and persist a new card in the first category.
    async fn create(&self, new_card: NewCard) -> Result<Card>;

    /// Cards in insertion order; an empty `tags` slice means no filter.
    async fn list(&self, tags: &[String]) -> Result<Vec<Card>>;

    async fn get(&self, id: &CardId) -> Result<Card>;

    /// Atomically apply `mutation` to the current card and return the result.
    async fn update(&self, id: &CardId, mutation: Mutation<'_>) -> Result<Card>;
}

/// Tag filter shared by the store implementations.
pub(crate) fn matches_tags(card: &Card, tags: &[String]) -> bool {
    tags.is_empty()
        || card
            .tag
            .as_ref()
            .is_some_and(|tag| tags.iter().any(|t| t == tag))
}
