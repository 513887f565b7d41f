//! In-memory card store

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use leitner_core::{Card, CardId, CoreError, NewCard, Result};

use super::{matches_tags, CardStore, Mutation};

struct Entry {
    seq: u64,
    card: Card,
}

/// Card store backed by a sharded concurrent map.
///
/// The shard write guard taken by `get_mut` is held while a mutation runs, so
/// updates to one id are serialized. Ids on other shards proceed in parallel;
/// ids sharing a shard wait for each other.
#[derive(Default)]
pub struct MemoryCardStore {
    cards: DashMap<CardId, Entry>,
    next_seq: AtomicU64,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card as-is, replacing any card with the same id.
    pub fn insert(&self, card: Card) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.cards.insert(card.id.clone(), Entry { seq, card });
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn create(&self, new_card: NewCard) -> Result<Card> {
        let card = Card::create(CardId::generate(), new_card)?;
        self.insert(card.clone());
        tracing::debug!("Stored card {}", card.id);
        Ok(card)
    }

    async fn list(&self, tags: &[String]) -> Result<Vec<Card>> {
        let mut entries: Vec<(u64, Card)> = self
            .cards
            .iter()
            .filter(|entry| matches_tags(&entry.card, tags))
            .map(|entry| (entry.seq, entry.card.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);

        Ok(entries.into_iter().map(|(_, card)| card).collect())
    }

    async fn get(&self, id: &CardId) -> Result<Card> {
        self.cards
            .get(id)
            .map(|entry| entry.card.clone())
            .ok_or_else(|| CoreError::NotFound(id.clone()))
    }

    async fn update(&self, id: &CardId, mutation: Mutation<'_>) -> Result<Card> {
        let mut entry = self
            .cards
            .get_mut(id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;

        let update = mutation(&entry.card);
        entry.card.apply(update);
        Ok(entry.card.clone())
    }
}
