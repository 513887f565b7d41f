//! Leitner scheduler service
//!
//! Answers "what is due" and "what happens after an answer" on top of a
//! [`CardStore`]. Dates are always supplied by the caller.

use std::sync::Arc;

use chrono::NaiveDate;
use leitner_core::{leitner, Card, CardId, Outcome, Result};

use crate::store::CardStore;

#[derive(Clone)]
pub struct LeitnerScheduler {
    store: Arc<dyn CardStore>,
}

impl LeitnerScheduler {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    /// Cards due on `as_of`, lowest category first.
    pub async fn due_cards(&self, as_of: NaiveDate) -> Result<Vec<Card>> {
        let cards = self.store.list(&[]).await?;
        let total = cards.len();
        let due = leitner::select_due(cards, as_of);

        tracing::debug!("{} of {} cards due on {}", due.len(), total, as_of);
        Ok(due)
    }

    /// Apply a pass/fail answer to a card, stamping it with `today`.
    pub async fn record_answer(
        &self,
        id: &CardId,
        is_valid: bool,
        today: NaiveDate,
    ) -> Result<Card> {
        let outcome = Outcome::from_valid(is_valid);
        let card = self
            .store
            .update(id, &move |card: &Card| leitner::schedule(card, outcome, today))
            .await?;

        tracing::info!("Card {} answered {:?}, now {}", card.id, outcome, card.category);
        Ok(card)
    }
}
