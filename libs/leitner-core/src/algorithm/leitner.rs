//! Strict Leitner system.
//!
//! A correct answer moves a card one box up; a wrong answer sends it back to
//! the first box whatever box it was in. Cards in `Done` leave the schedule.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::Outcome;
use crate::types::{Card, CardUpdate, Category, ReviewInterval};

/// Category after answering a card in `category`.
pub fn next_category(category: Category, outcome: Outcome) -> Category {
    match outcome {
        Outcome::Pass => category.next(),
        Outcome::Fail => Category::First,
    }
}

/// Scheduling change for answering `card` on `today`.
pub fn schedule(card: &Card, outcome: Outcome, today: NaiveDate) -> CardUpdate {
    CardUpdate {
        category: next_category(card.category, outcome),
        reviewed_at: today,
    }
}

/// Whether `card` should be reviewed on `as_of`.
///
/// Never-reviewed cards are always due, `Done` cards never are. Otherwise the
/// days elapsed since the last review must reach the category interval.
pub fn is_due(card: &Card, as_of: NaiveDate) -> bool {
    let days = match card.category.interval() {
        ReviewInterval::Never => return false,
        ReviewInterval::Days(days) => days,
    };

    match card.last_reviewed_at {
        None => true,
        Some(last) => (as_of - last).num_days() >= i64::from(days),
    }
}

/// Review order: lower category first, then oldest review (never-reviewed
/// first), then id.
pub fn review_order(a: &Card, b: &Card) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| match (a.last_reviewed_at, b.last_reviewed_at) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.cmp(&y),
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Keep the cards due on `as_of`, in review order.
pub fn select_due(cards: Vec<Card>, as_of: NaiveDate) -> Vec<Card> {
    let mut due: Vec<Card> = cards.into_iter().filter(|c| is_due(c, as_of)).collect();
    due.sort_by(review_order);
    due
}
