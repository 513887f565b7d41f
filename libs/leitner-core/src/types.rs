//! Core types for the Leitner trainer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};

/// Opaque card identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review interval of a category.
///
/// `Days` sorts before `Never`, so intervals compare in schedule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReviewInterval {
    Days(u32),
    Never,
}

/// Leitner box a card currently sits in.
///
/// The declaration order is the review order; the serialized tokens are a
/// wire contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Done,
}

impl Default for Category {
    fn default() -> Self {
        Self::First
    }
}

impl Category {
    /// Every category, lowest first.
    pub const ALL: [Category; 8] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Seventh,
        Self::Done,
    ];

    /// Days between reviews for cards in this category.
    pub fn interval(self) -> ReviewInterval {
        match self {
            Self::First => ReviewInterval::Days(1),
            Self::Second => ReviewInterval::Days(2),
            Self::Third => ReviewInterval::Days(4),
            Self::Fourth => ReviewInterval::Days(8),
            Self::Fifth => ReviewInterval::Days(16),
            Self::Sixth => ReviewInterval::Days(32),
            Self::Seventh => ReviewInterval::Days(64),
            Self::Done => ReviewInterval::Never,
        }
    }

    /// Category reached after a correct answer. `Done` stays `Done`.
    pub fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::Third,
            Self::Third => Self::Fourth,
            Self::Fourth => Self::Fifth,
            Self::Fifth => Self::Sixth,
            Self::Sixth => Self::Seventh,
            Self::Seventh | Self::Done => Self::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == Self::Done
    }

    /// Wire token, e.g. `"FIRST"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "FIRST",
            Self::Second => "SECOND",
            Self::Third => "THIRD",
            Self::Fourth => "FOURTH",
            Self::Fifth => "FIFTH",
            Self::Sixth => "SIXTH",
            Self::Seventh => "SEVENTH",
            Self::Done => "DONE",
        }
    }

    /// Parse a wire token.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied data for a card that does not exist yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCard {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl NewCard {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        tag: Option<impl Into<String>>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            tag: tag.map(Into::into),
        }
    }

    /// Reject blank questions or answers.
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(CoreError::Validation(
                "question cannot be blank".to_string(),
            ));
        }
        if self.answer.trim().is_empty() {
            return Err(CoreError::Validation("answer cannot be blank".to_string()));
        }
        Ok(())
    }
}

/// A stored flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<NaiveDate>,
}

impl Card {
    /// Build a never-reviewed card in the first category.
    ///
    /// Fails with [`CoreError::Validation`] when the question or answer is
    /// blank. A blank tag is dropped.
    pub fn create(id: CardId, new_card: NewCard) -> Result<Self> {
        new_card.validate()?;

        Ok(Self {
            id,
            question: new_card.question,
            answer: new_card.answer,
            tag: new_card.tag.filter(|t| !t.trim().is_empty()),
            category: Category::default(),
            last_reviewed_at: None,
        })
    }

    /// Overwrite the scheduling fields.
    pub fn apply(&mut self, update: CardUpdate) {
        self.category = update.category;
        self.last_reviewed_at = Some(update.reviewed_at);
    }
}

/// Scheduling change produced by an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardUpdate {
    pub category: Category,
    pub reviewed_at: NaiveDate,
}
