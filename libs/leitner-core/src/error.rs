//! Error types for leitner-core.

use thiserror::Error;

use crate::types::CardId;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by card stores and the scheduler.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid card: {0}")]
    Validation(String),

    #[error("card not found: {0}")]
    NotFound(CardId),

    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    /// Wrap an underlying persistence failure.
    pub fn store<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Store(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_card() {
        let error = CoreError::NotFound(CardId::from("card-1"));
        assert_eq!(error.to_string(), "card not found: card-1");
    }

    #[test]
    fn store_wraps_message() {
        let error = CoreError::store("connection reset");
        assert_eq!(error.to_string(), "store error: connection reset");
    }
}
