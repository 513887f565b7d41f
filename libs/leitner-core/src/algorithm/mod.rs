//! Leitner scheduling: answer outcomes, category transitions and due selection.

pub mod leitner;

/// Result of answering a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// Map the wire `isValid` flag.
    pub fn from_valid(is_valid: bool) -> Self {
        if is_valid { Self::Pass } else { Self::Fail }
    }
}
