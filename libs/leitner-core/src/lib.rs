//! Core Leitner library shared by the backend and its stores.
//!
//! Provides:
//! - Card and category types (the eight Leitner boxes and their intervals)
//! - The Leitner state machine, due predicate and review ordering
//! - A clock abstraction for the service's notion of "today"
//! - The error taxonomy every store and service reports through

pub mod algorithm;
pub mod clock;
pub mod error;
pub mod types;

pub use algorithm::{leitner, Outcome};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, Result};
pub use types::{Card, CardId, CardUpdate, Category, NewCard, ReviewInterval};
