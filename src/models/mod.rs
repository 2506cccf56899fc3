//! Shared data models spanning the scoring layers.

pub mod input;
pub mod score;

pub use input::{InputShape, RawValue};
pub use score::{Directionality, Score, ScoredValue, ScoringOutcome, NEUTRAL_SCORE};
