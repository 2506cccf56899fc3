//! Normalized market-indicator scoring.
//!
//! Heterogeneous indicator outputs (momentum oscillators, volume metrics,
//! orderflow imbalance, sentiment, price structure) are mapped onto a single
//! directionally-consistent 0-100 scale: 0 = maximal bearish conviction,
//! 50 = neutral, 100 = maximal bullish conviction. The raw indicator math
//! lives elsewhere; this crate owns the raw-to-score transforms and the
//! invariant contract around them: every score is bounded, every bad input
//! degrades to neutral, and every indicator's sign convention is a declared,
//! checkable property.

pub mod config;
pub mod logging;
pub mod models;
pub mod scorers;
pub mod scoring;

pub use config::{CalibrationEntry, CalibrationTable};
pub use models::input::{InputShape, RawValue};
pub use models::score::{Directionality, Score, ScoredValue, ScoringOutcome, NEUTRAL_SCORE};
pub use scorers::{builtin_registry, IndicatorCategory};
pub use scoring::{CalibrationDefect, IndicatorScorer, ScorerRegistry, ScoringError, Transform};
