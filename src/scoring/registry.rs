//! Indicator id to scorer resolution.

use std::collections::HashMap;

use crate::models::input::RawValue;
use crate::models::score::{Directionality, Score, ScoredValue};
use crate::scoring::error::ScoringError;
use crate::scoring::scorer::IndicatorScorer;

/// Maps indicator identifiers to their scorers.
///
/// All registration is expected during single-threaded startup; afterwards
/// the registry is only read, so concurrent `score` calls need no locking.
#[derive(Debug, Default)]
pub struct ScorerRegistry {
    scorers: HashMap<String, IndicatorScorer>,
}

impl ScorerRegistry {
    pub fn new() -> Self {
        Self {
            scorers: HashMap::new(),
        }
    }

    /// Register a scorer under its name, replacing any previous registration.
    pub fn register(&mut self, scorer: IndicatorScorer) {
        self.scorers.insert(scorer.name().to_string(), scorer);
    }

    /// Look up a scorer. Unknown ids are a caller programming error and
    /// surface as an explicit failure, never as a silent neutral score.
    pub fn resolve(&self, indicator_id: &str) -> Result<&IndicatorScorer, ScoringError> {
        self.scorers
            .get(indicator_id)
            .ok_or_else(|| ScoringError::UnknownIndicator(indicator_id.to_string()))
    }

    /// Score `input` with the scorer registered under `indicator_id`.
    ///
    /// Fails only for an unknown id; for any registered indicator the result
    /// is always a bounded score.
    pub fn score(&self, indicator_id: &str, input: &RawValue) -> Result<Score, ScoringError> {
        Ok(self.resolve(indicator_id)?.score(input))
    }

    /// Like [`score`](Self::score), keeping the outcome tag and timestamp.
    pub fn score_detailed(
        &self,
        indicator_id: &str,
        input: &RawValue,
    ) -> Result<ScoredValue, ScoringError> {
        Ok(self.resolve(indicator_id)?.score_detailed(input))
    }

    /// Declared sign convention of a registered indicator, for consumers
    /// that need to reason about directionality without re-deriving it.
    pub fn directionality(&self, indicator_id: &str) -> Result<Directionality, ScoringError> {
        Ok(self.resolve(indicator_id)?.directionality())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scorers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scorers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scorers.is_empty()
    }
}
