//! Score scale primitives shared by every scoring path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score returned whenever an input is invalid or a computation fails.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Bullish/bearish conviction on the standardized 0-100 scale.
///
/// 0 = maximal bearish conviction, 50 = neutral, 100 = maximal bullish
/// conviction. The only constructor clamps, so a `Score` is always inside
/// the closed interval.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    pub const NEUTRAL: Score = Score(NEUTRAL_SCORE);

    /// Clamp an arbitrary numeric value into [0.0, 100.0].
    ///
    /// Infinities clamp to the nearest bound; NaN maps to the neutral 50.0
    /// instead of propagating. Every scoring path terminates here.
    pub fn bound(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::NEUTRAL;
        }
        Self(raw.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_bullish(self) -> bool {
        self.0 > NEUTRAL_SCORE
    }

    pub fn is_bearish(self) -> bool {
        self.0 < NEUTRAL_SCORE
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Whether increasing raw value implies increasing (direct) or decreasing
/// (inverted) score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directionality {
    Direct,
    Inverted,
}

/// How a score was produced. Observability only; downstream decision logic
/// must not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringOutcome {
    Computed,
    ValidationFallback,
    ComputationFallback,
}

impl ScoringOutcome {
    pub fn is_fallback(self) -> bool {
        !matches!(self, ScoringOutcome::Computed)
    }
}

/// A score together with its provenance tag and evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredValue {
    pub score: Score,
    pub outcome: ScoringOutcome,
    pub timestamp: DateTime<Utc>,
}

impl ScoredValue {
    pub fn computed(score: Score) -> Self {
        Self {
            score,
            outcome: ScoringOutcome::Computed,
            timestamp: Utc::now(),
        }
    }

    /// Neutral result for a failed scoring attempt.
    pub fn fallback(outcome: ScoringOutcome) -> Self {
        Self {
            score: Score::NEUTRAL,
            outcome,
            timestamp: Utc::now(),
        }
    }
}
