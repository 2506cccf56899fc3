//! Per-indicator scoring with the uniform fail-safe boundary.

use tracing::{debug, warn};

use crate::models::input::{InputShape, RawValue};
use crate::models::score::{Directionality, Score, ScoredValue, ScoringOutcome};
use crate::scoring::error::ScoringError;
use crate::scoring::transform::Transform;
use crate::scorers::IndicatorCategory;

/// One indicator's raw-to-score mapping: a transform, its calibration, a
/// declared directionality, and the fail-safe wrapper around them.
///
/// Calibration is fixed at construction and never mutated afterwards, so a
/// scorer can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct IndicatorScorer {
    name: String,
    category: IndicatorCategory,
    shape: InputShape,
    directionality: Directionality,
    transform: Transform,
}

impl IndicatorScorer {
    /// Build a scorer, rejecting degenerate calibration.
    pub fn new(
        name: impl Into<String>,
        category: IndicatorCategory,
        shape: InputShape,
        directionality: Directionality,
        transform: Transform,
    ) -> Result<Self, ScoringError> {
        let name = name.into();
        transform
            .validate()
            .map_err(|defect| ScoringError::DegenerateCalibration {
                indicator: name.clone(),
                defect,
            })?;
        Ok(Self {
            name,
            category,
            shape,
            directionality,
            transform,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> IndicatorCategory {
        self.category
    }

    pub fn input_shape(&self) -> InputShape {
        self.shape
    }

    /// Declared sign convention of this indicator.
    pub fn directionality(&self) -> Directionality {
        self.directionality
    }

    /// Score a raw input.
    ///
    /// Total over all inputs: invalid or mismatched input and any failed
    /// computation degrade to the neutral score instead of erroring.
    pub fn score(&self, input: &RawValue) -> Score {
        self.score_detailed(input).score
    }

    /// Score a raw input, keeping the outcome tag for observability.
    pub fn score_detailed(&self, input: &RawValue) -> ScoredValue {
        let raw = match self.extract(input) {
            Some(raw) => raw,
            None => {
                debug!(indicator = %self.name, "invalid raw input, falling back to neutral");
                return ScoredValue::fallback(ScoringOutcome::ValidationFallback);
            }
        };

        let mut raw_score = self.transform.apply(raw);
        if self.directionality != self.transform.direction() {
            // Declared directionality wins: mirror the shape about neutral.
            raw_score = 100.0 - raw_score;
        }

        if !raw_score.is_finite() {
            warn!(
                indicator = %self.name,
                raw,
                "transform produced a non-finite score, falling back to neutral"
            );
            return ScoredValue::fallback(ScoringOutcome::ComputationFallback);
        }

        ScoredValue::computed(Score::bound(raw_score))
    }

    /// Check the input against the declared shape and reduce it to the
    /// scalar the transform consumes.
    fn extract(&self, input: &RawValue) -> Option<f64> {
        if input.shape() != self.shape {
            return None;
        }
        match *input {
            RawValue::Scalar { value } => value.is_finite().then_some(value),
            RawValue::Levels {
                price,
                support,
                resistance,
            } => {
                if !price.is_finite() {
                    return None;
                }
                position_in_levels(price, support, resistance)
            }
        }
    }
}

/// Position of price within its structure range: 0 = at support, 1 = at
/// resistance. When only one level is known, the relative distance from
/// price stands in for the missing side, capped into the unit range.
fn position_in_levels(price: f64, support: Option<f64>, resistance: Option<f64>) -> Option<f64> {
    let support = support.filter(|s| s.is_finite());
    let resistance = resistance.filter(|r| r.is_finite());
    match (support, resistance) {
        (Some(sup), Some(res)) => {
            let range = res - sup;
            if range <= 0.0 {
                return None;
            }
            Some((price - sup) / range)
        }
        (Some(sup), None) => {
            if price <= 0.0 {
                return None;
            }
            Some(((price - sup) / price).clamp(0.0, 1.0))
        }
        (None, Some(res)) => {
            if price <= 0.0 {
                return None;
            }
            Some((1.0 - (res - price) / price).clamp(0.0, 1.0))
        }
        (None, None) => None,
    }
}
