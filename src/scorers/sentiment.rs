//! Market sentiment scorers.

use crate::models::input::InputShape;
use crate::models::score::Directionality;
use crate::scoring::error::ScoringError;
use crate::scoring::scorer::IndicatorScorer;
use crate::scoring::transform::Transform;

use super::IndicatorCategory;

/// Fear & Greed style index, published on a 0-100 scale. Mapped directly;
/// a contrarian deployment flips it via the calibration table.
pub fn fear_greed() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "fear_greed",
        IndicatorCategory::Sentiment,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::ratio_to_range(0.0, 100.0),
    )
}

/// Aggregated social sentiment, already normalized to [-1, 1].
pub fn social_sentiment() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "social_sentiment",
        IndicatorCategory::Sentiment,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::ratio_to_range(-1.0, 1.0),
    )
}
