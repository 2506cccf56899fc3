//! Orderflow and derivatives-positioning scorers.

use crate::models::input::InputShape;
use crate::models::score::Directionality;
use crate::scoring::error::ScoringError;
use crate::scoring::scorer::IndicatorScorer;
use crate::scoring::transform::Transform;

use super::IndicatorCategory;

/// Funding-rate scale: 0.2% funding (0.002) moves the score by 50 points
/// before clamping, i.e. a fully crowded side.
pub const FUNDING_RATE_SCALE: f64 = 250.0;

/// Long/short ratio of 1.0 means balanced positioning.
pub const LONG_SHORT_CENTER: f64 = 1.0;
pub const LONG_SHORT_SCALE: f64 = 1.0;

/// Order imbalance ratio (buy - sell) / (buy + sell), already in [-1, 1].
pub fn order_imbalance() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "order_imbalance",
        IndicatorCategory::Orderflow,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::ratio_to_range(-1.0, 1.0),
    )
}

/// Book depth imbalance (bid - ask) / (bid + ask), already in [-1, 1].
pub fn depth_imbalance() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "depth_imbalance",
        IndicatorCategory::Orderflow,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::ratio_to_range(-1.0, 1.0),
    )
}

/// Perp funding rate: positive funding means crowded longs paying shorts,
/// read contrarian, so a falling rate is bullish.
pub fn funding_rate() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "funding_rate",
        IndicatorCategory::Orderflow,
        InputShape::Scalar,
        Directionality::Inverted,
        Transform::inverted_linear(FUNDING_RATE_SCALE),
    )
}

/// Account long/short ratio, read contrarian: a crowded long side is
/// bearish.
pub fn long_short_ratio() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "long_short_ratio",
        IndicatorCategory::Orderflow,
        InputShape::Scalar,
        Directionality::Inverted,
        Transform::tanh_normalized(LONG_SHORT_CENTER, LONG_SHORT_SCALE),
    )
}
