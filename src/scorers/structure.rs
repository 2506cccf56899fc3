//! Price-structure scorers.
//!
//! Both take the `Levels` input shape and score the price's position inside
//! its range, mean-reverting: at support (or the lower band) the bounce
//! signal is strongest, at resistance the rejection signal is strongest.
//! Position rises toward resistance, so both declare inverted.

use crate::models::input::InputShape;
use crate::models::score::Directionality;
use crate::scoring::error::ScoringError;
use crate::scoring::scorer::IndicatorScorer;
use crate::scoring::transform::Transform;

use super::IndicatorCategory;

/// Price against detected support/resistance levels.
pub fn support_resistance() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "support_resistance",
        IndicatorCategory::Structure,
        InputShape::Levels,
        Directionality::Inverted,
        Transform::ratio_to_range(0.0, 1.0),
    )
}

/// Price against its Bollinger band envelope (lower band as support, upper
/// as resistance).
pub fn bollinger_position() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "bollinger_position",
        IndicatorCategory::Structure,
        InputShape::Levels,
        Directionality::Inverted,
        Transform::ratio_to_range(0.0, 1.0),
    )
}
