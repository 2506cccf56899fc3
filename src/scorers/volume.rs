//! Volume and flow scorers.

use crate::models::input::InputShape;
use crate::models::score::Directionality;
use crate::scoring::error::ScoringError;
use crate::scoring::scorer::IndicatorScorer;
use crate::scoring::transform::Transform;

use super::IndicatorCategory;

/// OBV slope (normalized units per bar) reading as strong accumulation.
pub const OBV_SLOPE_SCALE: f64 = 1.0;

/// Center of the relative-volume curve: 1.0 means volume equal to its
/// moving average.
pub const RELATIVE_VOLUME_CENTER: f64 = 1.0;
pub const RELATIVE_VOLUME_SCALE: f64 = 1.0;

/// VWAP deviation (percent) reading as near-saturated.
pub const VWAP_DEVIATION_SCALE: f64 = 2.0;

/// Chaikin Money Flow, already a ratio in [-1, 1].
pub fn cmf() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "cmf",
        IndicatorCategory::Volume,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::ratio_to_range(-1.0, 1.0),
    )
}

/// On-balance-volume slope: rising OBV confirms buying pressure.
pub fn obv_slope() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "obv_slope",
        IndicatorCategory::Volume,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::tanh_normalized(0.0, OBV_SLOPE_SCALE),
    )
}

/// Volume relative to its moving average. Unbounded above, so the curve
/// saturates instead of hard-capping.
pub fn relative_volume() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "relative_volume",
        IndicatorCategory::Volume,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::tanh_normalized(RELATIVE_VOLUME_CENTER, RELATIVE_VOLUME_SCALE),
    )
}

/// Price deviation from VWAP in percent; trading above VWAP is bullish.
pub fn vwap_deviation() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "vwap_deviation",
        IndicatorCategory::Volume,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::tanh_normalized(0.0, VWAP_DEVIATION_SCALE),
    )
}
