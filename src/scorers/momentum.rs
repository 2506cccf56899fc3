//! Momentum oscillator scorers.
//!
//! Banded oscillators (RSI, stochastic, CCI) read mean-reverting: oversold
//! is bullish, overbought is bearish, so they declare inverted
//! directionality over a direct threshold shape. Rate-style momentum (MACD
//! histogram, ROC) reads with the sign of the raw value.

use crate::models::input::InputShape;
use crate::models::score::Directionality;
use crate::scoring::error::ScoringError;
use crate::scoring::scorer::IndicatorScorer;
use crate::scoring::transform::Transform;

use super::IndicatorCategory;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;

pub const CCI_OVERSOLD: f64 = -100.0;
pub const CCI_OVERBOUGHT: f64 = 100.0;

/// Typical MACD histogram magnitude treated as a strong signal. Deployments
/// recalibrate per symbol through the calibration table.
pub const MACD_HISTOGRAM_SCALE: f64 = 1.0;

/// Rate-of-change (percent) producing a near-saturated score.
pub const ROC_SCALE: f64 = 5.0;

/// RSI: neutral inside the 30-70 band, bullish as the oscillator falls into
/// oversold territory, bearish into overbought.
pub fn rsi() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "rsi",
        IndicatorCategory::Momentum,
        InputShape::Scalar,
        Directionality::Inverted,
        Transform::linear_threshold(RSI_OVERSOLD, RSI_OVERBOUGHT),
    )
}

/// Stochastic %K with the conventional 20/80 band.
pub fn stochastic() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "stochastic",
        IndicatorCategory::Momentum,
        InputShape::Scalar,
        Directionality::Inverted,
        Transform::linear_threshold(STOCH_OVERSOLD, STOCH_OVERBOUGHT),
    )
}

/// CCI with the conventional +/-100 band.
pub fn cci() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "cci",
        IndicatorCategory::Momentum,
        InputShape::Scalar,
        Directionality::Inverted,
        Transform::linear_threshold(CCI_OVERSOLD, CCI_OVERBOUGHT),
    )
}

/// MACD histogram: positive histogram is bullish momentum, saturating
/// smoothly for outsized values.
pub fn macd_histogram() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "macd_histogram",
        IndicatorCategory::Momentum,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::tanh_normalized(0.0, MACD_HISTOGRAM_SCALE),
    )
}

/// Rate of change (percent over the lookback window).
pub fn roc() -> Result<IndicatorScorer, ScoringError> {
    IndicatorScorer::new(
        "roc",
        IndicatorCategory::Momentum,
        InputShape::Scalar,
        Directionality::Direct,
        Transform::tanh_normalized(0.0, ROC_SCALE),
    )
}
