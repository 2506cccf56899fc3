//! The four reusable mapping shapes behind every indicator scorer.
//!
//! Each transform is a pure `(raw, calibration) -> raw score` function. The
//! result is not yet bounded; clamping happens once, at the scorer boundary.

use serde::{Deserialize, Serialize};

use crate::models::score::{Directionality, NEUTRAL_SCORE};
use crate::scoring::error::CalibrationDefect;

/// A raw-to-score mapping shape with its calibration constants embedded.
///
/// Every shape is monotone over its full domain. `direction()` reports the
/// intrinsic sign convention so scorers can enforce their declared
/// directionality structurally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    /// Oscillator band mapping. Inside [low, high] the raw value maps
    /// affinely onto [mid - band, mid + band]; above `high` the score climbs
    /// from `mid + band` with `slope_high`, below `low` it falls from
    /// `mid - band` with `slope_low`.
    LinearThreshold {
        low: f64,
        high: f64,
        #[serde(default = "default_mid")]
        mid: f64,
        #[serde(default)]
        band: f64,
        slope_low: f64,
        slope_high: f64,
    },
    /// `50 + 50 * tanh((raw - center) / scale)`. Smooth saturating curve for
    /// unbounded, heavy-tailed raw values.
    TanhNormalized {
        #[serde(default)]
        center: f64,
        scale: f64,
    },
    /// Exact affine map from a known bounded domain onto [0, 100].
    RatioToRange {
        #[serde(default = "default_domain_low")]
        domain_low: f64,
        #[serde(default = "default_domain_high")]
        domain_high: f64,
    },
    /// `50 - (raw - center) * scale`. Decreasing linear map for indicators
    /// where a falling raw value is bullish.
    InvertedLinear {
        #[serde(default)]
        center: f64,
        scale: f64,
    },
}

fn default_mid() -> f64 {
    NEUTRAL_SCORE
}

fn default_domain_low() -> f64 {
    -1.0
}

fn default_domain_high() -> f64 {
    1.0
}

impl Transform {
    /// Threshold mapping with a flat neutral band and tail slopes scaled to
    /// the band width.
    pub fn linear_threshold(low: f64, high: f64) -> Self {
        let slope = NEUTRAL_SCORE / (high - low);
        Transform::LinearThreshold {
            low,
            high,
            mid: NEUTRAL_SCORE,
            band: 0.0,
            slope_low: slope,
            slope_high: slope,
        }
    }

    pub fn tanh_normalized(center: f64, scale: f64) -> Self {
        Transform::TanhNormalized { center, scale }
    }

    pub fn ratio_to_range(domain_low: f64, domain_high: f64) -> Self {
        Transform::RatioToRange {
            domain_low,
            domain_high,
        }
    }

    pub fn inverted_linear(scale: f64) -> Self {
        Transform::InvertedLinear { center: 0.0, scale }
    }

    /// Reject calibration that cannot produce a well-defined monotone
    /// mapping. Called once, at scorer construction.
    pub fn validate(&self) -> Result<(), CalibrationDefect> {
        match *self {
            Transform::LinearThreshold {
                low,
                high,
                mid,
                band,
                slope_low,
                slope_high,
            } => {
                if low >= high {
                    return Err(CalibrationDefect::EmptyBand { low, high });
                }
                if ![low, high, mid, band, slope_low, slope_high]
                    .iter()
                    .all(|v| v.is_finite())
                {
                    return Err(CalibrationDefect::NonFinite);
                }
                if band < 0.0 {
                    return Err(CalibrationDefect::NegativeSpread(band));
                }
                if slope_low <= 0.0 {
                    return Err(CalibrationDefect::NonPositiveSlope(slope_low));
                }
                if slope_high <= 0.0 {
                    return Err(CalibrationDefect::NonPositiveSlope(slope_high));
                }
                Ok(())
            }
            Transform::TanhNormalized { center, scale } => {
                if !center.is_finite() || !scale.is_finite() {
                    return Err(CalibrationDefect::NonFinite);
                }
                if scale <= 0.0 {
                    return Err(CalibrationDefect::NonPositiveScale(scale));
                }
                Ok(())
            }
            Transform::RatioToRange {
                domain_low,
                domain_high,
            } => {
                if !domain_low.is_finite() || !domain_high.is_finite() {
                    return Err(CalibrationDefect::NonFinite);
                }
                if domain_low >= domain_high {
                    return Err(CalibrationDefect::EmptyDomain {
                        low: domain_low,
                        high: domain_high,
                    });
                }
                Ok(())
            }
            Transform::InvertedLinear { center, scale } => {
                if !center.is_finite() || !scale.is_finite() {
                    return Err(CalibrationDefect::NonFinite);
                }
                if scale <= 0.0 {
                    return Err(CalibrationDefect::NonPositiveScale(scale));
                }
                Ok(())
            }
        }
    }

    /// Intrinsic sign convention of the shape.
    pub fn direction(&self) -> Directionality {
        match self {
            Transform::InvertedLinear { .. } => Directionality::Inverted,
            _ => Directionality::Direct,
        }
    }

    /// Map a raw value to a pre-clamp score.
    pub fn apply(&self, raw: f64) -> f64 {
        match *self {
            Transform::LinearThreshold {
                low,
                high,
                mid,
                band,
                slope_low,
                slope_high,
            } => {
                if raw < low {
                    (mid - band) - slope_low * (low - raw)
                } else if raw > high {
                    (mid + band) + slope_high * (raw - high)
                } else {
                    (mid - band) + 2.0 * band * (raw - low) / (high - low)
                }
            }
            Transform::TanhNormalized { center, scale } => {
                NEUTRAL_SCORE + NEUTRAL_SCORE * ((raw - center) / scale).tanh()
            }
            Transform::RatioToRange {
                domain_low,
                domain_high,
            } => 100.0 * (raw - domain_low) / (domain_high - domain_low),
            Transform::InvertedLinear { center, scale } => {
                NEUTRAL_SCORE - (raw - center) * scale
            }
        }
    }
}
