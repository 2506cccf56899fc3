//! Error types for the scoring layer.
//!
//! Only configuration and lookup problems surface as errors; bad market data
//! is absorbed into the neutral fallback and never reaches callers.

use thiserror::Error;

/// Ways a set of calibration constants fails to define a usable mapping.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalibrationDefect {
    #[error("threshold band is empty: low {low} >= high {high}")]
    EmptyBand { low: f64, high: f64 },

    #[error("ratio domain is empty: low {low} >= high {high}")]
    EmptyDomain { low: f64, high: f64 },

    #[error("scale must be positive, got {0}")]
    NonPositiveScale(f64),

    #[error("slope must be positive, got {0}")]
    NonPositiveSlope(f64),

    #[error("in-band spread must not be negative, got {0}")]
    NegativeSpread(f64),

    #[error("calibration constant is not finite")]
    NonFinite,
}

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Degenerate calibration detected at scorer construction. A deployment
    /// defect: construction fails instead of masking it at scoring time.
    #[error("degenerate calibration for indicator '{indicator}'")]
    DegenerateCalibration {
        indicator: String,
        #[source]
        defect: CalibrationDefect,
    },

    /// Lookup of an indicator id nothing was registered under.
    #[error("unknown indicator id '{0}'")]
    UnknownIndicator(String),
}
