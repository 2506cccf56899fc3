//! Raw indicator payloads accepted by the scoring layer.

use serde::{Deserialize, Serialize};

/// Native output of an external indicator computation.
///
/// Produced fresh per evaluation by the indicator layer and passed in by
/// reference; scoring never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawValue {
    /// Plain scalar output (oscillator value, ratio, rate).
    Scalar { value: f64 },
    /// Price positioned against detected structure levels. Level detection
    /// legitimately finds only one side, so both are optional.
    Levels {
        price: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        support: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        resistance: Option<f64>,
    },
}

impl RawValue {
    pub fn scalar(value: f64) -> Self {
        RawValue::Scalar { value }
    }

    pub fn levels(price: f64, support: Option<f64>, resistance: Option<f64>) -> Self {
        RawValue::Levels {
            price,
            support,
            resistance,
        }
    }

    pub fn shape(&self) -> InputShape {
        match self {
            RawValue::Scalar { .. } => InputShape::Scalar,
            RawValue::Levels { .. } => InputShape::Levels,
        }
    }
}

/// Input shape a scorer requires; validated before any computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    #[default]
    Scalar,
    Levels,
}
