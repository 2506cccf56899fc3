//! Built-in indicator scorers, grouped by family.

pub mod momentum;
pub mod orderflow;
pub mod sentiment;
pub mod structure;
pub mod volume;

use serde::{Deserialize, Serialize};

use crate::scoring::error::ScoringError;
use crate::scoring::registry::ScorerRegistry;
use crate::scoring::scorer::IndicatorScorer;

/// Indicator family, carried for observability and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Momentum,
    Volume,
    Orderflow,
    Sentiment,
    Structure,
}

impl IndicatorCategory {
    pub fn all() -> Vec<IndicatorCategory> {
        vec![
            IndicatorCategory::Momentum,
            IndicatorCategory::Volume,
            IndicatorCategory::Orderflow,
            IndicatorCategory::Sentiment,
            IndicatorCategory::Structure,
        ]
    }
}

/// Every built-in scorer under its default calibration.
pub fn builtin_scorers() -> Result<Vec<IndicatorScorer>, ScoringError> {
    Ok(vec![
        momentum::rsi()?,
        momentum::stochastic()?,
        momentum::cci()?,
        momentum::macd_histogram()?,
        momentum::roc()?,
        volume::cmf()?,
        volume::obv_slope()?,
        volume::relative_volume()?,
        volume::vwap_deviation()?,
        orderflow::order_imbalance()?,
        orderflow::depth_imbalance()?,
        orderflow::funding_rate()?,
        orderflow::long_short_ratio()?,
        sentiment::fear_greed()?,
        sentiment::social_sentiment()?,
        structure::support_resistance()?,
        structure::bollinger_position()?,
    ])
}

/// Registry preloaded with the full built-in indicator set.
pub fn builtin_registry() -> Result<ScorerRegistry, ScoringError> {
    let mut registry = ScorerRegistry::new();
    for scorer in builtin_scorers()? {
        registry.register(scorer);
    }
    Ok(registry)
}
