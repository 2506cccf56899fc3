//! Environment handling and calibration table loading.

use serde::{Deserialize, Serialize};

use crate::models::input::InputShape;
use crate::models::score::Directionality;
use crate::scorers::IndicatorCategory;
use crate::scoring::error::ScoringError;
use crate::scoring::registry::ScorerRegistry;
use crate::scoring::scorer::IndicatorScorer;
use crate::scoring::transform::Transform;

/// Load variables from a local .env file, if one exists.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Current runtime environment, from the ENVIRONMENT variable.
/// Defaults to "sandbox".
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Deployment calibration document mapping indicator ids to their transform
/// parameters. Treated as validated-at-load-time input: entries are checked
/// when the registry is built, and the first bad entry fails the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationTable {
    pub indicators: Vec<CalibrationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationEntry {
    pub id: String,
    pub category: IndicatorCategory,
    #[serde(default)]
    pub shape: InputShape,
    pub direction: Directionality,
    pub transform: Transform,
}

impl CalibrationTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a registry from this table, rejecting the first degenerate
    /// entry. A configuration defect here should halt startup, not degrade
    /// live scoring.
    pub fn build_registry(&self) -> Result<ScorerRegistry, ScoringError> {
        let mut registry = ScorerRegistry::new();
        for entry in &self.indicators {
            let scorer = IndicatorScorer::new(
                entry.id.clone(),
                entry.category,
                entry.shape,
                entry.direction,
                entry.transform,
            )?;
            registry.register(scorer);
        }
        Ok(registry)
    }
}
