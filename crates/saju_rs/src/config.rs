//! Combined configuration, loadable from JSON.

use std::path::Path;

use saju_analysis::AnalysisConfig;
use saju_pillars::{LuckConfig, PillarConfig};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// All chart options. Every field is optional in JSON.
///
/// ```json
/// { "pillars": { "rat_hour": "AdvanceDay" }, "luck": { "cycle_count": 8 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub pillars: PillarConfig,
    pub luck: LuckConfig,
    pub analysis: AnalysisConfig,
}

impl ChartConfig {
    /// Parse and validate. Luck settings are checked here so a bad file
    /// fails at load time.
    pub fn from_json_str(text: &str) -> Result<Self, ChartError> {
        let config: Self = serde_json::from_str(text)?;
        config.luck.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
