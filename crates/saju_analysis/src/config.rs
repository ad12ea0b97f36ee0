//! Analysis options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum score the fallback pattern's relation must exceed.
    pub pattern_min_score: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pattern_min_score: 0.5,
        }
    }
}
