//! Process-wide engine for callers that build one index per session.

use std::sync::OnceLock;

use crate::engine::ChartEngine;
use crate::error::ChartError;

static ENGINE: OnceLock<ChartEngine> = OnceLock::new();

/// Install the global engine. Fails if one is already installed.
pub fn init(engine: ChartEngine) -> Result<(), ChartError> {
    ENGINE
        .set(engine)
        .map_err(|_| ChartError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static ChartEngine, ChartError> {
    ENGINE.get().ok_or(ChartError::NotInitialized)
}
