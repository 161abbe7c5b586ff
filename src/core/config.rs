//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Target score used when none is given or the input is unusable.
pub const DEFAULT_TARGET_SCORE: u32 = 101;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total a player must reach (or pass) to win (default: 101).
    pub target_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom target score.
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.target_score == 0 {
            return Err(EngineError::InvalidConfig { target: 0 });
        }
        Ok(())
    }

    /// Convert a raw target into a positive score.
    pub fn check_target(target: i64) -> Result<u32> {
        if target <= 0 {
            return Err(EngineError::InvalidConfig { target });
        }
        u32::try_from(target).map_err(|_| EngineError::InvalidConfig { target })
    }

    /// Parse user-entered target text strictly.
    pub fn try_parse_target(input: &str) -> Result<u32> {
        let trimmed = input.trim();
        let target: i64 = trimmed.parse().map_err(|_| EngineError::UnparseableTarget {
            input: trimmed.to_string(),
        })?;
        Self::check_target(target)
    }

    /// Parse user-entered target text, falling back to 101.
    #[must_use]
    pub fn parse_target(input: &str) -> u32 {
        match Self::try_parse_target(input) {
            Ok(target) => target,
            Err(err) => {
                tracing::warn!(%err, default = DEFAULT_TARGET_SCORE, "using default target score");
                DEFAULT_TARGET_SCORE
            }
        }
    }
}
