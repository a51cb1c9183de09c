//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Depth beyond which leaf indices no longer fit in a `u64`.
pub const MAX_SUPPORTED_DEPTH: u32 = 63;

/// The only branching factor the engine implements.
pub const BINARY_BRANCHING: u32 = 2;

/// Immutable parameters for one search.
///
/// Passed explicitly to every entry point; there is no global configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth of the tree in plies. Leaves sit at this depth.
    pub max_depth: u32,
    /// Children per interior node. Only 2 is supported.
    pub branching_factor: u32,
    /// Whether alpha-beta cutoffs are taken.
    pub pruning_enabled: bool,
    /// Fixes the perturbation stream. `None` lets the caller pick one.
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            branching_factor: BINARY_BRANCHING,
            pruning_enabled: true,
            random_seed: None,
        }
    }
}

impl SearchConfig {
    /// Config with the given depth and every other field at its default.
    pub fn with_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Same config with pruning switched on or off.
    pub fn pruning(self, pruning_enabled: bool) -> Self {
        Self {
            pruning_enabled,
            ..self
        }
    }

    /// Same config with a fixed seed.
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..self
        }
    }

    /// Checks the depth and branching factor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::DepthTooLarge {
                depth: self.max_depth,
                limit: MAX_SUPPORTED_DEPTH,
            });
        }
        if self.branching_factor != BINARY_BRANCHING {
            return Err(ConfigError::UnsupportedBranching(self.branching_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
