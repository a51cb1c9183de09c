//! Error types for the search engine.

use thiserror::Error;

/// Invalid input to the utility model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("strength must be non-negative, got {0}")]
    NegativeStrength(f64),

    #[error("strength must be finite, got {0}")]
    NonFiniteStrength(f64),
}

/// Malformed search or tournament configuration.
///
/// These indicate a caller bug; nothing retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_depth must be at least 1")]
    ZeroDepth,

    #[error("max_depth {depth} exceeds the supported limit of {limit}")]
    DepthTooLarge { depth: u32, limit: u32 },

    #[error("branching factor {0} is not supported (only 2 is)")]
    UnsupportedBranching(u32),

    #[error("a tournament needs at least one game")]
    ZeroGames,

    #[error("starting player must be 0 or 1, got {0}")]
    InvalidStartingPlayer(u32),
}

/// Any failure a search can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
