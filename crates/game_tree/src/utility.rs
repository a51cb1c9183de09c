//! Leaf evaluation model.
//!
//! A leaf's utility is the strength gap between the two players plus a
//! small signed perturbation:
//!
//! ```text
//! utility = strength(max) - strength(min) + sign(leaf) * draw(leaf)
//! ```
//!
//! where `sign` is `+1` on even leaf indices and `-1` on odd ones.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::perturbation::Perturbation;

/// Maps a raw capability scalar to a strength score.
///
/// `log2(x + 1) + x / 10`, defined for finite `x >= 0`.
pub fn strength(x: f64) -> Result<f64, DomainError> {
    check_strength(x)?;
    Ok((x + 1.0).log2() + x / 10.0)
}

fn check_strength(x: f64) -> Result<(), DomainError> {
    if x.is_nan() || x.is_infinite() {
        return Err(DomainError::NonFiniteStrength(x));
    }
    if x < 0.0 {
        return Err(DomainError::NegativeStrength(x));
    }
    Ok(())
}

/// `+1.0` for even leaf positions, `-1.0` for odd ones.
#[inline]
pub fn leaf_sign(leaf_index: u64) -> f64 {
    if leaf_index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Utility of a single leaf from the maximizer's point of view.
///
/// Consumes exactly one draw from `source`, keyed by `leaf_index`.
pub fn leaf_utility<P: Perturbation + ?Sized>(
    max_strength: f64,
    min_strength: f64,
    leaf_index: u64,
    source: &P,
) -> Result<f64, DomainError> {
    let gap = strength(max_strength)? - strength(min_strength)?;
    Ok(LeafModel { gap }.utility(leaf_index, source))
}

/// Leaf utility with the strength gap computed once per search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeafModel {
    gap: f64,
}

impl LeafModel {
    pub(crate) fn new(max_strength: f64, min_strength: f64) -> Result<Self, DomainError> {
        Ok(Self {
            gap: strength(max_strength)? - strength(min_strength)?,
        })
    }

    #[inline]
    pub(crate) fn utility<P: Perturbation + ?Sized>(&self, leaf_index: u64, source: &P) -> f64 {
        self.gap + leaf_sign(leaf_index) * source.draw(leaf_index)
    }
}

/// A named player and its base capability.
///
/// The strength belongs to the player, not to the role it plays in a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStrength {
    pub name: String,
    pub strength: f64,
}

impl PlayerStrength {
    /// Creates a player, rejecting negative or non-finite strengths.
    pub fn new(name: impl Into<String>, strength: f64) -> Result<Self, DomainError> {
        check_strength(strength)?;
        Ok(Self {
            name: name.into(),
            strength,
        })
    }

    /// Strength score of this player.
    pub fn score(&self) -> Result<f64, DomainError> {
        strength(self.strength)
    }
}

#[cfg(test)]
#[path = "utility_tests.rs"]
mod utility_tests;
