//! Sources of the bounded random term added to leaf utilities.
//!
//! A draw is a pure function of the leaf index (plus whatever seed the
//! source carries), so skipping leaves never shifts the values seen by
//! the leaves that are still evaluated.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Smallest integer draw before scaling.
pub const DRAW_MIN: u32 = 1;
/// Largest integer draw before scaling.
pub const DRAW_MAX: u32 = 10;
/// Integer draws are divided by this to get the perturbation magnitude.
pub const DRAW_SCALE: f64 = 10.0;

/// Supplies the unsigned perturbation magnitude for a leaf.
pub trait Perturbation: Sync {
    fn draw(&self, leaf_index: u64) -> f64;
}

/// SplitMix64 finaliser.
#[inline]
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Seed of the sub-stream for one game of a tournament.
pub fn game_seed(seed: u64, game_index: u32) -> u64 {
    mix(mix(seed) ^ game_index as u64)
}

/// Seed of a single leaf's draw within a game.
pub fn leaf_seed(game_seed: u64, leaf_index: u64) -> u64 {
    mix(game_seed ^ mix(leaf_index))
}

/// Uniform draws from `{0.1, 0.2, ..., 1.0}`, one independent ChaCha8 stream per leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededPerturbation {
    game_seed: u64,
}

impl SeededPerturbation {
    /// Source for a standalone search.
    pub fn new(seed: u64) -> Self {
        Self { game_seed: seed }
    }

    /// Source for game `game_index` of a tournament seeded with `seed`.
    pub fn for_game(seed: u64, game_index: u32) -> Self {
        Self {
            game_seed: game_seed(seed, game_index),
        }
    }

    /// Integer draw in `DRAW_MIN..=DRAW_MAX` for a leaf.
    pub fn raw_draw(&self, leaf_index: u64) -> u32 {
        let mut rng = ChaCha8Rng::seed_from_u64(leaf_seed(self.game_seed, leaf_index));
        rng.gen_range(DRAW_MIN..=DRAW_MAX)
    }
}

impl Perturbation for SeededPerturbation {
    fn draw(&self, leaf_index: u64) -> f64 {
        self.raw_draw(leaf_index) as f64 / DRAW_SCALE
    }
}

/// Fixed magnitudes indexed by leaf, cycling when the tree has more leaves.
///
/// Used to build exact scenarios. Magnitudes are not range-checked, so a
/// zero perturbation can be expressed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedPerturbation {
    magnitudes: Vec<f64>,
}

impl ScriptedPerturbation {
    pub fn new(magnitudes: Vec<f64>) -> Self {
        Self { magnitudes }
    }

    /// The same magnitude at every leaf.
    pub fn constant(magnitude: f64) -> Self {
        Self::new(vec![magnitude])
    }
}

impl Perturbation for ScriptedPerturbation {
    fn draw(&self, leaf_index: u64) -> f64 {
        if self.magnitudes.is_empty() {
            return 0.0;
        }
        self.magnitudes[(leaf_index % self.magnitudes.len() as u64) as usize]
    }
}

#[cfg(test)]
#[path = "perturbation_tests.rs"]
mod perturbation_tests;
