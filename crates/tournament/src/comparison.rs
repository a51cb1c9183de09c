//! Pruned vs unpruned runs of the same tournament

use game_tree::{PlayerStrength, SearchConfig, SearchError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::results::{SearchSummary, TournamentResult};
use crate::runner::{TournamentConfig, TournamentRunner};

/// Efficiency of alpha-beta against plain minimax on identical trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PruningComparison {
    pub seed: u64,
    pub pruned: SearchSummary,
    pub full: SearchSummary,
    /// Share of leaf evaluations avoided by pruning
    pub leaves_saved: f64,
    /// Every game produced the same value and path in both runs
    pub consistent: bool,
}

impl PruningComparison {
    pub fn from_results(pruned: &TournamentResult, full: &TournamentResult) -> Self {
        let consistent = pruned.games.len() == full.games.len()
            && pruned.games.iter().zip(&full.games).all(|(p, f)| {
                p.result.value.to_bits() == f.result.value.to_bits()
                    && p.result.path == f.result.path
            });

        let full_leaves = full.summary.mean_leaves_evaluated;
        let leaves_saved = if full_leaves > 0.0 {
            1.0 - pruned.summary.mean_leaves_evaluated / full_leaves
        } else {
            0.0
        };

        Self {
            seed: pruned.seed,
            pruned: pruned.summary,
            full: full.summary,
            leaves_saved,
            consistent,
        }
    }
}

/// Runs the tournament twice, with and without pruning, on the same seed.
pub fn compare_pruning(
    search: &SearchConfig,
    config: &TournamentConfig,
    player_a: &PlayerStrength,
    player_b: &PlayerStrength,
) -> Result<PruningComparison, SearchError> {
    let seed = search
        .random_seed
        .unwrap_or_else(|| rand::thread_rng().gen());
    let seeded = search.seeded(seed);

    let pruned = TournamentRunner::new(seeded.pruning(true), *config).run(player_a, player_b)?;
    let full = TournamentRunner::new(seeded.pruning(false), *config).run(player_a, player_b)?;

    let comparison = PruningComparison::from_results(&pruned, &full);
    if !comparison.consistent {
        warn!(seed, "pruned and unpruned searches disagree");
    }
    info!(
        seed,
        leaves_saved = comparison.leaves_saved,
        "pruning comparison finished"
    );

    Ok(comparison)
}

#[cfg(test)]
#[path = "comparison_tests.rs"]
mod comparison_tests;
