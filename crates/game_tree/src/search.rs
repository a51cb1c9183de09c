//! Minimax search with alpha-beta pruning

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::perturbation::Perturbation;
use crate::tree::{leaf_index_of, role_at_depth, GameTree, NodePath, Role};
use crate::utility::LeafModel;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root and leaves included
    pub nodes_visited: u64,
    /// Leaves whose utility was computed
    pub leaves_evaluated: u64,
    /// Sibling subtrees skipped by cutoffs
    pub branches_pruned: u64,
    /// Leaves inside skipped subtrees
    pub leaves_pruned: u64,
    /// Nodes inside skipped subtrees
    pub nodes_pruned: u64,
}

impl SearchStats {
    /// Fraction of the tree's leaves that were never evaluated.
    pub fn pruning_ratio(&self) -> f64 {
        let total = self.leaves_pruned + self.leaves_evaluated;
        if total == 0 {
            return 0.0;
        }
        self.leaves_pruned as f64 / total as f64
    }
}

/// Outcome of searching one game tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value at the root, from the maximizer's point of view
    pub value: f64,
    /// Child indices from the root to the leaf that produced `value`
    pub path: Vec<u8>,
    pub stats: SearchStats,
}

/// Value of a subtree and the principal leaf beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub leaf: NodePath,
}

/// Searches the tree described by `config` with the given strengths.
///
/// # Arguments
/// * `config` - Tree shape and pruning switch
/// * `max_strength` - Strength of the player in the maximizing role
/// * `min_strength` - Strength of the player in the minimizing role
/// * `source` - Supplies leaf perturbations
///
/// # Returns
/// The root value, the chosen line and the search counters. Value and line
/// do not depend on `config.pruning_enabled`.
pub fn search<P: Perturbation + ?Sized>(
    config: &SearchConfig,
    max_strength: f64,
    min_strength: f64,
    source: &P,
) -> Result<SearchResult, SearchError> {
    let mut searcher = AlphaBetaSearch::new(config, max_strength, min_strength, source)?;
    let eval = searcher.search_from(&NodePath::root(), f64::NEG_INFINITY, f64::INFINITY);

    Ok(SearchResult {
        value: eval.value,
        path: eval.leaf.into_moves(),
        stats: searcher.stats(),
    })
}

/// Alpha-beta searcher over one tree.
///
/// Holds the counters so that several subtrees can be searched with the
/// same bookkeeping.
pub struct AlphaBetaSearch<'a, P: Perturbation + ?Sized> {
    tree: GameTree,
    model: LeafModel,
    source: &'a P,
    pruning: bool,
    stats: SearchStats,
    path: Vec<u8>,
}

impl<'a, P: Perturbation + ?Sized> AlphaBetaSearch<'a, P> {
    pub fn new(
        config: &SearchConfig,
        max_strength: f64,
        min_strength: f64,
        source: &'a P,
    ) -> Result<Self, SearchError> {
        let tree = GameTree::new(config)?;
        let model = LeafModel::new(max_strength, min_strength)?;

        Ok(Self {
            tree,
            model,
            source,
            pruning: config.pruning_enabled,
            stats: SearchStats::default(),
            path: Vec::with_capacity(config.max_depth as usize),
        })
    }

    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches the subtree at `start` within the window `(alpha, beta)`.
    ///
    /// Inside the window the value is exact. On a fail-low or fail-high it is
    /// a bound, and the leaf is the one that produced that bound.
    pub fn search_from(&mut self, start: &NodePath, alpha: f64, beta: f64) -> Evaluation {
        self.path.clear();
        self.path.extend_from_slice(start.moves());
        let (value, leaf) = self.alpha_beta(alpha, beta);

        Evaluation {
            value,
            leaf: NodePath::from(leaf),
        }
    }

    /// Recursive fail-soft alpha-beta over `self.path`.
    fn alpha_beta(&mut self, mut alpha: f64, mut beta: f64) -> (f64, Vec<u8>) {
        self.stats.nodes_visited += 1;

        let depth = self.path.len() as u32;
        if depth >= self.tree.max_depth() {
            self.stats.leaves_evaluated += 1;
            let value = self.model.utility(leaf_index_of(&self.path), self.source);
            return (value, self.path.clone());
        }

        let role = role_at_depth(depth);
        let children = self.tree.branching_factor();
        let mut best = match role {
            Role::Maximizing => f64::NEG_INFINITY,
            Role::Minimizing => f64::INFINITY,
        };
        let mut best_line = Vec::new();

        for child in 0..children {
            self.path.push(child as u8);
            let (score, line) = self.alpha_beta(alpha, beta);
            self.path.pop();

            // Strict comparisons: the first child wins ties.
            match role {
                Role::Maximizing => {
                    if score > best || best_line.is_empty() {
                        best = score;
                        best_line = line;
                    }
                    if best > alpha {
                        alpha = best;
                    }
                }
                Role::Minimizing => {
                    if score < best || best_line.is_empty() {
                        best = score;
                        best_line = line;
                    }
                    if best < beta {
                        beta = best;
                    }
                }
            }

            if self.pruning && alpha >= beta {
                let skipped = (children - child - 1) as u64;
                if skipped > 0 {
                    self.record_cutoff(depth + 1, skipped);
                    trace!(depth, skipped, alpha, beta, "cutoff");
                }
                break;
            }
        }

        (best, best_line)
    }

    fn record_cutoff(&mut self, child_depth: u32, skipped: u64) {
        self.stats.branches_pruned += skipped;
        self.stats.leaves_pruned += skipped * self.tree.subtree_leaves(child_depth);
        self.stats.nodes_pruned += skipped * self.tree.subtree_nodes(child_depth);
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
