//! Tournament results storage and reporting

use game_tree::SearchResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// One of the two tournament participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Result of a single game, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    MaximizerWin,
    MinimizerWin,
    Draw,
}

impl GameOutcome {
    /// Positive root values favour the maximizer, negative ones the minimizer.
    pub fn from_root_value(value: f64) -> Self {
        if value > 0.0 {
            GameOutcome::MaximizerWin
        } else if value < 0.0 {
            GameOutcome::MinimizerWin
        } else {
            GameOutcome::Draw
        }
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_index: u32,
    /// Participant that held the maximizing role
    pub maximizer: Side,
    pub result: SearchResult,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn minimizer(&self) -> Side {
        self.maximizer.other()
    }

    /// Winning participant, or `None` for a draw.
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            GameOutcome::MaximizerWin => Some(self.maximizer),
            GameOutcome::MinimizerWin => Some(self.minimizer()),
            GameOutcome::Draw => None,
        }
    }
}

/// Search-efficiency averages over a set of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub mean_leaves_evaluated: f64,
    pub mean_leaves_pruned: f64,
    pub mean_nodes_visited: f64,
    pub mean_branches_pruned: f64,
    /// Pruned leaves over all leaves, across every game
    pub pruning_ratio: f64,
}

impl SearchSummary {
    pub fn from_games(games: &[GameRecord]) -> Self {
        if games.is_empty() {
            return Self::default();
        }

        let n = games.len() as f64;
        let (mut evaluated, mut pruned, mut visited, mut branches) = (0u64, 0u64, 0u64, 0u64);
        for game in games {
            let stats = &game.result.stats;
            evaluated += stats.leaves_evaluated;
            pruned += stats.leaves_pruned;
            visited += stats.nodes_visited;
            branches += stats.branches_pruned;
        }

        let total = evaluated + pruned;
        Self {
            mean_leaves_evaluated: evaluated as f64 / n,
            mean_leaves_pruned: pruned as f64 / n,
            mean_nodes_visited: visited as f64 / n,
            mean_branches_pruned: branches as f64 / n,
            pruning_ratio: if total == 0 {
                0.0
            } else {
                pruned as f64 / total as f64
            },
        }
    }
}

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    /// Seed the per-game perturbation streams were derived from
    pub seed: u64,
    pub player_a: String,
    pub player_b: String,
    pub games: Vec<GameRecord>,
    pub wins_a: u32,
    pub wins_b: u32,
    pub draws: u32,
    pub summary: SearchSummary,
}

/// Failure to save or load results.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to access results file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode results: {0}")]
    Json(#[from] serde_json::Error),
}

impl TournamentResult {
    /// Tallies wins and statistics from finished games.
    pub fn from_games(seed: u64, player_a: &str, player_b: &str, games: Vec<GameRecord>) -> Self {
        let mut wins_a = 0;
        let mut wins_b = 0;
        let mut draws = 0;
        for game in &games {
            match game.winner() {
                Some(Side::A) => wins_a += 1,
                Some(Side::B) => wins_b += 1,
                None => draws += 1,
            }
        }

        let summary = SearchSummary::from_games(&games);
        Self {
            seed,
            player_a: player_a.to_string(),
            player_b: player_b.to_string(),
            games,
            wins_a,
            wins_b,
            draws,
            summary,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.games.len() as u32
    }

    pub fn player_name(&self, side: Side) -> &str {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    /// Score from player A's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score_a(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins_a as f64 + 0.5 * self.draws as f64) / total
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Tournament: {} vs {} ===\n\n",
            self.player_a, self.player_b
        ));
        report.push_str(&format!(
            "Seed: {}, Games: {}\n\n",
            self.seed,
            self.total_games()
        ));

        report.push_str(&format!(
            "{:<6} {:<16} {:<16} {:>10} {:<12} {:>8} {:>8}\n",
            "Game", "Maximizer", "Minimizer", "Value", "Path", "Leaves", "Pruned"
        ));
        report.push_str(&"-".repeat(82));
        report.push('\n');

        for game in &self.games {
            let path: String = game.result.path.iter().map(|m| m.to_string()).collect();
            report.push_str(&format!(
                "{:<6} {:<16} {:<16} {:>10.4} {:<12} {:>8} {:>8}\n",
                game.game_index + 1,
                self.player_name(game.maximizer),
                self.player_name(game.minimizer()),
                game.result.value,
                path,
                game.result.stats.leaves_evaluated,
                game.result.stats.leaves_pruned
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {}: {} wins, {} draws (score {:.1}%)\n",
            self.player_a,
            self.wins_a,
            self.player_b,
            self.wins_b,
            self.draws,
            self.score_a() * 100.0
        ));
        report.push_str(&format!(
            "Mean leaves evaluated: {:.2}, mean leaves pruned: {:.2}, pruning ratio: {:.3}\n",
            self.summary.mean_leaves_evaluated,
            self.summary.mean_leaves_pruned,
            self.summary.pruning_ratio
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
