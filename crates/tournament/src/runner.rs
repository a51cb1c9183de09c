//! Tournament runner: repeated searches with alternating roles

use game_tree::{
    search, ConfigError, Perturbation, PlayerStrength, SearchConfig, SearchError,
    SeededPerturbation,
};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::results::{GameOutcome, GameRecord, Side, TournamentResult};

/// Configuration for a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Number of games to play
    pub games: u32,
    /// 0: player A maximizes in game 0; 1: player B does
    pub starting_player: u32,
    /// Play games on the rayon thread pool
    pub parallel: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 4,
            starting_player: 0,
            parallel: false,
        }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::ZeroGames);
        }
        if self.starting_player > 1 {
            return Err(ConfigError::InvalidStartingPlayer(self.starting_player));
        }
        Ok(())
    }

    /// Participant holding the maximizing role in game `game_index`.
    pub fn maximizer_for(&self, game_index: u32) -> Side {
        if (self.starting_player + game_index) % 2 == 0 {
            Side::A
        } else {
            Side::B
        }
    }
}

/// Runs tournaments between two players
pub struct TournamentRunner {
    search: SearchConfig,
    config: TournamentConfig,
}

impl TournamentRunner {
    pub fn new(search: SearchConfig, config: TournamentConfig) -> Self {
        Self { search, config }
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Run a tournament with seeded per-game perturbations.
    ///
    /// Without a configured seed one is drawn and recorded in the result.
    pub fn run(
        &self,
        player_a: &PlayerStrength,
        player_b: &PlayerStrength,
    ) -> Result<TournamentResult, SearchError> {
        let seed = self
            .search
            .random_seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        self.run_with(player_a, player_b, seed, |game| {
            SeededPerturbation::for_game(seed, game)
        })
    }

    /// Run a tournament drawing each game's perturbations from `make_source`.
    ///
    /// The first failing game aborts the tournament.
    pub fn run_with<F, P>(
        &self,
        player_a: &PlayerStrength,
        player_b: &PlayerStrength,
        seed: u64,
        make_source: F,
    ) -> Result<TournamentResult, SearchError>
    where
        F: Fn(u32) -> P + Sync,
        P: Perturbation,
    {
        self.search.validate()?;
        self.config.validate()?;
        player_a.score()?;
        player_b.score()?;

        info!(
            seed,
            games = self.config.games,
            depth = self.search.max_depth,
            pruning = self.search.pruning_enabled,
            parallel = self.config.parallel,
            "starting tournament: {} vs {}",
            player_a.name,
            player_b.name
        );

        let play = |game| self.play_game(game, player_a, player_b, &make_source(game));
        let games = if self.config.parallel {
            (0..self.config.games)
                .into_par_iter()
                .map(play)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            (0..self.config.games)
                .map(play)
                .collect::<Result<Vec<_>, _>>()?
        };

        let result = TournamentResult::from_games(seed, &player_a.name, &player_b.name, games);
        info!(
            wins_a = result.wins_a,
            wins_b = result.wins_b,
            draws = result.draws,
            mean_leaves = result.summary.mean_leaves_evaluated,
            pruning_ratio = result.summary.pruning_ratio,
            "tournament finished"
        );

        Ok(result)
    }

    /// Play a single game, one search from the root.
    fn play_game<P: Perturbation>(
        &self,
        game_index: u32,
        player_a: &PlayerStrength,
        player_b: &PlayerStrength,
        source: &P,
    ) -> Result<GameRecord, SearchError> {
        let maximizer = self.config.maximizer_for(game_index);
        let (max_player, min_player) = match maximizer {
            Side::A => (player_a, player_b),
            Side::B => (player_b, player_a),
        };

        let result = search(&self.search, max_player.strength, min_player.strength, source)?;
        let outcome = GameOutcome::from_root_value(result.value);

        debug!(
            game = game_index,
            maximizer = %max_player.name,
            minimizer = %min_player.name,
            value = result.value,
            leaves = result.stats.leaves_evaluated,
            pruned = result.stats.leaves_pruned,
            ?outcome,
            "game finished"
        );

        Ok(GameRecord {
            game_index,
            maximizer,
            result,
            outcome,
        })
    }
}

/// Quick utility to run a tournament
pub fn run_tournament(
    config: &SearchConfig,
    player_a: &PlayerStrength,
    player_b: &PlayerStrength,
    starting_player: u32,
    game_count: u32,
) -> Result<TournamentResult, SearchError> {
    let tournament = TournamentConfig {
        games: game_count,
        starting_player,
        ..Default::default()
    };
    TournamentRunner::new(*config, tournament).run(player_a, player_b)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
