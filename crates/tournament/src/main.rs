//! Tournament CLI
//!
//! Run alpha-beta tournaments between two players and report pruning
//! efficiency.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game_tree::PlayerStrength;
use std::path::PathBuf;
use tournament::{compare_pruning, TournamentRunner, TournamentSettings};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tournament")]
#[command(about = "Minimax tournaments over a binary game tree")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a tournament and print the report
    Run {
        #[command(flatten)]
        overrides: Overrides,

        /// Write the full result as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Play the tournament with and without pruning and compare node counts
    Compare {
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Command-line values that take precedence over the settings file.
#[derive(Args, Debug)]
struct Overrides {
    /// Settings file (defaults to ./tournament.toml when present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[arg(long, short)]
    depth: Option<u32>,

    #[arg(long)]
    no_pruning: bool,

    #[arg(long, short)]
    seed: Option<u64>,

    #[arg(long, short)]
    games: Option<u32>,

    /// 0 if player A maximizes first, 1 if player B does
    #[arg(long)]
    starting_player: Option<u32>,

    /// Play games in parallel
    #[arg(long)]
    parallel: bool,

    #[arg(long)]
    strength_a: Option<f64>,

    #[arg(long)]
    strength_b: Option<f64>,
}

impl Overrides {
    fn settings(&self) -> Result<TournamentSettings> {
        let mut settings = TournamentSettings::load_or_default(self.config.as_deref())?;

        if let Some(depth) = self.depth {
            settings.search.max_depth = depth;
        }
        if self.no_pruning {
            settings.search.pruning_enabled = false;
        }
        if let Some(seed) = self.seed {
            settings.search.random_seed = Some(seed);
        }
        if let Some(games) = self.games {
            settings.tournament.games = games;
        }
        if let Some(starting_player) = self.starting_player {
            settings.tournament.starting_player = starting_player;
        }
        if self.parallel {
            settings.tournament.parallel = true;
        }
        if let Some(strength) = self.strength_a {
            settings.players.a = PlayerStrength::new(settings.players.a.name.clone(), strength)?;
        }
        if let Some(strength) = self.strength_b {
            settings.players.b = PlayerStrength::new(settings.players.b.name.clone(), strength)?;
        }

        Ok(settings)
    }
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(overrides: &Overrides, output: Option<&PathBuf>) -> Result<()> {
    let settings = overrides.settings()?;
    let runner = TournamentRunner::new(settings.search, settings.tournament);
    let result = runner.run(&settings.players.a, &settings.players.b)?;

    result.print_report();

    if let Some(path) = output {
        result
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!("Results written to {}", path.display());
    }

    Ok(())
}

fn compare(overrides: &Overrides) -> Result<()> {
    let settings = overrides.settings()?;
    let comparison = compare_pruning(
        &settings.search,
        &settings.tournament,
        &settings.players.a,
        &settings.players.b,
    )?;

    println!("=== Pruning comparison (seed {}) ===", comparison.seed);
    println!(
        "{:<10} {:>14} {:>14} {:>10}",
        "Search", "Mean leaves", "Mean nodes", "Ratio"
    );
    println!(
        "{:<10} {:>14.2} {:>14.2} {:>10.3}",
        "minimax",
        comparison.full.mean_leaves_evaluated,
        comparison.full.mean_nodes_visited,
        comparison.full.pruning_ratio
    );
    println!(
        "{:<10} {:>14.2} {:>14.2} {:>10.3}",
        "alphabeta",
        comparison.pruned.mean_leaves_evaluated,
        comparison.pruned.mean_nodes_visited,
        comparison.pruned.pruning_ratio
    );
    println!("Leaf evaluations saved: {:.1}%", comparison.leaves_saved * 100.0);
    if !comparison.consistent {
        anyhow::bail!("pruned and unpruned searches chose different moves");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "info" });

    match &cli.command {
        Command::Run { overrides, output } => run(overrides, output.as_ref()),
        Command::Compare { overrides } => compare(overrides),
    }
}
