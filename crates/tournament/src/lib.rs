//! Tournament runner for game-tree search
//!
//! This crate provides infrastructure for:
//! - Running a series of games with alternating maximizer roles
//! - Aggregating wins, draws and search-efficiency statistics
//! - Comparing pruned and unpruned search on identical trees
//!
//! # Usage
//!
//! ```bash
//! # Four games at depth 5 with a fixed seed
//! cargo run -p tournament -- run --games 4 --depth 5 --seed 42
//!
//! # Measure how many leaves alpha-beta saves
//! cargo run -p tournament -- compare --depth 8 --games 20
//! ```

mod comparison;
mod results;
mod runner;
mod settings;

pub use comparison::*;
pub use results::*;
pub use runner::*;
pub use settings::*;
