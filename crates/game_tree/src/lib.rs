//! Game-tree search engine.
//!
//! Minimax with alpha-beta pruning over a fixed-depth binary tree whose
//! leaves are scored from two players' strengths plus a seeded
//! perturbation. Enabling pruning changes only the search counters, never
//! the root value or the chosen line.
//!
//! ```
//! use game_tree::{search, SearchConfig, SeededPerturbation};
//!
//! let config = SearchConfig::with_depth(5);
//! let source = SeededPerturbation::new(42);
//! let result = search(&config, 9.0, 8.0, &source).unwrap();
//! assert_eq!(result.path.len(), 5);
//! ```

pub mod config;
pub mod error;
pub mod perturbation;
pub mod search;
pub mod tree;
pub mod utility;

pub use config::*;
pub use error::*;
pub use perturbation::*;
pub use search::*;
pub use tree::{GameTree, NodePath, Role};
pub use utility::*;
