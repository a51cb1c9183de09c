//! Fixed-shape binary game tree.
//!
//! The tree is never materialised. A node is identified by the sequence of
//! child indices leading to it from the root, and every structural query is
//! a function of that path and the configured depth.

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::error::ConfigError;

/// Which side is to move at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    /// The role on the next ply.
    pub fn opponent(self) -> Role {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }
}

/// Path of child indices from the root. The root is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(Vec<u8>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Number of moves from the root.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.0.len() as u32
    }

    /// This path extended by one move.
    pub fn child(&self, index: u8) -> Self {
        let mut moves = Vec::with_capacity(self.0.len() + 1);
        moves.extend_from_slice(&self.0);
        moves.push(index);
        Self(moves)
    }

    pub fn moves(&self) -> &[u8] {
        &self.0
    }

    pub fn into_moves(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for NodePath {
    fn from(moves: Vec<u8>) -> Self {
        Self(moves)
    }
}

/// Structural view of the tree a [`SearchConfig`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTree {
    max_depth: u32,
    branching_factor: u32,
}

impl GameTree {
    /// Builds the tree shape, failing on a depth of zero or non-binary branching.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            max_depth: config.max_depth,
            branching_factor: config.branching_factor,
        })
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn branching_factor(&self) -> u32 {
        self.branching_factor
    }

    /// True iff the path has reached the configured depth.
    #[inline]
    pub fn is_leaf(&self, path: &NodePath) -> bool {
        path.depth() == self.max_depth
    }

    /// Child paths in visitation order (index 0 first). Empty for a leaf.
    pub fn children(&self, path: &NodePath) -> Vec<NodePath> {
        if self.is_leaf(path) {
            return Vec::new();
        }
        (0..self.branching_factor)
            .map(|i| path.child(i as u8))
            .collect()
    }

    /// Maximizing on even depths, minimizing on odd ones.
    #[inline]
    pub fn role_at(&self, path: &NodePath) -> Role {
        role_at_depth(path.depth())
    }

    /// Position of a leaf among all leaves, left to right.
    ///
    /// Reads the path as a base-`branching_factor` number, first move most
    /// significant.
    pub fn leaf_index(&self, path: &NodePath) -> u64 {
        leaf_index_of(path.moves())
    }

    /// Leaves in the whole tree: `2^max_depth`.
    pub fn leaf_count(&self) -> u64 {
        self.subtree_leaves(0)
    }

    /// Nodes in the whole tree: `2^(max_depth + 1) - 1`.
    pub fn node_count(&self) -> u64 {
        self.subtree_nodes(0)
    }

    /// Leaves below a node at `depth`.
    #[inline]
    pub fn subtree_leaves(&self, depth: u32) -> u64 {
        1u64 << (self.max_depth - depth)
    }

    /// Nodes in the subtree rooted at a node at `depth`, the node included.
    #[inline]
    pub fn subtree_nodes(&self, depth: u32) -> u64 {
        u64::MAX >> (63 - (self.max_depth - depth))
    }
}

#[inline]
pub(crate) fn role_at_depth(depth: u32) -> Role {
    if depth % 2 == 0 {
        Role::Maximizing
    } else {
        Role::Minimizing
    }
}

#[inline]
pub(crate) fn leaf_index_of(moves: &[u8]) -> u64 {
    moves
        .iter()
        .fold(0u64, |acc, &m| (acc << 1) | m as u64)
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
