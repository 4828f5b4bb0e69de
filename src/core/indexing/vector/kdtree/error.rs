// src/core/indexing/vector/kdtree/error.rs

use std::fmt;

/// Custom error types for KD-Tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    /// A nearest-neighbor query was issued against a tree holding no points.
    EmptyTree(String),
    /// Point or query dimensionality disagrees with the tree's dimension.
    DimensionMismatch(String),
    /// A splitting axis outside `0..dimension` was requested.
    AxisOutOfBounds(String),
    /// A selection rank outside `0..len` was requested.
    RankOutOfBounds(String),
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdTreeError::EmptyTree(msg) => write!(f, "KD-Tree Empty: {}", msg),
            KdTreeError::DimensionMismatch(msg) => write!(f, "KD-Tree Dimension Mismatch: {}", msg),
            KdTreeError::AxisOutOfBounds(msg) => write!(f, "KD-Tree Axis Out Of Bounds: {}", msg),
            KdTreeError::RankOutOfBounds(msg) => write!(f, "KD-Tree Rank Out Of Bounds: {}", msg),
        }
    }
}

impl std::error::Error for KdTreeError {}
