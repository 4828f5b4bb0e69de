#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_possible_wrap)]
#![warn(clippy::cast_sign_loss)]
#![forbid(unsafe_code)]
#![warn(clippy::module_inception, clippy::wildcard_imports, clippy::correctness, clippy::perf, clippy::style, clippy::complexity)]

//! # Tessera: nearest-neighbor lookup over K-dimensional points
//!
//! `tessera` builds a balanced KD-Tree once over a fixed set of points and answers
//! single-nearest-neighbor queries against it. It is the matching core of a photo
//! mosaic: candidate tiles and target samples are reduced to points in the same
//! color space, and each sample is paired with its closest tile.
//!
//! - Median-of-axis construction via quickselect, so the tree is always balanced
//! - Exact Euclidean search with hyperplane pruning and deterministic tie-breaking
//! - Dimensionality chosen at runtime (`Point`) or compile time (`[T; N]`)
//! - `KdTreeIndex` for points that carry a payload, configured from TOML
//!
//! ```
//! use tessera::{KdTree, Point};
//!
//! let points = vec![
//!     Point::from([0.0, 0.0]),
//!     Point::from([10.0, 10.0]),
//!     Point::from([2.0, 1.0]),
//!     Point::from([8.0, 9.0]),
//! ];
//! let tree = KdTree::build(&points, 2).unwrap();
//! assert_eq!(*tree.nearest(&Point::from([1.0, 1.0])).unwrap(), Point::from([2.0, 1.0]));
//! ```

pub mod core;

// Re-export key types for easier use by library consumers
pub use crate::core::common::TesseraError;
pub use crate::core::config::{Config, ConfigBuilder};
pub use crate::core::indexing::vector::kdtree::{
    build_kdtree, find_nearest, linear_scan_nearest, select, KdPoint, KdTree, KdTreeError,
    KdTreeIndex, Match, Neighbor, Point,
};
pub use crate::core::indexing::vector::{LinearScanIndex, NearestNeighborIndex};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, TesseraError>;
