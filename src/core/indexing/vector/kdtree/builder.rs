// src/core/indexing/vector/kdtree/builder.rs

//! Logic for building a balanced KD-Tree from a set of points.

use log::debug;

use super::error::KdTreeError;
use super::point::KdPoint;
use super::select::select_in_place;
use super::tree::{KdNode, KdTree};

/// Builds a KD-Tree from a list of points, taking ownership of them.
///
/// At each level the median (rank `(len - 1) / 2`) along the level's axis becomes
/// the node; points ranked before it form the left subtree and points ranked after
/// it the right. Because the split is by rank, sibling subtrees differ in size by at
/// most one and the height stays `ceil(log2(len + 1))` even when every point is a
/// duplicate.
///
/// # Arguments
/// * `points`: The points to index. Duplicates are kept as separate entries.
/// * `dimension`: The dimensionality every point must have.
///
/// # Returns
/// A `Result` containing the built `KdTree` or a `KdTreeError`.
pub fn build_kdtree<P: KdPoint>(points: Vec<P>, dimension: usize) -> Result<KdTree<P>, KdTreeError> {
    if dimension == 0 {
        return Err(KdTreeError::DimensionMismatch("Dimension cannot be 0.".to_string()));
    }

    // Validate all points have the correct dimension
    if let Some(bad) = points.iter().find(|p| p.dimension() != dimension) {
        return Err(KdTreeError::DimensionMismatch(format!(
            "Expected dimension {}, but found point with dimension {}.",
            dimension,
            bad.dimension()
        )));
    }

    let mut tree = KdTree::new(dimension);
    let len = points.len();
    if let Some(root_node) = build_subtree(points, dimension, 0)? {
        tree.set_root(*root_node, len);
    }
    debug!(
        "built KD-Tree over {} points (dimension {}, height {})",
        len,
        dimension,
        tree.height()
    );
    Ok(tree)
}

/// Recursively builds the subtree for `points` at `depth`; `None` when there are no points.
fn build_subtree<P: KdPoint>(
    mut points: Vec<P>,
    dimension: usize,
    depth: usize,
) -> Result<Option<Box<KdNode<P>>>, KdTreeError> {
    if points.is_empty() {
        return Ok(None);
    }

    let axis = depth % dimension;
    let median_idx = (points.len() - 1) / 2;
    select_in_place(&mut points, axis, median_idx)?;

    let right_points = points.split_off(median_idx + 1);
    let pivot = points.pop().ok_or_else(|| {
        KdTreeError::RankOutOfBounds(format!("No pivot at rank {} on axis {}.", median_idx, axis))
    })?;

    let left = build_subtree(points, dimension, depth + 1)?;
    let right = build_subtree(right_points, dimension, depth + 1)?;

    Ok(Some(Box::new(KdNode { point: pivot, left, right })))
}
