// src/core/indexing/vector/kdtree/search.rs

//! Logic for performing nearest-neighbor search in a KD-Tree.

use log::trace;
use std::cmp::Ordering;

use super::error::KdTreeError;
use super::point::{squared_distance, KdPoint, Point};
use super::tree::{KdNode, KdTree};

/// A stored point together with its squared distance to the query.
#[derive(Debug, Clone)]
pub struct Neighbor<'a, P: KdPoint> {
    pub point: &'a P,
    pub distance_sq: P::Distance,
}

impl<'a, P: KdPoint> Neighbor<'a, P> {
    fn measure(point: &'a P, query: &P) -> Self {
        Neighbor { point, distance_sq: squared_distance(point, query) }
    }
}

impl Neighbor<'_, Point> {
    /// Euclidean distance to the query.
    pub fn distance(&self) -> f64 {
        self.distance_sq.sqrt()
    }
}

/// Keeps whichever of the two is closer to the query; on equal distance the
/// smaller point under `Ord` wins.
fn closer<'a, P: KdPoint>(best: Neighbor<'a, P>, candidate: Neighbor<'a, P>) -> Neighbor<'a, P> {
    let replace = match candidate.distance_sq.partial_cmp(&best.distance_sq) {
        Some(Ordering::Less) => true,
        Some(Ordering::Greater) => false,
        _ => candidate.point < best.point,
    };
    if replace {
        candidate
    } else {
        best
    }
}

/// Finds the point in `tree` closest to `query` by Euclidean distance.
///
/// Ties in distance resolve to the smaller point under `Ord`, so the answer is the
/// same for any tree built from the same multiset of points.
///
/// # Errors
/// * `DimensionMismatch` if the query's dimension differs from the tree's.
/// * `EmptyTree` if the tree holds no points.
pub fn find_nearest<'a, P: KdPoint>(
    tree: &'a KdTree<P>,
    query: &P,
) -> Result<Neighbor<'a, P>, KdTreeError> {
    if query.dimension() != tree.dimension {
        return Err(KdTreeError::DimensionMismatch(format!(
            "Query dimension {} does not match tree dimension {}.",
            query.dimension(),
            tree.dimension
        )));
    }
    let root = tree.root.as_deref().ok_or_else(|| {
        KdTreeError::EmptyTree("Nearest-neighbor query against a tree with no points.".to_string())
    })?;

    Ok(search_recursive(root, query, 0, tree.dimension))
}

fn search_recursive<'a, P: KdPoint>(
    node: &'a KdNode<P>,
    query: &P,
    depth: usize,
    dimension: usize,
) -> Neighbor<'a, P> {
    let axis = depth % dimension;
    let mut best = Neighbor::measure(&node.point, query);

    let (near, far) = if query.cmp_axis(&node.point, axis) == Ordering::Less {
        (node.left.as_deref(), node.right.as_deref())
    } else {
        (node.right.as_deref(), node.left.as_deref())
    };

    if let Some(near) = near {
        best = closer(best, search_recursive(near, query, depth + 1, dimension));
    }

    if let Some(far) = far {
        // Hypersphere of radius sqrt(best.distance_sq) around the query reaches the
        // splitting plane iff the squared gap on this axis is within it.
        let gap = query.axis_gap(&node.point, axis);
        if gap * gap <= best.distance_sq {
            best = closer(best, search_recursive(far, query, depth + 1, dimension));
        } else {
            trace!("pruned far subtree at depth {} on axis {}", depth, axis);
        }
    }

    best
}

/// Brute-force nearest neighbor over any collection of points, using the same
/// distance and tie rule as [`find_nearest`].
pub fn linear_scan_nearest<'a, P, I>(points: I, query: &P) -> Result<Neighbor<'a, P>, KdTreeError>
where
    P: KdPoint + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut points = points.into_iter();
    let first = points.next().ok_or_else(|| {
        KdTreeError::EmptyTree("Nearest-neighbor query against an empty point set.".to_string())
    })?;
    if query.dimension() != first.dimension() {
        return Err(KdTreeError::DimensionMismatch(format!(
            "Query dimension {} does not match point dimension {}.",
            query.dimension(),
            first.dimension()
        )));
    }
    Ok(points.fold(Neighbor::measure(first, query), |best, point| {
        closer(best, Neighbor::measure(point, query))
    }))
}
