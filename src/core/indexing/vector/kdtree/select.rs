// src/core/indexing/vector/kdtree/select.rs

//! Order-statistic selection (quickselect) under the axis-then-lexicographic comparator.

use log::trace;
use std::cmp::Ordering;

use super::error::KdTreeError;
use super::point::KdPoint;

/// Returns the point that would sit at rank `k` if `points` were sorted with
/// [`KdPoint::cmp_axis`] on `axis`. The caller's slice is left untouched.
pub fn select<P: KdPoint>(points: &[P], axis: usize, k: usize) -> Result<P, KdTreeError> {
    let mut working = points.to_vec();
    let chosen = select_in_place(&mut working, axis, k)?;
    Ok(chosen.clone())
}

/// Reorders `points` so that rank `k` lands at index `k`, no point before it
/// compares greater on `axis`, and no point after it compares less.
///
/// Exact copies of the selected point may end up on either side.
///
/// Runs in expected linear time. The loop narrows a window instead of recursing, so
/// stack usage is constant regardless of how unlucky the pivots are.
pub fn select_in_place<P: KdPoint>(
    points: &mut [P],
    axis: usize,
    k: usize,
) -> Result<&P, KdTreeError> {
    if k >= points.len() {
        return Err(KdTreeError::RankOutOfBounds(format!(
            "Rank {} requested from {} points.",
            k,
            points.len()
        )));
    }
    let dimension = points[0].dimension();
    if axis >= dimension {
        return Err(KdTreeError::AxisOutOfBounds(format!(
            "Axis {} is invalid for points of dimension {}.",
            axis, dimension
        )));
    }

    // Rank k always lies inside points[lo..hi].
    let mut lo = 0;
    let mut hi = points.len();
    while hi - lo > 1 {
        let pivot = lo + partition(&mut points[lo..hi], axis);
        match k.cmp(&pivot) {
            Ordering::Equal => break,
            Ordering::Less => hi = pivot,
            Ordering::Greater => lo = pivot + 1,
        }
    }
    Ok(&points[k])
}

/// Lomuto partition around the last element of `window`. Returns the pivot's final index.
fn partition<P: KdPoint>(window: &mut [P], axis: usize) -> usize {
    let last = window.len() - 1;
    let mut boundary = 0;
    for j in 0..last {
        if window[j].cmp_axis(&window[last], axis) == Ordering::Less {
            window.swap(boundary, j);
            boundary += 1;
        }
    }
    window.swap(boundary, last);
    trace!("partitioned {} points on axis {} at {}", window.len(), axis, boundary);
    boundary
}
