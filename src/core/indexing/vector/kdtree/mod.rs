// src/core/indexing/vector/kdtree/mod.rs

//! KD-Tree implementation for nearest-neighbor lookup.

// Re-export key components for easier use.
pub use self::builder::build_kdtree;
pub use self::error::KdTreeError;
pub use self::point::{squared_distance, KdPoint, Point};
pub use self::search::{find_nearest, linear_scan_nearest, Neighbor};
pub use self::select::{select, select_in_place};
pub use self::tree::{Iter, KdNode, KdTree};

use crate::core::common::TesseraError;
use crate::core::config::Config;
use log::debug;
use std::cmp::Ordering;

// Modules within the kdtree module
mod builder;
mod error;
mod point;
mod search;
mod select;
mod tree;

#[cfg(test)]
mod tests;

/// A stored point tagged with its position in the input, so duplicate points keep
/// distinct payloads. Ordered by point, then slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    point: Point,
    slot: usize,
}

impl Entry {
    /// Queries sort after every stored entry with the same coordinates.
    fn query(point: &Point) -> Self {
        Entry { point: point.clone(), slot: usize::MAX }
    }
}

impl KdPoint for Entry {
    type Scalar = f64;
    type Distance = f64;

    fn dimension(&self) -> usize {
        self.point.dimension()
    }

    fn coord(&self, axis: usize) -> f64 {
        self.point[axis]
    }

    fn axis_gap(&self, other: &Self, axis: usize) -> f64 {
        self.point.axis_gap(&other.point, axis)
    }

    fn cmp_axis(&self, other: &Self, axis: usize) -> Ordering {
        self.point[axis]
            .total_cmp(&other.point[axis])
            .then_with(|| self.cmp(other))
    }
}

/// Result of a [`KdTreeIndex`] lookup.
#[derive(Debug)]
pub struct Match<'a, V> {
    /// Position of the matched entry in the input given to [`KdTreeIndex::build`].
    pub slot: usize,
    pub point: &'a Point,
    pub value: &'a V,
    pub distance: f64,
}

/// `KdTreeIndex`: a KD-Tree over points that each carry a payload.
///
/// Built once from `(Point, V)` pairs; each query returns the payload whose point is
/// nearest. Among identical points the one supplied first wins.
#[derive(Debug)]
pub struct KdTreeIndex<V> {
    config: Config,
    tree: KdTree<Entry>,
    values: Vec<V>,
}

impl<V> KdTreeIndex<V> {
    /// Builds the index under `config`, consuming `entries`.
    pub fn build(config: Config, entries: Vec<(Point, V)>) -> Result<Self, TesseraError> {
        config.validate()?;

        let mut points = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for (slot, (point, value)) in entries.into_iter().enumerate() {
            points.push(Entry { point, slot });
            values.push(value);
        }

        let tree = build_kdtree(points, config.dimension)?;
        debug!(
            "index '{}' ready with {} entries (linear scan below {})",
            config.index_name,
            values.len(),
            config.linear_scan_threshold
        );
        Ok(Self { config, tree, values })
    }

    pub fn name(&self) -> &str {
        &self.config.index_name
    }

    pub fn dimension(&self) -> usize {
        self.tree.dimension()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the entry nearest to `query`.
    ///
    /// # Errors
    /// `TesseraError::Index` wrapping `EmptyTree` for an empty index, or
    /// `DimensionMismatch` when the query has the wrong number of coordinates.
    pub fn nearest(&self, query: &Point) -> Result<Match<'_, V>, TesseraError> {
        let probe = Entry::query(query);
        let neighbor = if self.len() < self.config.linear_scan_threshold {
            linear_scan_nearest(&self.tree, &probe)?
        } else {
            find_nearest(&self.tree, &probe)?
        };

        let entry = neighbor.point;
        let value = self.values.get(entry.slot).ok_or_else(|| {
            TesseraError::invalid_input(format!("No payload stored for slot {}.", entry.slot))
        })?;
        Ok(Match {
            slot: entry.slot,
            point: &entry.point,
            value,
            distance: neighbor.distance_sq.sqrt(),
        })
    }
}
