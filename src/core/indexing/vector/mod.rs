// src/core/indexing/vector/mod.rs

use crate::core::common::TesseraError;
use std::fmt::Debug;

pub mod kdtree;

use kdtree::{linear_scan_nearest, KdPoint, KdTree, KdTreeError};

/// Trait for point indexes capable of nearest-neighbor search.
pub trait NearestNeighborIndex<P: KdPoint>: Debug + Send + Sync {
    /// Returns the name of the index.
    fn name(&self) -> &str;

    /// Returns the dimension of points this index handles.
    fn dimension(&self) -> usize;

    /// Number of stored points, duplicates included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the stored point closest to `query`, ties going to the smaller point.
    /// An empty index reports `KdTreeError::EmptyTree` rather than inventing a point.
    fn nearest(&self, query: &P) -> Result<&P, TesseraError>;
}

impl<P> NearestNeighborIndex<P> for KdTree<P>
where
    P: KdPoint + Debug + Send + Sync,
{
    fn name(&self) -> &str {
        "kdtree"
    }

    fn dimension(&self) -> usize {
        KdTree::dimension(self)
    }

    fn len(&self) -> usize {
        KdTree::len(self)
    }

    fn nearest(&self, query: &P) -> Result<&P, TesseraError> {
        Ok(KdTree::nearest(self, query)?)
    }
}

/// Reference index that answers every query by scanning all points.
#[derive(Debug, Clone)]
pub struct LinearScanIndex<P> {
    dimension: usize,
    points: Vec<P>,
}

impl<P: KdPoint> LinearScanIndex<P> {
    pub fn new(points: Vec<P>, dimension: usize) -> Result<Self, TesseraError> {
        if dimension == 0 {
            return Err(KdTreeError::DimensionMismatch("Dimension cannot be 0.".to_string()).into());
        }
        if let Some(bad) = points.iter().find(|p| p.dimension() != dimension) {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Expected dimension {}, but found point with dimension {}.",
                dimension,
                bad.dimension()
            ))
            .into());
        }
        Ok(Self { dimension, points })
    }
}

impl<P> NearestNeighborIndex<P> for LinearScanIndex<P>
where
    P: KdPoint + Debug + Send + Sync,
{
    fn name(&self) -> &str {
        "linear_scan"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn nearest(&self, query: &P) -> Result<&P, TesseraError> {
        if query.dimension() != self.dimension {
            return Err(KdTreeError::DimensionMismatch(format!(
                "Query dimension {} does not match index dimension {}.",
                query.dimension(),
                self.dimension
            ))
            .into());
        }
        Ok(linear_scan_nearest(&self.points, query)?.point)
    }
}
