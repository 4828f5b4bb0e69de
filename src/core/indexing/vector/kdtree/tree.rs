// src/core/indexing/vector/kdtree/tree.rs

//! Defines the core KD-Tree structures: `KdNode` and `KdTree`.

use std::cmp::Ordering;
use std::fmt;

use super::builder::build_kdtree;
use super::error::KdTreeError;
use super::point::KdPoint;
use super::search::{find_nearest, Neighbor};

/// Represents a node in the KD-Tree.
///
/// Every node stores exactly one point, the median of its subtree along the
/// node's splitting axis. The axis is not stored: it is `depth % dimension`.
#[derive(Debug, Clone)]
pub struct KdNode<P> {
    pub point: P,
    pub left: Option<Box<KdNode<P>>>,
    pub right: Option<Box<KdNode<P>>>,
}

impl<P> KdNode<P> {
    pub fn leaf(point: P) -> Self {
        KdNode { point, left: None, right: None }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path, counting this node.
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        1 + left.max(right)
    }
}

/// Represents a KD-Tree.
///
/// The tree owns its points outright and is never modified after construction,
/// so shared references may be handed to any number of reader threads.
#[derive(Debug, Clone)]
pub struct KdTree<P> {
    pub(super) root: Option<Box<KdNode<P>>>,
    pub(super) dimension: usize, // Dimensionality of the points indexed by this tree.
    pub(super) len: usize,
}

impl<P> KdTree<P> {
    /// Creates a new, empty KD-Tree for a given dimension.
    /// Populated trees come from [`KdTree::build`] or [`build_kdtree`].
    pub fn new(dimension: usize) -> Self {
        KdTree { root: None, dimension, len: 0 }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&KdNode<P>> {
        self.root.as_deref()
    }

    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Pre-order traversal over every stored point.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter { stack: self.root.as_deref().into_iter().collect() }
    }

    /// Sets the root node of the tree. Primarily used by the builder.
    pub(super) fn set_root(&mut self, root_node: KdNode<P>, len: usize) {
        self.root = Some(Box::new(root_node));
        self.len = len;
    }
}

impl<P: KdPoint> KdTree<P> {
    /// Builds a tree from a borrowed collection, leaving the caller's points untouched.
    pub fn build(points: &[P], dimension: usize) -> Result<Self, KdTreeError> {
        build_kdtree(points.to_vec(), dimension)
    }

    /// Builds a tree that takes ownership of `points`.
    pub fn from_points(points: Vec<P>, dimension: usize) -> Result<Self, KdTreeError> {
        build_kdtree(points, dimension)
    }

    /// Returns the stored point closest to `query`.
    pub fn nearest(&self, query: &P) -> Result<&P, KdTreeError> {
        find_nearest(self, query).map(|neighbor| neighbor.point)
    }

    /// Like [`KdTree::nearest`], also reporting the squared distance.
    pub fn nearest_neighbor(&self, query: &P) -> Result<Neighbor<'_, P>, KdTreeError> {
        find_nearest(self, query)
    }

    /// Exact-match lookup following the construction comparator.
    pub fn contains(&self, point: &P) -> bool {
        if point.dimension() != self.dimension {
            return false;
        }
        let mut depth = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match point.cmp_axis(&node.point, depth % self.dimension) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
            depth += 1;
        }
        false
    }
}

/// Iterator returned by [`KdTree::iter`].
pub struct Iter<'a, P> {
    stack: Vec<&'a KdNode<P>>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<&'a P> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.point)
    }
}

impl<'a, P> IntoIterator for &'a KdTree<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Iter<'a, P> {
        self.iter()
    }
}

impl<P: fmt::Display> fmt::Display for KdTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KdTree (dimension {}, {} points)", self.dimension, self.len)?;
        match self.root.as_deref() {
            Some(root) => write_node(f, root, "", 0, self.dimension),
            None => writeln!(f, "<empty>"),
        }
    }
}

fn write_node<P: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &KdNode<P>,
    label: &str,
    depth: usize,
    dimension: usize,
) -> fmt::Result {
    writeln!(
        f,
        "{:indent$}{}{} [axis {}]",
        "",
        label,
        node.point,
        depth % dimension,
        indent = depth * 2
    )?;
    if let Some(left) = node.left.as_deref() {
        write_node(f, left, "L: ", depth + 1, dimension)?;
    }
    if let Some(right) = node.right.as_deref() {
        write_node(f, right, "R: ", depth + 1, dimension)?;
    }
    Ok(())
}
