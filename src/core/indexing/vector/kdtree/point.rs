// src/core/indexing/vector/kdtree/point.rs

//! Point capability required by the KD-Tree, plus the concrete point types it ships with.

use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

/// A point in a K-dimensional space that the KD-Tree can index.
///
/// Implementors supply a total order over whole points (`Ord`), which is used only to
/// break ties, and positional access to coordinates. Per-axis gaps are reported in
/// a separate `Distance` type, wide enough that summing their squares cannot overflow.
pub trait KdPoint: Ord + Clone {
    /// Coordinate type.
    type Scalar: Copy + PartialOrd + fmt::Debug;

    /// Type of axis gaps and squared distances.
    type Distance: Num + Copy + PartialOrd + fmt::Debug;

    /// Number of coordinates this point carries.
    fn dimension(&self) -> usize;

    /// Coordinate along `axis`. Callers guarantee `axis < self.dimension()`.
    fn coord(&self, axis: usize) -> Self::Scalar;

    /// `|self[axis] - other[axis]|`, widened to `Self::Distance`.
    fn axis_gap(&self, other: &Self, axis: usize) -> Self::Distance;

    /// Orders two points by their coordinate on `axis`, falling back to the full
    /// point order when those coordinates are equal.
    ///
    /// This comparator drives selection, construction and the near/far decision in
    /// search. It only returns `Ordering::Equal` for points that are equal under `Ord`.
    fn cmp_axis(&self, other: &Self, axis: usize) -> Ordering {
        self.coord(axis)
            .partial_cmp(&other.coord(axis))
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.cmp(other))
    }
}

/// Squared Euclidean distance between two points of equal dimension.
pub fn squared_distance<P: KdPoint>(a: &P, b: &P) -> P::Distance {
    (0..a.dimension()).fold(<P::Distance as Zero>::zero(), |acc, axis| {
        let gap = a.axis_gap(b, axis);
        acc + gap * gap
    })
}

/// A point with a runtime-chosen number of `f64` coordinates.
///
/// Points are ordered lexicographically using `f64::total_cmp`, so every value
/// (including `NaN` and signed zeros) has a well-defined position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Euclidean distance to `other`. Only meaningful for equal dimensions.
    pub fn distance(&self, other: &Point) -> f64 {
        squared_distance(self, other).sqrt()
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| self.coords.len().cmp(&other.coords.len()))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl KdPoint for Point {
    type Scalar = f64;
    type Distance = f64;

    fn dimension(&self) -> usize {
        self.coords.len()
    }

    fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    fn axis_gap(&self, other: &Self, axis: usize) -> f64 {
        (self.coords[axis] - other.coords[axis]).abs()
    }

    fn cmp_axis(&self, other: &Self, axis: usize) -> Ordering {
        self.coords[axis]
            .total_cmp(&other.coords[axis])
            .then_with(|| self.cmp(other))
    }
}

// Fixed-dimension integer points, e.g. `[u8; 3]` colors or `[i32; 2]` grid cells.
// Gaps widen to `u128`, so squared distances stay exact for coordinates up to 32 bits.
macro_rules! impl_kd_point_for_int_arrays {
    ($($t:ty),*) => {$(
        impl<const N: usize> KdPoint for [$t; N] {
            type Scalar = $t;
            type Distance = u128;

            fn dimension(&self) -> usize {
                N
            }

            fn coord(&self, axis: usize) -> $t {
                self[axis]
            }

            fn axis_gap(&self, other: &Self, axis: usize) -> u128 {
                u128::from(self[axis].abs_diff(other[axis]))
            }

            fn cmp_axis(&self, other: &Self, axis: usize) -> Ordering {
                self[axis].cmp(&other[axis]).then_with(|| self.cmp(other))
            }
        }
    )*};
}

impl_kd_point_for_int_arrays!(i8, i16, i32, u8, u16, u32);
