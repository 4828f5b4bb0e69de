pub mod vector;

// Re-export the nearest-neighbor trait for convenience.
pub use vector::NearestNeighborIndex;
