//! Degree-1 objects and polygons over exact points.
//!
//! - `Point`: exact coordinates plus the small collaborator surface the
//!   conic engine needs (midpoint, distance, alignment, collinearity).
//! - `Line`: `a·x + b·y + k = 0`, equality on the induced line.
//! - `Segment`: two distinct points, its line, exact squared length.
//! - `Triangle`, `Angle`: law-of-cosines angles and classification.

mod line;
mod point;
mod segment;
mod triangle;

pub use line::{Line, Slope};
pub use point::{collinear, cross, pairwise_distinct, Point};
pub use segment::Segment;
pub use triangle::{Angle, Triangle};

#[cfg(test)]
mod tests;
