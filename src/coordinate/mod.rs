//! Coordinate handling for map regions
//!
//! This module provides the rectangle and point types, reference frame
//! identification, transformations between the frames the core knows, and
//! normalization into the fixed target frame.

mod crs;
mod normalizer;
mod point;
mod rect;
mod transform;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::crs::ReferenceFrame;
pub use self::normalizer::{ensure_frame, to_target_frame};
pub use self::point::Point;
pub use self::rect::Rectangle;
pub use self::transform::CoordinateTransformer;
