//! Point structure for representing coordinates

/// A point in either display (pixel) or map coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (easting in projected frames, column on a display)
    pub x: f64,
    /// Y coordinate (northing in projected frames, row on a display)
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
