//! Axis-aligned rectangle used for regions, extents and view windows

use std::fmt;

use super::point::Point;
use crate::errors::{QInfraError, QInfraResult};

/// An axis-aligned box; `min_x <= max_x` and `min_y <= max_y` always hold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl Rectangle {
    /// Create a new rectangle, reordering the bounds when given swapped
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rectangle {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// Create the rectangle spanned by two opposite corners
    ///
    /// The corners may come in any order, which is what a drag gesture
    /// produces when the pointer moves up or to the left of the start.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Rectangle::new(a.x, a.y, b.x, b.y)
    }

    /// Smallest rectangle containing every point
    ///
    /// # Returns
    /// `None` when `points` is empty
    pub fn envelope(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut rect = Rectangle::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            rect.min_x = rect.min_x.min(p.x);
            rect.min_y = rect.min_y.min(p.y);
            rect.max_x = rect.max_x.max(p.x);
            rect.max_y = rect.max_y.max(p.y);
        }
        Some(rect)
    }

    /// Parse a rectangle from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> QInfraResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(QInfraError::InvalidInput(
                "Bounding box must have 4 comma-separated values".to_string(),
            ));
        }

        let mut values = [0.0f64; 4];
        for (slot, (part, name)) in values
            .iter_mut()
            .zip(parts.iter().zip(["min_x", "min_y", "max_x", "max_y"]))
        {
            *slot = part.trim().parse::<f64>().map_err(|_| {
                QInfraError::InvalidInput(format!("Invalid {} value: '{}'", name, part.trim()))
            })?;
        }

        Ok(Rectangle::new(values[0], values[1], values[2], values[3]))
    }

    /// Get the width of the rectangle
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the rectangle
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the rectangle covers no area (a click without a drag)
    pub fn is_degenerate(&self) -> bool {
        self.area() <= 0.0
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Check if this rectangle contains a point (edges included)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x &&
            point.y >= self.min_y && point.y <= self.max_y
    }

    /// Check if the two rectangles overlap (touching edges count)
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.min_x <= other.max_x && other.min_x <= self.max_x &&
            self.min_y <= other.max_y && other.min_y <= self.max_y
    }

    /// Smallest rectangle covering both `self` and `other`
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// The four corners as a closed ring, clockwise from the upper-left corner
    pub fn ring(&self) -> [Point; 5] {
        let upper_left = Point::new(self.min_x, self.max_y);
        [
            upper_left,
            Point::new(self.max_x, self.max_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.min_x, self.min_y),
            upper_left,
        ]
    }

    /// Compare bounds within an absolute tolerance
    pub fn approx_eq(&self, other: &Rectangle, tolerance: f64) -> bool {
        (self.min_x - other.min_x).abs() <= tolerance &&
            (self.min_y - other.min_y).abs() <= tolerance &&
            (self.max_x - other.max_x).abs() <= tolerance &&
            (self.max_y - other.max_y).abs() <= tolerance
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}
