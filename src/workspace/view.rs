//! Map view: the visible extent and the display surface showing it

use crate::coordinate::{Point, Rectangle};

/// The visible map extent and the pixel size of the surface it is drawn on
///
/// Display coordinates have their origin in the upper-left corner with
/// rows growing downwards; map coordinates have Y growing northwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// Visible extent in the workspace's active frame
    pub extent: Rectangle,
    /// Width of the display surface in pixels
    pub width_px: u32,
    /// Height of the display surface in pixels
    pub height_px: u32,
}

impl MapView {
    pub fn new(extent: Rectangle, width_px: u32, height_px: u32) -> Self {
        MapView { extent, width_px: width_px.max(1), height_px: height_px.max(1) }
    }

    /// Map units per display pixel along X
    pub fn units_per_pixel_x(&self) -> f64 {
        self.extent.width() / self.width_px as f64
    }

    /// Map units per display pixel along Y
    pub fn units_per_pixel_y(&self) -> f64 {
        self.extent.height() / self.height_px as f64
    }

    /// Convert a display position to map coordinates
    pub fn to_map(&self, display: Point) -> Point {
        Point::new(
            self.extent.min_x + display.x * self.units_per_pixel_x(),
            self.extent.max_y - display.y * self.units_per_pixel_y(),
        )
    }

    /// Convert map coordinates to a display position
    pub fn to_display(&self, map: Point) -> Point {
        Point::new(
            (map.x - self.extent.min_x) / self.units_per_pixel_x(),
            (self.extent.max_y - map.y) / self.units_per_pixel_y(),
        )
    }
}
