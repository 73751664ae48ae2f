//! World file (six-parameter affine) georeferencing
//!
//! Values refer to pixel centers, hence the half-pixel offset of the upper
//! left coordinate.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::export;
use crate::coordinate::{Point, Rectangle};
use crate::errors::{QInfraError, QInfraResult};

/// Affine georeferencing written next to an exported image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoreferencingRecord {
    pub pixel_size_x: f64,
    pub rotation_y: f64,
    pub rotation_x: f64,
    /// Negative for north-up images
    pub pixel_size_y: f64,
    pub upper_left_x: f64,
    pub upper_left_y: f64,
}

impl GeoreferencingRecord {
    /// Record for `rect` rendered at `width_px` x `height_px`
    pub fn from_extent(rect: &Rectangle, width_px: u32, height_px: u32) -> Self {
        let pixel_size_x = rect.width() / width_px.max(1) as f64;
        let pixel_size_y = -rect.height() / height_px.max(1) as f64;

        GeoreferencingRecord {
            pixel_size_x,
            rotation_y: 0.0,
            rotation_x: 0.0,
            pixel_size_y,
            upper_left_x: rect.min_x + pixel_size_x / 2.0,
            upper_left_y: rect.max_y + pixel_size_y / 2.0,
        }
    }

    /// Parse the six-line world file text
    pub fn parse(content: &str) -> QInfraResult<Self> {
        let values = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse::<f64>()
                    .map_err(|_| QInfraError::InvalidInput(format!("Invalid world file value: '{}'", line)))
            })
            .collect::<QInfraResult<Vec<f64>>>()?;

        if values.len() != 6 {
            return Err(QInfraError::InvalidInput(format!(
                "World file must contain 6 values, found {}",
                values.len()
            )));
        }

        Ok(GeoreferencingRecord {
            pixel_size_x: values[0],
            rotation_y: values[1],
            rotation_x: values[2],
            pixel_size_y: values[3],
            upper_left_x: values[4],
            upper_left_y: values[5],
        })
    }

    pub fn from_file(path: &Path) -> QInfraResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Map coordinate of the center of pixel (`col`, `row`)
    pub fn pixel_center(&self, col: f64, row: f64) -> Point {
        Point::new(
            self.upper_left_x + col * self.pixel_size_x + row * self.rotation_x,
            self.upper_left_y + col * self.rotation_y + row * self.pixel_size_y,
        )
    }

    /// Fractional pixel position of a map coordinate, ignoring rotation
    pub fn pixel_at(&self, point: &Point) -> (f64, f64) {
        (
            (point.x - self.upper_left_x) / self.pixel_size_x,
            (point.y - self.upper_left_y) / self.pixel_size_y,
        )
    }

    /// Extent covered by an image of `width_px` x `height_px` pixels
    pub fn extent(&self, width_px: u32, height_px: u32) -> Rectangle {
        let left = self.upper_left_x - self.pixel_size_x / 2.0;
        let top = self.upper_left_y - self.pixel_size_y / 2.0;
        Rectangle::new(
            left,
            top + self.pixel_size_y * height_px as f64,
            left + self.pixel_size_x * width_px as f64,
            top,
        )
    }
}

/// Decimal text of a world file value; whole numbers keep one decimal
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for GeoreferencingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in [
            self.pixel_size_x,
            self.rotation_y,
            self.rotation_x,
            self.pixel_size_y,
            self.upper_left_x,
            self.upper_left_y,
        ] {
            writeln!(f, "{}", format_value(value))?;
        }
        Ok(())
    }
}

/// World file path belonging to `image_path`
///
/// A `.png` extension (any case) is replaced, any other path gets the world
/// file extension appended.
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    let is_png = image_path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(export::IMAGE_EXTENSION));

    if is_png {
        image_path.with_extension(export::WORLD_FILE_EXTENSION)
    } else {
        let mut path = image_path.as_os_str().to_owned();
        path.push(".");
        path.push(export::WORLD_FILE_EXTENSION);
        PathBuf::from(path)
    }
}
