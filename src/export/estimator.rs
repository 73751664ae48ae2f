//! Output size estimation
//!
//! Pure functions shared by the live preview and the export pipeline, so the
//! pixel size shown to the user is always the one that gets rendered.

use std::fmt;

use crate::constants::{export, slider};
use crate::coordinate::Rectangle;

/// Predicted output size for a region at a given ground resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub width_px: u32,
    pub height_px: u32,
    /// Size of the RGBA working buffer, an upper bound for the file size
    pub estimated_bytes: u64,
}

impl Estimate {
    /// Buffer size in mebibytes
    pub fn megabytes(&self) -> f64 {
        self.estimated_bytes as f64 / (1024.0 * 1024.0)
    }

    /// True when either side is above `limit` pixels
    pub fn exceeds(&self, limit: u32) -> bool {
        self.width_px > limit || self.height_px > limit
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~ {} × {} px (~{:.1} MB)", self.width_px, self.height_px, self.megabytes())
    }
}

/// Pixel count for `length` meters at `meters_per_pixel`
///
/// Rounds half away from zero and never goes below one pixel. Values past
/// `u32::MAX` saturate.
fn pixels_for(length: f64, meters_per_pixel: f64) -> u32 {
    ((length / meters_per_pixel).round() as u32).max(1)
}

/// Output pixel size of `rect` at `meters_per_pixel`
///
/// Callers must pass a positive, finite resolution.
pub fn pixel_dimensions(rect: &Rectangle, meters_per_pixel: f64) -> (u32, u32) {
    (
        pixels_for(rect.width(), meters_per_pixel),
        pixels_for(rect.height(), meters_per_pixel),
    )
}

/// Estimate the output size of `rect` at `meters_per_pixel`
///
/// # Returns
/// `None` when there is no region or the resolution is not a positive
/// finite number
pub fn estimate(rect: Option<&Rectangle>, meters_per_pixel: f64) -> Option<Estimate> {
    let rect = rect?;
    if !meters_per_pixel.is_finite() || meters_per_pixel <= 0.0 {
        return None;
    }

    let (width_px, height_px) = pixel_dimensions(rect, meters_per_pixel);
    // Saturates for regions far beyond any export limit
    let estimated_bytes = (width_px as u64)
        .saturating_mul(height_px as u64)
        .saturating_mul(export::BYTES_PER_PIXEL);
    Some(Estimate {
        width_px,
        height_px,
        estimated_bytes,
    })
}

/// Raise `meters_per_pixel` to the smallest allowed resolution
pub fn clamp_resolution(meters_per_pixel: f64) -> f64 {
    if meters_per_pixel.is_nan() {
        return export::MIN_RESOLUTION;
    }
    meters_per_pixel.max(export::MIN_RESOLUTION)
}

/// Resolution for a slider position (hundredths of a meter per pixel)
pub fn slider_to_resolution(value: u32) -> f64 {
    value.clamp(slider::MIN, slider::MAX) as f64 / 100.0
}

/// Slider position closest to `meters_per_pixel`
pub fn resolution_to_slider(meters_per_pixel: f64) -> u32 {
    let value = (meters_per_pixel * 100.0).round();
    if value.is_nan() {
        return slider::MIN;
    }
    (value.max(0.0) as u32).clamp(slider::MIN, slider::MAX)
}
