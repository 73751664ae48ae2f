//! Local georeferenced image standing in for the remote service
//!
//! Reads an image and its world file and answers render requests by
//! nearest-neighbour sampling in the image's own frame. Pixels outside the
//! image come out transparent.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use log::{debug, info, warn};

use crate::constants::layers;
use crate::coordinate::{Point, Rectangle};
use crate::errors::{QInfraError, QInfraResult};
use crate::export::georef::{sidecar_path, GeoreferencingRecord};
use crate::export::render::{RenderRequest, Renderer, SourceLoader};
use crate::workspace::SourceReference;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Georeferenced raster held in memory
pub struct OfflineRaster {
    path: PathBuf,
    image: RgbaImage,
    georef: GeoreferencingRecord,
}

impl OfflineRaster {
    pub fn new(path: PathBuf, image: RgbaImage, georef: GeoreferencingRecord) -> Self {
        OfflineRaster { path, image, georef }
    }

    /// Load `path` and the world file next to it
    pub fn open(path: &Path) -> QInfraResult<Self> {
        let world_file = sidecar_path(path);
        let georef = GeoreferencingRecord::from_file(&world_file).map_err(|e| {
            QInfraError::InvalidInput(format!("No usable world file at {}: {}", world_file.display(), e))
        })?;

        let image = image::open(path)
            .map_err(|e| QInfraError::InvalidInput(format!("Cannot read image {}: {}", path.display(), e)))?
            .to_rgba8();

        info!(
            "Opened offline raster {} ({}x{} px, {} m/px)",
            path.display(),
            image.width(),
            image.height(),
            georef.pixel_size_x
        );
        Ok(Self::new(path.to_path_buf(), image, georef))
    }

    /// Extent covered by the raster
    pub fn extent(&self) -> Rectangle {
        self.georef.extent(self.image.width(), self.image.height())
    }

    /// Nearest source pixel for a map coordinate, if it falls inside
    fn sample(&self, point: &Point) -> Option<&Rgba<u8>> {
        let (col, row) = self.georef.pixel_at(point);
        let (col, row) = (col.round(), row.round());
        if col < 0.0 || row < 0.0 || col >= self.image.width() as f64 || row >= self.image.height() as f64 {
            return None;
        }
        Some(self.image.get_pixel(col as u32, row as u32))
    }
}

impl Renderer for OfflineRaster {
    fn render(&self, request: &RenderRequest<'_>) -> QInfraResult<RgbaImage> {
        if request.width_px == 0 || request.height_px == 0 {
            return Err(QInfraError::RenderFailed("Empty output size".to_string()));
        }
        if request.layers.iter().any(|layer| !layer.valid) {
            return Err(QInfraError::RenderFailed("Render job contains an invalid layer".to_string()));
        }

        let target = GeoreferencingRecord::from_extent(&request.extent, request.width_px, request.height_px);
        if !self.extent().intersects(&request.extent) {
            warn!("Requested extent {} lies outside {}", request.extent, self.path.display());
        }

        debug!(
            "Rendering {}x{} px from {} for {}",
            request.width_px,
            request.height_px,
            self.path.display(),
            request.extent
        );

        let output = RgbaImage::from_fn(request.width_px, request.height_px, |col, row| {
            let center = target.pixel_center(col as f64, row as f64);
            self.sample(&center).copied().unwrap_or(TRANSPARENT)
        });
        Ok(output)
    }
}

impl SourceLoader for OfflineRaster {
    fn load(&self, request: &str, label: &str) -> SourceReference {
        debug!("Serving '{}' from {}", label, self.path.display());
        SourceReference {
            label: label.to_string(),
            provider: layers::REMOTE_PROVIDER.to_string(),
            request: request.to_string(),
            identity: None,
            valid: true,
            extent: Some(self.extent()),
        }
    }
}
