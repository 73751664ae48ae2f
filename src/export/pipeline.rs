//! Region export pipeline
//!
//! Renders the region from a remote source at a fixed ground resolution
//! and writes the image plus its world file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::{debug, info, warn};

use crate::catalog::ServiceCatalog;
use crate::constants::{export, DEFAULT_SERVICE};
use crate::coordinate::{ensure_frame, Rectangle, ReferenceFrame};
use crate::errors::{QInfraError, QInfraResult};
use crate::export::estimator::pixel_dimensions;
use crate::export::georef::{sidecar_path, GeoreferencingRecord};
use crate::export::render::{RenderRequest, Renderer, SourceLoader};
use crate::export::source::find_or_add_source;
use crate::utils::file_utils::{ensure_directory, write_atomically};
use crate::workspace::Workspace;

/// Where the exported image goes
pub enum OutputTarget<'a> {
    /// Fixed path chosen by the caller
    Path(PathBuf),
    /// Ask for a path, given the suggested file name; `None` cancels
    Prompt(&'a dyn Fn(&str) -> Option<PathBuf>),
}

impl OutputTarget<'_> {
    fn choose(&self) -> Option<PathBuf> {
        match self {
            OutputTarget::Path(path) => Some(path.clone()),
            OutputTarget::Prompt(prompt) => prompt(export::DEFAULT_FILE_NAME),
        }
    }
}

/// Parameters of a single export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    /// Region to export, in the target frame
    pub region: Rectangle,
    pub meters_per_pixel: f64,
    pub service: String,
    pub variant: Option<String>,
}

impl ExportRequest {
    /// Export `region` from the default service
    pub fn new(region: Rectangle, meters_per_pixel: f64) -> Self {
        ExportRequest {
            region,
            meters_per_pixel,
            service: DEFAULT_SERVICE.to_string(),
            variant: None,
        }
    }

    pub fn with_service(mut self, service: &str, variant: Option<&str>) -> Self {
        self.service = service.to_string();
        self.variant = variant.map(str::to_string);
        self
    }
}

/// Files written by a completed export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    pub image_path: PathBuf,
    pub world_file_path: PathBuf,
    pub width_px: u32,
    pub height_px: u32,
    pub georef: GeoreferencingRecord,
}

/// Outcome of an export that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Completed(ExportResult),
    /// No output path was chosen; nothing was rendered or written
    Cancelled,
}

/// Runs exports against a service catalog
pub struct ExportPipeline<'a> {
    catalog: &'a ServiceCatalog,
    max_edge_px: u32,
}

impl<'a> ExportPipeline<'a> {
    pub fn new(catalog: &'a ServiceCatalog) -> Self {
        ExportPipeline {
            catalog,
            max_edge_px: export::MAX_EDGE_PX,
        }
    }

    /// Override the pixel ceiling per side
    pub fn with_max_edge(mut self, max_edge_px: u32) -> Self {
        self.max_edge_px = max_edge_px;
        self
    }

    /// Export `request.region`
    ///
    /// Size limits are checked before the source is touched or any file is
    /// written. The output target is consulted before the source reference
    /// is created, so a cancelled export leaves the layers untouched.
    pub fn export(
        &self,
        workspace: &mut dyn Workspace,
        renderer: &dyn Renderer,
        loader: &dyn SourceLoader,
        request: &ExportRequest,
        output: &OutputTarget<'_>,
    ) -> QInfraResult<ExportOutcome> {
        ensure_frame(workspace);
        let region = request.region;

        if region.is_degenerate() {
            return Err(QInfraError::DegenerateRegion);
        }
        if !request.meters_per_pixel.is_finite() || request.meters_per_pixel <= 0.0 {
            return Err(QInfraError::InvalidInput(format!(
                "Resolution must be positive, got {}",
                request.meters_per_pixel
            )));
        }

        let resolved = self.catalog.resolve(&request.service, request.variant.as_deref())?;

        let (width_px, height_px) = pixel_dimensions(&region, request.meters_per_pixel);
        if width_px > self.max_edge_px || height_px > self.max_edge_px {
            return Err(QInfraError::ExportTooLarge {
                width: width_px,
                height: height_px,
                limit: self.max_edge_px,
            });
        }

        let image_path = match output.choose() {
            Some(path) => path,
            None => {
                info!("Export cancelled, no output path chosen");
                return Ok(ExportOutcome::Cancelled);
            }
        };

        let (_, source) = find_or_add_source(workspace, loader, &resolved)?;

        if let Some(parent) = image_path.parent() {
            ensure_directory(parent)?;
        }

        info!(
            "Rendering {} at {} m/px: {}x{} px from '{}'",
            region, request.meters_per_pixel, width_px, height_px, source.label
        );
        let layers = [source];
        let image = renderer.render(&RenderRequest {
            frame: ReferenceFrame::target(),
            extent: region,
            width_px,
            height_px,
            layers: &layers,
        })?;

        if image.width() != width_px || image.height() != height_px {
            return Err(QInfraError::RenderFailed(format!(
                "Renderer returned {}x{} px, expected {}x{} px",
                image.width(),
                image.height(),
                width_px,
                height_px
            )));
        }

        write_image(&image_path, &image)?;

        let georef = GeoreferencingRecord::from_extent(&region, width_px, height_px);
        let world_file_path = sidecar_path(&image_path);
        let text = georef.to_string();
        if let Err(e) = write_atomically(&world_file_path, |writer| writer.write_all(text.as_bytes())) {
            // never leave an image without its world file
            if let Err(remove) = fs::remove_file(&image_path) {
                warn!("Could not remove {}: {}", image_path.display(), remove);
            }
            return Err(e);
        }

        info!("Exported {} and {}", image_path.display(), world_file_path.display());
        Ok(ExportOutcome::Completed(ExportResult {
            image_path,
            world_file_path,
            width_px,
            height_px,
            georef,
        }))
    }
}

/// Encode `image` as PNG at `path`
fn write_image(path: &Path, image: &RgbaImage) -> QInfraResult<()> {
    debug!("Encoding {}x{} px image to {}", image.width(), image.height(), path.display());
    write_atomically(path, |writer| {
        image
            .write_to(writer, ImageFormat::Png)
            .map_err(io::Error::other)
    })
}
