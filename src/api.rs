use log::info;

use crate::catalog::ServiceCatalog;
use crate::constants::{export, layers};
use crate::coordinate::{to_target_frame, Rectangle};
use crate::errors::{QInfraError, QInfraResult};
use crate::export::estimator::{self, clamp_resolution, Estimate};
use crate::export::{
    add_background, ExportOutcome, ExportPipeline, ExportRequest, OutputTarget, Renderer, SourceLoader,
};
use crate::region::{read_bbox, upsert, RegionCaptureTool};
use crate::workspace::{LayerId, Workspace};

/// Main interface to the QInfra library
///
/// Binds the region layer name, the service catalog and the export size
/// limit together, so callers only pass the workspace and collaborators.
pub struct QInfra<'a> {
    catalog: &'a ServiceCatalog,
    region_name: String,
    max_edge_px: u32,
}

impl<'a> QInfra<'a> {
    /// Create an instance working on `catalog`
    pub fn new(catalog: &'a ServiceCatalog) -> Self {
        QInfra {
            catalog,
            region_name: layers::REGION_LAYER_NAME.to_string(),
            max_edge_px: export::MAX_EDGE_PX,
        }
    }

    /// Store the region under another layer name
    pub fn with_region_name(mut self, name: &str) -> Self {
        self.region_name = name.to_string();
        self
    }

    pub fn with_max_edge(mut self, max_edge_px: u32) -> Self {
        self.max_edge_px = max_edge_px;
        self
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        self.catalog
    }

    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    /// Capture tool whose completed drags replace the region layer
    pub fn capture_tool(&self) -> RegionCaptureTool<'_> {
        let name = self.region_name.as_str();
        RegionCaptureTool::new(move |workspace, rect| upsert(workspace, rect, name).map(|_| ()))
    }

    /// Store `rect`, given in the workspace's active frame, as the region
    pub fn set_region(&self, workspace: &mut dyn Workspace, rect: Rectangle) -> QInfraResult<LayerId> {
        let rect = to_target_frame(rect, workspace.active_frame())?;
        upsert(workspace, rect, &self.region_name)
    }

    /// Bounding box of the stored region
    pub fn region(&self, workspace: &dyn Workspace) -> Option<Rectangle> {
        read_bbox(workspace, &self.region_name)
    }

    /// Live size estimate for the stored region
    ///
    /// The resolution is raised to the smallest allowed value first.
    pub fn estimate(&self, workspace: &dyn Workspace, meters_per_pixel: f64) -> Option<Estimate> {
        let region = self.region(workspace);
        estimator::estimate(region.as_ref(), clamp_resolution(meters_per_pixel))
    }

    /// Export the stored region from `service`/`variant`
    ///
    /// # Errors
    /// `NoRegion` when nothing was captured yet, otherwise whatever the
    /// pipeline reports
    pub fn export(
        &self,
        workspace: &mut dyn Workspace,
        renderer: &dyn Renderer,
        loader: &dyn SourceLoader,
        meters_per_pixel: f64,
        service: &str,
        variant: Option<&str>,
        output: &OutputTarget<'_>,
    ) -> QInfraResult<ExportOutcome> {
        let region = self.region(workspace).ok_or(QInfraError::NoRegion)?;
        let request = ExportRequest::new(region, meters_per_pixel).with_service(service, variant);

        let outcome = ExportPipeline::new(self.catalog)
            .with_max_edge(self.max_edge_px)
            .export(workspace, renderer, loader, &request, output)?;

        if let ExportOutcome::Completed(result) = &outcome {
            info!("Region exported to {}", result.image_path.display());
        }
        Ok(outcome)
    }

    /// Add `service`/`variant` as a background map and zoom to it
    pub fn add_background(
        &self,
        workspace: &mut dyn Workspace,
        loader: &dyn SourceLoader,
        service: &str,
        variant: Option<&str>,
    ) -> QInfraResult<LayerId> {
        let resolved = self.catalog.resolve(service, variant)?;
        add_background(workspace, loader, &resolved)
    }
}
