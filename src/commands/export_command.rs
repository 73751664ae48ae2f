//! Region export command
//!
//! Runs the export pipeline against a local georeferenced image, which
//! stands in for the remote service as both renderer and source.

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, warn};

use crate::api::QInfra;
use crate::catalog::ServiceCatalog;
use crate::commands::command_traits::Command;
use crate::commands::{load_catalog, parse_region, parse_resolution};
use crate::constants::{export, DEFAULT_SERVICE};
use crate::coordinate::{Rectangle, ReferenceFrame};
use crate::errors::{QInfraError, QInfraResult};
use crate::export::{ExportOutcome, OfflineRaster, OutputTarget};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::workspace::{MapView, MemoryWorkspace};

/// Command exporting a region to PNG plus world file
pub struct ExportCommand<'a> {
    catalog: ServiceCatalog,
    /// Region as given on the command line
    region: Rectangle,
    /// Frame of `region`
    frame: ReferenceFrame,
    meters_per_pixel: f64,
    service: String,
    variant: Option<String>,
    /// Georeferenced image used as the service
    source: PathBuf,
    output: PathBuf,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExportCommand<'a> {
    /// Create a new export command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Audit log for the finished export
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> QInfraResult<Self> {
        info!("Creating new export command from arguments");

        let catalog = load_catalog(args)?;
        let (region, frame) = parse_region(args)?;
        let meters_per_pixel = parse_resolution(args)?;

        let service = args.get_one::<String>("service")
            .cloned()
            .unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        let variant = args.get_one::<String>("variant").cloned();
        info!("Service: {} (variant {:?})", service, variant);

        let source = args.get_one::<String>("source")
            .map(PathBuf::from)
            .ok_or_else(|| QInfraError::InvalidInput(
                "Missing --source image; exports render from a local georeferenced image".to_string()))?;

        let output = args.get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(export::DEFAULT_FILE_NAME));
        info!("Output file: {}", output.display());

        Ok(ExportCommand {
            catalog,
            region,
            frame,
            meters_per_pixel,
            service,
            variant,
            source,
            output,
            logger,
        })
    }
}

impl Command for ExportCommand<'_> {
    fn execute(&self) -> QInfraResult<()> {
        let raster = OfflineRaster::open(&self.source)?;
        let qinfra = QInfra::new(&self.catalog);

        let mut workspace = MemoryWorkspace::new(self.frame, MapView::new(self.region, 1000, 1000));
        qinfra.set_region(&mut workspace, self.region)?;

        if let Some(estimate) = qinfra.estimate(&workspace, self.meters_per_pixel) {
            println!("Output: {}", estimate);
        }

        let progress = ProgressTracker::new("Rendering export");
        let outcome = qinfra.export(
            &mut workspace,
            &raster,
            &raster,
            self.meters_per_pixel,
            &self.service,
            self.variant.as_deref(),
            &OutputTarget::Path(self.output.clone()),
        );

        match outcome {
            Ok(ExportOutcome::Completed(result)) => {
                progress.finish("Export completed");
                if let Err(e) = self.logger.log_export(&result) {
                    warn!("Could not record export in the log file: {}", e);
                }
                println!("Image: {} ({}x{} px)", result.image_path.display(), result.width_px, result.height_px);
                println!("World file: {}", result.world_file_path.display());
                Ok(())
            }
            Ok(ExportOutcome::Cancelled) => {
                progress.finish("Export cancelled");
                Ok(())
            }
            Err(e) => {
                progress.abandon();
                Err(e)
            }
        }
    }
}
