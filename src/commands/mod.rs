//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod services_command;
pub mod estimate_command;
pub mod export_command;
pub mod capabilities_command;

pub use command_traits::{Command, CommandFactory};
pub use services_command::ServicesCommand;
pub use estimate_command::EstimateCommand;
pub use export_command::ExportCommand;
pub use capabilities_command::CapabilitiesCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::info;

use crate::catalog::ServiceCatalog;
use crate::coordinate::{Rectangle, ReferenceFrame};
use crate::errors::{QInfraError, QInfraResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct QInfraCommandFactory;

impl QInfraCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        QInfraCommandFactory
    }
}

impl Default for QInfraCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for QInfraCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> QInfraResult<Box<dyn Command + 'a>> {
        if args.get_flag("export") {
            Ok(Box::new(ExportCommand::new(args, logger)?))
        } else if args.get_flag("estimate") {
            Ok(Box::new(EstimateCommand::new(args)?))
        } else if args.get_one::<String>("check-capabilities").is_some() {
            Ok(Box::new(CapabilitiesCommand::new(args)?))
        } else {
            // Default to listing the catalog
            Ok(Box::new(ServicesCommand::new(args)?))
        }
    }
}

/// Command-line definition shared by the binary and its tests
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("QInfra")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Capture a project area and export georeferenced aerial imagery for it")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records and the export audit trail to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .help("Service catalog TOML file to use instead of the built-in one")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("services")
                .long("services")
                .help("List the service catalog and its request strings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("estimate")
                .long("estimate")
                .help("Estimate the output size for a region")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Export a region as PNG with a world file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check-capabilities")
                .long("check-capabilities")
                .help("Check catalog layers against a WMTS GetCapabilities document")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("bbox")
                .long("bbox")
                .help("Region bounding box (minx,miny,maxx,maxy)")
                .value_name("BBOX")
                .required(false),
        )
        .arg(
            Arg::new("crs")
                .long("crs")
                .help("EPSG code of the bounding box coordinates (28992, 4326 or 3857)")
                .value_name("CODE")
                .default_value("28992")
                .required(false),
        )
        .arg(
            Arg::new("resolution")
                .short('r')
                .long("resolution")
                .help("Ground resolution in meters per pixel")
                .value_name("METERS")
                .default_value("0.25")
                .required(false),
        )
        .arg(
            Arg::new("service")
                .short('s')
                .long("service")
                .help("Service to export from")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("variant")
                .long("variant")
                .help("Service variant (e.g. 8cm, 25cm, pastel)")
                .value_name("VARIANT")
                .required(false),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .help("Georeferenced image (with world file) rendered in place of the remote service")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output PNG file")
                .value_name("FILE")
                .default_value(crate::constants::export::DEFAULT_FILE_NAME)
                .required(false),
        )
}

/// Catalog named by `--catalog`, or the built-in one
pub(crate) fn load_catalog(args: &ArgMatches) -> QInfraResult<ServiceCatalog> {
    match args.get_one::<String>("catalog") {
        Some(path) => {
            info!("Loading service catalog from {}", path);
            ServiceCatalog::from_file(path)
        }
        None => Ok(ServiceCatalog::builtin().clone()),
    }
}

/// Parse `--bbox` and `--crs` into a rectangle and its frame
pub(crate) fn parse_region(args: &ArgMatches) -> QInfraResult<(Rectangle, ReferenceFrame)> {
    let bbox_str = args.get_one::<String>("bbox")
        .ok_or_else(|| QInfraError::InvalidInput("Missing --bbox (minx,miny,maxx,maxy)".to_string()))?;
    let rect = Rectangle::from_string(bbox_str)?;

    let frame = match args.get_one::<String>("crs") {
        Some(crs) => ReferenceFrame::from_string(crs)?,
        None => ReferenceFrame::target(),
    };
    info!("Region {} in {}", rect, frame.code());
    Ok((rect, frame))
}

/// Parse `--resolution` in meters per pixel
pub(crate) fn parse_resolution(args: &ArgMatches) -> QInfraResult<f64> {
    match args.get_one::<String>("resolution") {
        Some(value) => value.parse::<f64>()
            .map_err(|_| QInfraError::InvalidInput(format!("Invalid resolution: {}", value))),
        None => Ok(crate::constants::export::DEFAULT_RESOLUTION),
    }
}
