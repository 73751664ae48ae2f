//! WMTS capabilities check command

use clap::ArgMatches;
use log::{info, warn};

use crate::catalog::{Capabilities, CapabilityReport, ServiceCatalog};
use crate::commands::command_traits::Command;
use crate::commands::load_catalog;
use crate::constants::frame::TARGET_CODE;
use crate::errors::{QInfraError, QInfraResult};

/// Command comparing catalog services with a GetCapabilities document
pub struct CapabilitiesCommand {
    catalog: ServiceCatalog,
    capabilities_file: String,
    /// Only check this service; all services when `None`
    service: Option<String>,
}

impl CapabilitiesCommand {
    pub fn new(args: &ArgMatches) -> QInfraResult<Self> {
        let capabilities_file = args.get_one::<String>("check-capabilities")
            .cloned()
            .ok_or_else(|| QInfraError::InvalidInput("Missing capabilities file".to_string()))?;

        Ok(CapabilitiesCommand {
            catalog: load_catalog(args)?,
            capabilities_file,
            service: args.get_one::<String>("service").cloned(),
        })
    }

    /// Reports for the selected services
    pub fn reports(&self, capabilities: &Capabilities) -> QInfraResult<Vec<CapabilityReport>> {
        let services: Vec<&str> = match &self.service {
            Some(service) => vec![service.as_str()],
            None => self.catalog.names(),
        };
        services
            .into_iter()
            .map(|service| self.catalog.check_capabilities(service, capabilities))
            .collect()
    }
}

impl Command for CapabilitiesCommand {
    fn execute(&self) -> QInfraResult<()> {
        let capabilities = Capabilities::from_file(&self.capabilities_file)?;
        info!("Capabilities document lists {} layers", capabilities.layers.len());

        for report in self.reports(&capabilities)? {
            if report.is_ok() {
                println!("{}: OK", report.service);
                continue;
            }
            warn!("Service '{}' does not match its capabilities", report.service);
            println!("{}:", report.service);
            for layer in &report.missing_layers {
                println!("  missing layer: {}", layer);
            }
            for layer in &report.missing_frame {
                println!("  {} not offered in {}", layer, TARGET_CODE);
            }
        }
        Ok(())
    }
}
