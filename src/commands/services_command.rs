//! Service catalog listing command

use clap::ArgMatches;
use log::info;

use crate::catalog::ServiceCatalog;
use crate::commands::command_traits::Command;
use crate::commands::load_catalog;
use crate::errors::QInfraResult;

/// Command printing every catalog service with its variants
pub struct ServicesCommand {
    catalog: ServiceCatalog,
}

impl ServicesCommand {
    pub fn new(args: &ArgMatches) -> QInfraResult<Self> {
        Ok(ServicesCommand {
            catalog: load_catalog(args)?,
        })
    }

    /// Human readable catalog overview
    pub fn describe(&self) -> QInfraResult<String> {
        let mut out = String::new();
        for name in self.catalog.names() {
            let definition = self.catalog.definition(name)?;
            let resolved = self.catalog.resolve(name, None)?;

            out.push_str(&format!("{} - {}\n", name, definition.label));
            if !definition.description.is_empty() {
                out.push_str(&format!("  {}\n", definition.description));
            }
            let variants = definition.variant_keys();
            if !variants.is_empty() {
                let listed: Vec<String> = variants
                    .iter()
                    .map(|v| if Some(*v) == resolved.variant.as_deref() { format!("{}*", v) } else { v.to_string() })
                    .collect();
                out.push_str(&format!("  Variants: {}\n", listed.join(", ")));
            }
            out.push_str(&format!("  Request: {}\n", resolved.request));
        }
        Ok(out)
    }
}

impl Command for ServicesCommand {
    fn execute(&self) -> QInfraResult<()> {
        info!("Listing {} services", self.catalog.names().len());
        print!("{}", self.describe()?);
        Ok(())
    }
}
