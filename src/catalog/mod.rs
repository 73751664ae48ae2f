//! Remote service catalog
//!
//! The catalog is read from `services.toml`, embedded at build time and
//! parsed once. Alternative catalogs can be loaded from disk. After loading
//! it is never mutated, so it is shared without locking.

mod capabilities;
mod definition;
#[cfg(test)]
mod tests;

pub use self::capabilities::{CapabilityLayer, CapabilityReport, Capabilities};
pub use self::definition::{LayerSelection, ResolvedService, ServiceDefinition};

use std::collections::BTreeMap;
use std::fs;

use lazy_static::lazy_static;
use log::{debug, error, warn};

use crate::errors::{QInfraError, QInfraResult};

lazy_static! {
    // Parse the embedded catalog on first use
    static ref BUILTIN_CATALOG: ServiceCatalog = {
        let content = include_str!("../../services.toml");
        ServiceCatalog::from_str(content).unwrap_or_else(|e| {
            error!("Failed to parse built-in service catalog: {}", e);
            ServiceCatalog::default()
        })
    };
}

/// Static registry of remote tile services keyed by service name
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    services: BTreeMap<String, ServiceDefinition>,
}

impl ServiceCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> &'static ServiceCatalog {
        &BUILTIN_CATALOG
    }

    /// Parse a catalog from a TOML string
    pub fn from_str(content: &str) -> QInfraResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| QInfraError::Configuration(format!("Failed to parse catalog TOML: {}", e)))?;

        let table = toml_value.get("services")
            .and_then(|v| v.as_table())
            .ok_or_else(|| QInfraError::Configuration("Catalog has no [services] table".to_string()))?;

        let mut services = BTreeMap::new();
        for (key, value) in table {
            let definition = Self::parse_service(key, value)?;
            debug!("Loaded service '{}' with layers {:?}", key, definition.layer_identifiers());
            services.insert(key.clone(), definition);
        }

        Ok(ServiceCatalog { services })
    }

    /// Load a catalog from a TOML file
    pub fn from_file(path: &str) -> QInfraResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn parse_service(key: &str, value: &toml::Value) -> QInfraResult<ServiceDefinition> {
        let field = |name: &str| -> QInfraResult<String> {
            value.get(name)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| QInfraError::Configuration(
                    format!("Service '{}' is missing string field '{}'", key, name)))
        };

        let layers = if let Some(variants) = value.get("variants").and_then(|v| v.as_table()) {
            let mut layers = BTreeMap::new();
            for (variant, layer) in variants {
                let layer = layer.as_str().ok_or_else(|| QInfraError::Configuration(
                    format!("Variant '{}' of service '{}' must be a string", variant, key)))?;
                layers.insert(variant.clone(), layer.to_string());
            }
            if layers.is_empty() {
                return Err(QInfraError::Configuration(format!("Service '{}' has no variants", key)));
            }
            let default = field("default_variant")?;
            if !layers.contains_key(&default) {
                return Err(QInfraError::Configuration(format!(
                    "Default variant '{}' of service '{}' is not one of its variants", default, key)));
            }
            LayerSelection::Variants { layers, default }
        } else {
            LayerSelection::Single(field("layer")?)
        };

        Ok(ServiceDefinition {
            key: key.to_string(),
            label: field("label")?,
            url: field("url")?,
            format: field("format")?,
            description: field("description").unwrap_or_default(),
            keyword: field("keyword").unwrap_or_else(|_| key.to_string()).to_lowercase(),
            layers,
        })
    }

    /// Service names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.services.keys().map(String::as_str).collect()
    }

    pub fn get(&self, service: &str) -> Option<&ServiceDefinition> {
        self.services.get(service)
    }

    /// Look up a service, treating an unknown name as a configuration error
    pub fn definition(&self, service: &str) -> QInfraResult<&ServiceDefinition> {
        self.services.get(service).ok_or_else(|| {
            QInfraError::Configuration(format!("Unknown service: {}", service))
        })
    }

    /// Resolve `service`/`variant` to a concrete layer and request string
    pub fn resolve(&self, service: &str, variant: Option<&str>) -> QInfraResult<ResolvedService> {
        let definition = self.definition(service)?;
        let (variant_key, layer) = definition.select_layer(variant)?;

        if let (Some(requested), Some(used)) = (variant, variant_key) {
            if requested != used {
                warn!("Unknown variant '{}' for service '{}', using '{}'", requested, service, used);
            }
        }

        Ok(ResolvedService {
            service: definition.key.clone(),
            variant: variant_key.map(str::to_string),
            layer: layer.to_string(),
            label: definition.label_for(variant_key),
            keyword: definition.keyword.clone(),
            request: definition.request_string(layer),
        })
    }

    /// Compare a service's layers against a parsed capabilities document
    pub fn check_capabilities(&self, service: &str, capabilities: &Capabilities) -> QInfraResult<CapabilityReport> {
        let definition = self.definition(service)?;
        Ok(CapabilityReport::build(definition, capabilities))
    }
}
