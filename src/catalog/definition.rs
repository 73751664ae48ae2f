//! Service definitions and request-string construction

use std::collections::BTreeMap;

use crate::constants::frame;
use crate::errors::{QInfraError, QInfraResult};

/// Which remote layer(s) a service offers
#[derive(Debug, Clone, PartialEq)]
pub enum LayerSelection {
    /// One fixed layer identifier
    Single(String),
    /// Variant key -> layer identifier, with the key used by default
    Variants {
        layers: BTreeMap<String, String>,
        default: String,
    },
}

/// Immutable catalog entry for one remote tile service
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDefinition {
    /// Catalog key ("luchtfoto")
    pub key: String,
    /// Human label given to layers created from this service
    pub label: String,
    /// Base request URL, ending in '?'
    pub url: String,
    /// Image MIME type requested from the service
    pub format: String,
    pub description: String,
    /// Lowercase substring used to recognize existing layers of this service
    pub keyword: String,
    pub layers: LayerSelection,
}

/// A service with its variant resolved to a concrete remote layer
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedService {
    pub service: String,
    /// Variant key in effect, `None` for single-layer services
    pub variant: Option<String>,
    /// Remote layer identifier
    pub layer: String,
    pub label: String,
    pub keyword: String,
    /// Full request-parameter string handed to the source provider
    pub request: String,
}

impl ResolvedService {
    /// Token identifying references created from this service/variant
    pub fn identity(&self) -> String {
        match &self.variant {
            Some(variant) => format!("{}/{}", self.service, variant),
            None => self.service.clone(),
        }
    }
}

impl ServiceDefinition {
    /// Variant keys offered by this service, empty for single-layer services
    pub fn variant_keys(&self) -> Vec<&str> {
        match &self.layers {
            LayerSelection::Single(_) => Vec::new(),
            LayerSelection::Variants { layers, .. } => layers.keys().map(String::as_str).collect(),
        }
    }

    /// All remote layer identifiers referenced by this definition
    pub fn layer_identifiers(&self) -> Vec<&str> {
        match &self.layers {
            LayerSelection::Single(layer) => vec![layer.as_str()],
            LayerSelection::Variants { layers, .. } => layers.values().map(String::as_str).collect(),
        }
    }

    /// Pick the layer for `variant`
    ///
    /// Unknown or absent variants fall back to the declared default.
    /// Returns the variant key in effect and the layer identifier.
    pub fn select_layer(&self, variant: Option<&str>) -> QInfraResult<(Option<&str>, &str)> {
        match &self.layers {
            LayerSelection::Single(layer) => Ok((None, layer.as_str())),
            LayerSelection::Variants { layers, default } => variant
                .and_then(|v| layers.get_key_value(v))
                .or_else(|| layers.get_key_value(default.as_str()))
                .map(|(key, layer)| (Some(key.as_str()), layer.as_str()))
                .ok_or_else(|| QInfraError::Configuration(format!(
                    "Default variant '{}' of service '{}' is not one of its variants", default, self.key))),
        }
    }

    /// Build the request-parameter string for `layer`
    pub fn request_string(&self, layer: &str) -> String {
        format!(
            "url={}&service=WMTS&request=GetCapabilities&layers={}&tileMatrixSet={}&format={}&styles=default",
            self.url, layer, frame::TARGET_CODE, self.format
        )
    }

    /// Layer label for the given variant
    pub fn label_for(&self, variant: Option<&str>) -> String {
        match (variant, &self.layers) {
            (Some(v), LayerSelection::Variants { layers, .. }) if layers.len() > 1 => {
                format!("{} [{}]", self.label, v)
            }
            _ => self.label.clone(),
        }
    }
}
