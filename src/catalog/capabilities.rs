//! WMTS capabilities checking
//!
//! Parses the `Contents/Layer` part of a WMTS GetCapabilities document and
//! reports which catalog layers a service does not actually offer, or does
//! not offer in the target frame.

use std::fs;

use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::definition::ServiceDefinition;
use crate::constants::frame;
use crate::errors::{QInfraError, QInfraResult};

/// One layer advertised by a capabilities document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CapabilityLayer {
    pub identifier: String,
    /// Tile matrix sets linked to this layer ("EPSG:28992", ...)
    pub tile_matrix_sets: Vec<String>,
}

/// The parts of a capabilities document the catalog check needs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Capabilities {
    pub layers: Vec<CapabilityLayer>,
}

impl Capabilities {
    /// Parse a GetCapabilities XML document
    pub fn parse(xml: &str) -> QInfraResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut path: Vec<String> = Vec::new();
        let mut layers: Vec<CapabilityLayer> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    if name == "Layer" && path.last().map(String::as_str) == Some("Contents") {
                        layers.push(CapabilityLayer::default());
                    }
                    path.push(name);
                }
                Ok(Event::End(_)) => {
                    path.pop();
                }
                Ok(Event::Text(text)) => {
                    let value = text.unescape()
                        .map_err(|e| QInfraError::InvalidInput(format!("Bad text in capabilities: {}", e)))?
                        .trim()
                        .to_string();
                    let Some(layer) = layers.last_mut() else { continue };

                    if path_ends_with(&path, &["Contents", "Layer", "Identifier"]) {
                        layer.identifier = value;
                    } else if path_ends_with(&path, &["Layer", "TileMatrixSetLink", "TileMatrixSet"]) {
                        layer.tile_matrix_sets.push(value);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(QInfraError::InvalidInput(format!(
                        "Malformed capabilities document at byte {}: {}",
                        reader.buffer_position(), e
                    )));
                }
                _ => {}
            }
        }

        debug!("Parsed {} layers from capabilities document", layers.len());
        Ok(Capabilities { layers })
    }

    /// Read and parse a capabilities document from disk
    pub fn from_file(path: &str) -> QInfraResult<Self> {
        let xml = fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    pub fn layer(&self, identifier: &str) -> Option<&CapabilityLayer> {
        self.layers.iter().find(|l| l.identifier == identifier)
    }
}

fn path_ends_with(path: &[String], suffix: &[&str]) -> bool {
    path.len() >= suffix.len() &&
        path[path.len() - suffix.len()..].iter().zip(suffix).all(|(a, b)| a == b)
}

/// Outcome of checking one service against its capabilities
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityReport {
    pub service: String,
    /// Catalog layers the service does not advertise
    pub missing_layers: Vec<String>,
    /// Layers that exist but are not offered in the target frame
    pub missing_frame: Vec<String>,
}

impl CapabilityReport {
    pub(crate) fn build(definition: &ServiceDefinition, capabilities: &Capabilities) -> Self {
        let mut missing_layers = Vec::new();
        let mut missing_frame = Vec::new();

        for identifier in definition.layer_identifiers() {
            match capabilities.layer(identifier) {
                None => missing_layers.push(identifier.to_string()),
                Some(layer) if !layer.tile_matrix_sets.iter().any(|s| s == frame::TARGET_CODE) => {
                    missing_frame.push(identifier.to_string())
                }
                Some(_) => {}
            }
        }

        CapabilityReport {
            service: definition.key.clone(),
            missing_layers,
            missing_frame,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.missing_layers.is_empty() && self.missing_frame.is_empty()
    }
}
