//! Reference frame identification

use std::fmt;

use crate::constants::frame;
use crate::errors::{QInfraError, QInfraResult};

/// Identifier for the planar coordinate systems the core knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceFrame {
    /// Amersfoort / RD New (EPSG:28992), the fixed target frame
    RdNew,
    /// WGS 84 (EPSG:4326)
    WGS84,
    /// Web Mercator (EPSG:3857)
    WebMercator,
    /// Other EPSG code
    Other(u32),
}

impl ReferenceFrame {
    /// The frame all persisted geometry and every export uses
    pub fn target() -> Self {
        ReferenceFrame::RdNew
    }

    /// Get the EPSG code for this frame
    pub fn epsg_code(&self) -> u32 {
        match self {
            ReferenceFrame::RdNew => frame::TARGET_EPSG,
            ReferenceFrame::WGS84 => frame::WGS84_EPSG,
            ReferenceFrame::WebMercator => frame::WEB_MERCATOR_EPSG,
            ReferenceFrame::Other(code) => *code,
        }
    }

    /// Frame code in "EPSG:nnnn" form
    pub fn code(&self) -> String {
        format!("EPSG:{}", self.epsg_code())
    }

    /// Get a description of this frame
    pub fn description(&self) -> String {
        match self {
            ReferenceFrame::RdNew => "Amersfoort / RD New (EPSG:28992)".to_string(),
            ReferenceFrame::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            ReferenceFrame::WebMercator => "Web Mercator (EPSG:3857)".to_string(),
            ReferenceFrame::Other(code) => format!("EPSG:{}", code),
        }
    }

    /// Create a frame from an EPSG code
    pub fn from_epsg(epsg: u32) -> Self {
        match epsg {
            frame::TARGET_EPSG => ReferenceFrame::RdNew,
            frame::WGS84_EPSG => ReferenceFrame::WGS84,
            frame::WEB_MERCATOR_EPSG | 3785 | 900913 => ReferenceFrame::WebMercator,
            _ => ReferenceFrame::Other(epsg),
        }
    }

    /// Parse a frame from a string ("EPSG:28992" or a bare code)
    pub fn from_string(crs_str: &str) -> QInfraResult<Self> {
        let upper = crs_str.trim().to_uppercase();
        let code = upper.strip_prefix("EPSG:").unwrap_or(&upper);

        code.parse::<u32>()
            .map(Self::from_epsg)
            .map_err(|_| QInfraError::InvalidInput(format!("Unsupported CRS format: {}", crs_str)))
    }
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
