//! Shared constants
//!
//! Named values used across capture, estimation and export, replacing
//! magic numbers with descriptive names.

/// Reference frame constants
pub mod frame {
    /// EPSG code of the fixed target frame (Amersfoort / RD New)
    pub const TARGET_EPSG: u32 = 28992;

    /// Frame code as used in WMTS requests and layer definitions
    pub const TARGET_CODE: &str = "EPSG:28992";

    pub const WGS84_EPSG: u32 = 4326;
    pub const WEB_MERCATOR_EPSG: u32 = 3857;
}

/// Export sizing constants
pub mod export {
    /// Hard ceiling for the width and for the height of an export, in pixels
    pub const MAX_EDGE_PX: u32 = 12_000;

    /// Working buffer size per pixel (RGBA)
    pub const BYTES_PER_PIXEL: u64 = 4;

    /// Smallest ground resolution callers may pass, in meters per pixel
    pub const MIN_RESOLUTION: f64 = 0.01;

    /// Resolution offered when nothing else was chosen
    pub const DEFAULT_RESOLUTION: f64 = 0.25;

    /// Suggested file name for an export
    pub const DEFAULT_FILE_NAME: &str = "luchtfoto.png";

    /// World file extension written next to PNG exports
    pub const WORLD_FILE_EXTENSION: &str = "pgw";

    /// Image file extension of exports
    pub const IMAGE_EXTENSION: &str = "png";
}

/// Resolution slider range, in hundredths of a meter per pixel
pub mod slider {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 200;
}

/// Workspace layer naming and provider kinds
pub mod layers {
    /// Name of the single project region layer
    pub const REGION_LAYER_NAME: &str = "Projectgebied (RD)";

    /// Provider kind of remote tile service layers
    pub const REMOTE_PROVIDER: &str = "wms";

    /// Provider kind of in-memory vector layers
    pub const MEMORY_PROVIDER: &str = "memory";

    /// Outline width of the region layer, in millimeters
    pub const REGION_STROKE_WIDTH: f64 = 1.2;
}

/// Default service used for exports
pub const DEFAULT_SERVICE: &str = "luchtfoto";
