//! Georeferenced raster export
//!
//! Size estimation, world file georeferencing, the render and source
//! collaborators, and the pipeline tying them together.

pub mod estimator;
pub mod georef;
pub mod offline;
pub mod pipeline;
pub mod render;
pub mod source;
#[cfg(test)]
mod tests;

pub use self::estimator::{estimate, pixel_dimensions, Estimate};
pub use self::georef::{sidecar_path, GeoreferencingRecord};
pub use self::offline::OfflineRaster;
pub use self::pipeline::{ExportOutcome, ExportPipeline, ExportRequest, ExportResult, OutputTarget};
pub use self::render::{RenderRequest, Renderer, SourceLoader};
pub use self::source::{add_background, find_or_add_source};
