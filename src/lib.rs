pub mod errors;
pub mod constants;
pub mod coordinate;
pub mod workspace;
pub mod catalog;
pub mod region;
pub mod export;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::QInfra;
pub use crate::errors::{QInfraError, QInfraResult};

pub use coordinate::{Point, Rectangle, ReferenceFrame, CoordinateTransformer};
pub use catalog::ServiceCatalog;
pub use region::RegionCaptureTool;
pub use export::{ExportOutcome, ExportResult, GeoreferencingRecord, OutputTarget};
pub use workspace::{MemoryWorkspace, Workspace};
