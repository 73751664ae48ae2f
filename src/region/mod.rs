//! Project region capture and storage

pub mod capture;
pub mod store;
#[cfg(test)]
mod tests;

pub use self::capture::{CaptureCallback, CaptureState, RegionCaptureTool};
pub use self::store::{read_bbox, upsert};
