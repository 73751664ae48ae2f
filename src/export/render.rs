//! Render and source collaborators
//!
//! The host's map renderer and its remote layer provider sit behind these
//! two traits. Both calls are synchronous: the export blocks until the
//! collaborator returns.

use image::RgbaImage;

use crate::coordinate::{Rectangle, ReferenceFrame};
use crate::errors::QInfraResult;
use crate::workspace::SourceReference;

/// One synchronous render job
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest<'a> {
    /// Destination frame of the rendered image
    pub frame: ReferenceFrame,
    /// Map extent to cover, in `frame`
    pub extent: Rectangle,
    pub width_px: u32,
    pub height_px: u32,
    /// Layers to draw, bottom to top
    pub layers: &'a [SourceReference],
}

/// Produces an image of exactly the requested pixel size
pub trait Renderer {
    /// Render `request` and return the finished image
    ///
    /// # Errors
    /// `RenderFailed` when the job fails
    fn render(&self, request: &RenderRequest<'_>) -> QInfraResult<RgbaImage>;
}

/// Turns a request-parameter string into a source reference
pub trait SourceLoader {
    /// Build a reference for `request`, labelled `label`
    ///
    /// A provider that rejects the request returns a reference with
    /// `valid == false` rather than an error.
    fn load(&self, request: &str, label: &str) -> SourceReference;
}
