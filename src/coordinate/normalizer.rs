//! Reference frame normalization
//!
//! Persisted geometry and export computations always use the target frame.
//! These two helpers are the only places where the core switches frames.

use log::info;

use super::crs::ReferenceFrame;
use super::rect::Rectangle;
use super::transform::CoordinateTransformer;
use crate::errors::QInfraResult;
use crate::workspace::Workspace;

/// Switch `workspace` to the target frame if it uses another one
///
/// Idempotent: calling it on a workspace already in the target frame does
/// nothing.
pub fn ensure_frame(workspace: &mut dyn Workspace) {
    let target = ReferenceFrame::target();
    let current = workspace.active_frame();
    if current != target {
        info!("Switching workspace frame from {} to {}", current.code(), target.code());
        workspace.set_active_frame(target);
    }
}

/// Re-express `rect` (given in `source_frame`) in the target frame
///
/// Returns the input unchanged when it already is in the target frame.
/// A transform failure is propagated: a rectangle that cannot be expressed
/// in the target frame is unusable.
pub fn to_target_frame(rect: Rectangle, source_frame: ReferenceFrame) -> QInfraResult<Rectangle> {
    let target = ReferenceFrame::target();
    if source_frame == target {
        return Ok(rect);
    }
    CoordinateTransformer.transform_rect(&rect, &source_frame, &target)
}
