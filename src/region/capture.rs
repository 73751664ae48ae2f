//! Interactive region capture
//!
//! A drag gesture on the map surface becomes a rectangle in the target
//! frame. The host event loop maps its native pointer events onto
//! [`RegionCaptureTool::press`], [`RegionCaptureTool::move_to`] and
//! [`RegionCaptureTool::release`]; everything here is plain state.

use log::{debug, info};

use crate::coordinate::{to_target_frame, Point, Rectangle};
use crate::errors::QInfraResult;
use crate::workspace::Workspace;

/// Called with the finished rectangle, already in the target frame
pub type CaptureCallback<'a> = Box<dyn FnMut(&mut dyn Workspace, Rectangle) -> QInfraResult<()> + 'a>;

/// Where the tool is in the press/drag/release cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureState {
    /// Waiting for a press
    Idle,
    /// Pointer is down; positions are display coordinates
    Dragging { start: Point, current: Point },
}

/// State machine turning a drag into a region rectangle
pub struct RegionCaptureTool<'a> {
    state: CaptureState,
    preview: Option<Rectangle>,
    on_complete: CaptureCallback<'a>,
}

impl<'a> RegionCaptureTool<'a> {
    /// Create an idle tool that reports finished rectangles to `on_complete`
    pub fn new<F>(on_complete: F) -> Self
    where
        F: FnMut(&mut dyn Workspace, Rectangle) -> QInfraResult<()> + 'a,
    {
        RegionCaptureTool {
            state: CaptureState::Idle,
            preview: None,
            on_complete: Box::new(on_complete),
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Outline to draw, in display coordinates; `None` when nothing is shown
    pub fn preview(&self) -> Option<Rectangle> {
        self.preview
    }

    /// Start a drag at `at`
    ///
    /// A press while already dragging restarts the drag from the new point.
    pub fn press(&mut self, at: Point) {
        debug!("Capture press at ({}, {})", at.x, at.y);
        self.state = CaptureState::Dragging { start: at, current: at };
        self.preview = Some(Rectangle::from_corners(at, at));
    }

    /// Update the preview outline; ignored unless dragging
    pub fn move_to(&mut self, at: Point) {
        if let CaptureState::Dragging { start, .. } = self.state {
            self.state = CaptureState::Dragging { start, current: at };
            self.preview = Some(Rectangle::from_corners(start, at));
        }
    }

    /// Finish the drag at `at`
    ///
    /// Converts the dragged rectangle to map coordinates of the workspace's
    /// view, normalizes it to the target frame and hands it to the callback.
    /// Degenerate rectangles are passed on as well; rejecting them is up to
    /// the callback. The tool is idle again afterwards, also on error.
    ///
    /// # Returns
    /// The rectangle passed to the callback, or `None` if no drag was active
    pub fn release(&mut self, at: Point, workspace: &mut dyn Workspace) -> QInfraResult<Option<Rectangle>> {
        let start = match self.state {
            CaptureState::Dragging { start, .. } => start,
            CaptureState::Idle => return Ok(None),
        };

        self.state = CaptureState::Idle;
        self.preview = None;

        let view = workspace.view();
        let map_rect = Rectangle::from_corners(view.to_map(start), view.to_map(at));
        let rect = to_target_frame(map_rect, workspace.active_frame())?;

        info!("Captured region {} ({:.1} x {:.1} m)", rect, rect.width(), rect.height());
        (self.on_complete)(workspace, rect)?;

        Ok(Some(rect))
    }

    /// Abort any drag in progress without calling back
    pub fn cancel(&mut self) {
        self.state = CaptureState::Idle;
        self.preview = None;
    }
}
