//! In-memory workspace
//!
//! Used by the command-line front end and by tests. It behaves like a host
//! project: layers are kept in registration order and switching the active
//! frame reprojects the visible extent.

use log::{debug, warn};

use super::{Layer, LayerId, MapView, Workspace};
use crate::coordinate::{CoordinateTransformer, Rectangle, ReferenceFrame};

/// Workspace that keeps everything in memory
#[derive(Debug, Clone)]
pub struct MemoryWorkspace {
    frame: ReferenceFrame,
    view: MapView,
    layers: Vec<(LayerId, Layer)>,
    next_id: LayerId,
}

impl MemoryWorkspace {
    /// Create an empty workspace in `frame`, showing `view`
    pub fn new(frame: ReferenceFrame, view: MapView) -> Self {
        MemoryWorkspace {
            frame,
            view,
            layers: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of registered layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl Default for MemoryWorkspace {
    /// Target frame, showing the whole of the Netherlands on a 1000 x 1000 surface
    fn default() -> Self {
        MemoryWorkspace::new(
            ReferenceFrame::target(),
            MapView::new(Rectangle::new(0.0, 300_000.0, 300_000.0, 620_000.0), 1000, 1000),
        )
    }
}

impl Workspace for MemoryWorkspace {
    fn active_frame(&self) -> ReferenceFrame {
        self.frame
    }

    fn set_active_frame(&mut self, frame: ReferenceFrame) {
        if frame == self.frame {
            return;
        }

        match CoordinateTransformer.transform_rect(&self.view.extent, &self.frame, &frame) {
            Ok(extent) => self.view.extent = extent,
            Err(e) => warn!("Keeping view extent after frame switch: {}", e),
        }
        debug!("Workspace frame changed from {} to {}", self.frame.code(), frame.code());
        self.frame = frame;
    }

    fn view(&self) -> MapView {
        self.view
    }

    fn set_visible_extent(&mut self, extent: Rectangle) {
        self.view.extent = extent;
    }

    fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = self.next_id;
        self.next_id += 1;
        debug!("Adding layer #{} '{}'", id, layer.name());
        self.layers.push((id, layer));
        id
    }

    fn remove_layer(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.layers.iter().position(|(layer_id, _)| *layer_id == id)?;
        let (_, layer) = self.layers.remove(index);
        debug!("Removed layer #{} '{}'", id, layer.name());
        Some(layer)
    }

    fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers
            .iter()
            .find(|(layer_id, _)| *layer_id == id)
            .map(|(_, layer)| layer)
    }

    fn layers(&self) -> Vec<(LayerId, &Layer)> {
        self.layers.iter().map(|(id, layer)| (*id, layer)).collect()
    }
}
