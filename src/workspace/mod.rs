//! Workspace collaborator
//!
//! The host map environment (project, layer registry and map canvas) is
//! reached only through the [`Workspace`] trait. Every operation that needs
//! it takes an explicit `&mut dyn Workspace` / `&dyn Workspace`, so there is
//! no ambient project singleton.

mod layer;
mod memory;
mod view;

pub use self::layer::{
    Feature, FillStyle, GeometryType, Layer, Polygon, Rgba, SourceReference, VectorLayer,
};
pub use self::memory::MemoryWorkspace;
pub use self::view::MapView;

use crate::coordinate::{Rectangle, ReferenceFrame};

/// Identifier the workspace hands out for each added layer
pub type LayerId = u64;

/// Host project, layer registry and map view
pub trait Workspace {
    /// Frame the project currently works in
    fn active_frame(&self) -> ReferenceFrame;

    /// Switch the project to another frame
    fn set_active_frame(&mut self, frame: ReferenceFrame);

    /// Visible extent of the current map view and the surface showing it
    fn view(&self) -> MapView;

    /// Zoom/pan the current map view to `extent`
    fn set_visible_extent(&mut self, extent: Rectangle);

    /// Register a layer and return its id
    fn add_layer(&mut self, layer: Layer) -> LayerId;

    /// Remove a layer, returning it when it existed
    fn remove_layer(&mut self, id: LayerId) -> Option<Layer>;

    /// Look up a layer by id
    fn layer(&self, id: LayerId) -> Option<&Layer>;

    /// All layers in registration order
    fn layers(&self) -> Vec<(LayerId, &Layer)>;

    /// Ids of layers whose name equals `name` exactly
    fn layers_by_name(&self, name: &str) -> Vec<LayerId> {
        self.layers()
            .into_iter()
            .filter(|(_, layer)| layer.name() == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// Ids of layers of provider kind `provider` whose name contains
    /// `keyword`, compared case-insensitively
    fn layers_by_keyword(&self, provider: &str, keyword: &str) -> Vec<LayerId> {
        let keyword = keyword.to_lowercase();
        self.layers()
            .into_iter()
            .filter(|(_, layer)| {
                layer.provider() == provider && layer.name().to_lowercase().contains(&keyword)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Id of the source reference tagged with identity token `identity`
    fn find_by_identity(&self, identity: &str) -> Option<LayerId> {
        self.layers()
            .into_iter()
            .find(|(_, layer)| {
                layer
                    .as_source()
                    .and_then(|source| source.identity.as_deref())
                    .map_or(false, |token| token == identity)
            })
            .map(|(id, _)| id)
    }
}
