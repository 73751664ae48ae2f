//! Persistence of the captured region as a named single-feature layer

use log::{debug, info};

use crate::coordinate::{Rectangle, ReferenceFrame};
use crate::errors::{QInfraError, QInfraResult};
use crate::workspace::{Feature, FillStyle, Layer, LayerId, Polygon, Rgba, VectorLayer, Workspace};

/// Outline color of the region layer
const REGION_COLOR: Rgba = Rgba([227, 26, 28, 255]);

/// Create or replace the region layer `name` holding `rect`
///
/// Every layer named exactly `name` is removed before the new one is added,
/// so at most one region layer exists afterwards. A zero-area rectangle is
/// rejected and leaves any existing region untouched.
///
/// # Returns
/// The id of the new layer
pub fn upsert(workspace: &mut dyn Workspace, rect: Rectangle, name: &str) -> QInfraResult<LayerId> {
    if rect.is_degenerate() {
        return Err(QInfraError::DegenerateRegion);
    }

    for id in workspace.layers_by_name(name) {
        workspace.remove_layer(id);
        debug!("Removed previous region layer #{}", id);
    }

    let mut layer = VectorLayer::polygon(name, ReferenceFrame::target());
    layer.features.push(Feature { geometry: Some(Polygon::from_rect(&rect)) });
    layer.style = FillStyle::outline(REGION_COLOR);

    let id = workspace.add_layer(Layer::Vector(layer));
    info!("Stored region '{}' as layer #{}: {}", name, id, rect);
    Ok(id)
}

/// Bounding box of the region layer `name`
///
/// Features without geometry are skipped and the boxes of the remaining
/// ones are combined.
///
/// # Returns
/// `None` when no such layer exists, it is not a polygon layer, or it holds
/// no non-empty geometry
pub fn read_bbox(workspace: &dyn Workspace, name: &str) -> Option<Rectangle> {
    let id = *workspace.layers_by_name(name).first()?;
    let layer = workspace.layer(id)?.as_vector()?;

    if !layer.geometry_type.is_polygonal() {
        debug!("Layer '{}' is not a polygon layer", name);
        return None;
    }

    layer.extent()
}
