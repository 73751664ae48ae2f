//! Source reference lookup and creation
//!
//! References created here carry the identity token of their
//! service/variant and are found again by that token. References added by
//! other means have no token; for those the provider kind and the service
//! keyword in the label are used instead.

use log::{debug, info};

use crate::catalog::ResolvedService;
use crate::constants::layers;
use crate::coordinate::ensure_frame;
use crate::errors::{QInfraError, QInfraResult};
use crate::export::render::SourceLoader;
use crate::workspace::{Layer, LayerId, SourceReference, Workspace};

/// Find a usable reference for `resolved` already in the workspace
pub fn find_source(workspace: &dyn Workspace, resolved: &ResolvedService) -> Option<LayerId> {
    if let Some(id) = workspace.find_by_identity(&resolved.identity()) {
        return Some(id);
    }

    workspace
        .layers_by_keyword(layers::REMOTE_PROVIDER, &resolved.keyword)
        .into_iter()
        .find(|id| {
            workspace
                .layer(*id)
                .and_then(Layer::as_source)
                .map_or(false, |source| source.identity.is_none() && source.valid)
        })
}

/// Reuse or create the reference for `resolved`
///
/// # Returns
/// The layer id and a copy of the reference
///
/// # Errors
/// `SourceUnavailable` when the loader rejects the request; nothing is
/// added to the workspace in that case
pub fn find_or_add_source(
    workspace: &mut dyn Workspace,
    loader: &dyn SourceLoader,
    resolved: &ResolvedService,
) -> QInfraResult<(LayerId, SourceReference)> {
    if let Some(id) = find_source(workspace, resolved) {
        if let Some(source) = workspace.layer(id).and_then(Layer::as_source) {
            debug!("Reusing source layer #{} '{}'", id, source.label);
            return Ok((id, source.clone()));
        }
    }

    let mut source = loader.load(&resolved.request, &resolved.label);
    if !source.valid {
        return Err(QInfraError::SourceUnavailable {
            label: resolved.label.clone(),
        });
    }
    source.identity = Some(resolved.identity());

    let id = workspace.add_layer(Layer::Source(source.clone()));
    info!("Added source layer #{} '{}' ({})", id, source.label, resolved.layer);
    Ok((id, source))
}

/// Add a background map for `resolved` and zoom to it
///
/// The workspace is switched to the target frame first. The view only
/// moves when the layer reports a non-empty extent.
pub fn add_background(
    workspace: &mut dyn Workspace,
    loader: &dyn SourceLoader,
    resolved: &ResolvedService,
) -> QInfraResult<LayerId> {
    ensure_frame(workspace);
    let (id, source) = find_or_add_source(workspace, loader, resolved)?;

    match source.extent {
        Some(extent) if !extent.is_degenerate() => {
            workspace.set_visible_extent(extent);
            debug!("Zoomed to {}", extent);
        }
        _ => debug!("Layer '{}' has no extent to zoom to", source.label),
    }
    Ok(id)
}
