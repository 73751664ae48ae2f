//! Tests for source reference lookup and background maps

use super::FakeLoader;
use crate::catalog::ServiceCatalog;
use crate::coordinate::{Rectangle, ReferenceFrame};
use crate::errors::QInfraError;
use crate::export::source::{add_background, find_or_add_source, find_source};
use crate::workspace::{Layer, MapView, MemoryWorkspace, SourceReference, VectorLayer, Workspace};

fn untagged(label: &str, provider: &str, valid: bool) -> Layer {
    Layer::Source(SourceReference {
        label: label.to_string(),
        provider: provider.to_string(),
        request: String::new(),
        identity: None,
        valid,
        extent: None,
    })
}

#[test]
fn test_new_source_is_tagged_and_added() {
    let mut workspace = MemoryWorkspace::default();
    let loader = FakeLoader::accepting();
    let resolved = ServiceCatalog::builtin().resolve("brt", Some("pastel")).unwrap();

    let (id, source) = find_or_add_source(&mut workspace, &loader, &resolved).unwrap();

    assert_eq!(source.identity.as_deref(), Some("brt/pastel"));
    assert_eq!(workspace.layer(id).and_then(Layer::as_source), Some(&source));
    assert_eq!(find_source(&workspace, &resolved), Some(id));
}

#[test]
fn test_keyword_lookup_ignores_other_providers_and_invalid_layers() {
    let mut workspace = MemoryWorkspace::default();
    workspace.add_layer(untagged("Luchtfoto export", "gdal", true));
    workspace.add_layer(untagged("Luchtfoto kapot", "wms", false));
    let mut vector = VectorLayer::polygon("luchtfoto vlakken", ReferenceFrame::RdNew);
    vector.provider = "wms".to_string();
    workspace.add_layer(Layer::Vector(vector));
    let resolved = ServiceCatalog::builtin().resolve("luchtfoto", None).unwrap();

    assert_eq!(find_source(&workspace, &resolved), None);

    let good = workspace.add_layer(untagged("luchtfoto (PDOK)", "wms", true));
    assert_eq!(find_source(&workspace, &resolved), Some(good));
}

#[test]
fn test_tagged_layer_of_other_variant_is_not_reused() {
    let mut workspace = MemoryWorkspace::default();
    let loader = FakeLoader::accepting();
    let catalog = ServiceCatalog::builtin();
    let grijs = catalog.resolve("brt", Some("grijs")).unwrap();
    let water = catalog.resolve("brt", Some("water")).unwrap();

    let (grijs_id, _) = find_or_add_source(&mut workspace, &loader, &grijs).unwrap();
    assert_eq!(find_source(&workspace, &water), None);

    let (water_id, _) = find_or_add_source(&mut workspace, &loader, &water).unwrap();
    assert_ne!(grijs_id, water_id);
    assert_eq!(loader.loads.get(), 2);
}

#[test]
fn test_rejected_source_is_not_added() {
    let mut workspace = MemoryWorkspace::default();
    let resolved = ServiceCatalog::builtin().resolve("brk", None).unwrap();

    let result = find_or_add_source(&mut workspace, &FakeLoader::rejecting(), &resolved);

    match result {
        Err(QInfraError::SourceUnavailable { label }) => assert_eq!(label, resolved.label),
        other => panic!("expected SourceUnavailable, got {:?}", other),
    }
    assert_eq!(workspace.layer_count(), 0);
}

#[test]
fn test_add_background_zooms_to_extent() {
    let view = MapView::new(Rectangle::new(4.8, 52.3, 4.9, 52.4), 800, 600);
    let mut workspace = MemoryWorkspace::new(ReferenceFrame::WGS84, view);
    let extent = Rectangle::new(10_000.0, 300_000.0, 280_000.0, 620_000.0);
    let loader = FakeLoader {
        extent: Some(extent),
        ..FakeLoader::accepting()
    };
    let resolved = ServiceCatalog::builtin().resolve("bgt", Some("omtrek")).unwrap();

    let id = add_background(&mut workspace, &loader, &resolved).unwrap();

    assert_eq!(workspace.active_frame(), ReferenceFrame::RdNew);
    assert_eq!(workspace.view().extent, extent);
    assert!(workspace.layer(id).is_some());
}

#[test]
fn test_add_background_without_extent_keeps_view() {
    let mut workspace = MemoryWorkspace::default();
    let before = workspace.view().extent;
    let resolved = ServiceCatalog::builtin().resolve("luchtfoto", Some("25cm")).unwrap();

    add_background(&mut workspace, &FakeLoader::accepting(), &resolved).unwrap();
    add_background(&mut workspace, &FakeLoader::accepting(), &resolved).unwrap();

    assert_eq!(workspace.view().extent, before);
    assert_eq!(workspace.layer_count(), 1);
}
