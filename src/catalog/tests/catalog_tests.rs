//! Tests for catalog loading and resolution

use crate::catalog::{LayerSelection, ServiceCatalog};
use crate::errors::QInfraError;

const SINGLE_LAYER_CATALOG: &str = r#"
[services.luchtfoto]
label = "Luchtfoto (PDOK, WMTS)"
url = "https://service.pdok.nl/hwh/luchtfotorgb/wmts/v1_0?"
layer = "Actueel_orthoHR"
format = "image/jpeg"
"#;

#[test]
fn test_builtin_catalog_has_all_services() {
    let catalog = ServiceCatalog::builtin();
    assert_eq!(catalog.names(), vec!["bgt", "brk", "brt", "luchtfoto"]);
}

#[test]
fn test_resolve_luchtfoto_default_request_string() {
    let resolved = ServiceCatalog::builtin().resolve("luchtfoto", None).unwrap();
    assert_eq!(resolved.variant.as_deref(), Some("8cm"));
    assert_eq!(resolved.layer, "Actueel_orthoHR");
    assert_eq!(
        resolved.request,
        "url=https://service.pdok.nl/hwh/luchtfotorgb/wmts/v1_0?&service=WMTS&request=GetCapabilities\
         &layers=Actueel_orthoHR&tileMatrixSet=EPSG:28992&format=image/jpeg&styles=default"
    );
    assert_eq!(resolved.identity(), "luchtfoto/8cm");
    assert!(resolved.label.to_lowercase().contains(&resolved.keyword));
}

#[test]
fn test_resolve_known_variant() {
    let resolved = ServiceCatalog::builtin().resolve("bgt", Some("omtrek")).unwrap();
    assert_eq!(resolved.layer, "omtrekgerichtevisualisatie");
    assert_eq!(resolved.variant.as_deref(), Some("omtrek"));
    assert!(resolved.request.contains("format=image/png"));
}

#[test]
fn test_unknown_variant_falls_back_to_default() {
    let resolved = ServiceCatalog::builtin().resolve("brk", Some("satelliet")).unwrap();
    assert_eq!(resolved.variant.as_deref(), Some("standaard"));
    assert_eq!(resolved.layer, "Kadastralekaart");
}

#[test]
fn test_unknown_service_is_configuration_error() {
    let result = ServiceCatalog::builtin().resolve("openstreetmap", None);
    assert!(matches!(result, Err(QInfraError::Configuration(_))));
}

#[test]
fn test_single_layer_service_ignores_variant() {
    let catalog = ServiceCatalog::from_str(SINGLE_LAYER_CATALOG).unwrap();
    let definition = catalog.definition("luchtfoto").unwrap();
    assert_eq!(definition.layers, LayerSelection::Single("Actueel_orthoHR".to_string()));
    assert_eq!(definition.keyword, "luchtfoto");

    let resolved = catalog.resolve("luchtfoto", Some("25cm")).unwrap();
    assert_eq!(resolved.variant, None);
    assert_eq!(resolved.layer, "Actueel_orthoHR");
    assert_eq!(resolved.label, "Luchtfoto (PDOK, WMTS)");
    assert_eq!(resolved.identity(), "luchtfoto");
}

#[test]
fn test_default_variant_must_exist() {
    let content = r#"
[services.bgt]
label = "BGT"
url = "https://example.invalid/wmts?"
format = "image/png"
default_variant = "missing"

[services.bgt.variants]
standaard = "standaardvisualisatie"
"#;
    assert!(matches!(ServiceCatalog::from_str(content), Err(QInfraError::Configuration(_))));
}

#[test]
fn test_missing_field_is_configuration_error() {
    let content = "[services.x]\nlabel = \"X\"\nlayer = \"y\"\n";
    assert!(matches!(ServiceCatalog::from_str(content), Err(QInfraError::Configuration(_))));
    assert!(matches!(ServiceCatalog::from_str("not toml ["), Err(QInfraError::Configuration(_))));
}
