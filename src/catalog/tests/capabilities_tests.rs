//! Tests for the capabilities check

use crate::catalog::{Capabilities, ServiceCatalog};

const CAPABILITIES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Capabilities xmlns="http://www.opengis.net/wmts/1.0" xmlns:ows="http://www.opengis.net/ows/1.1">
  <ows:ServiceIdentification><ows:Title>BGT</ows:Title></ows:ServiceIdentification>
  <Contents>
    <Layer>
      <ows:Title>Standaard</ows:Title>
      <ows:Identifier>standaardvisualisatie</ows:Identifier>
      <Style isDefault="true"><ows:Identifier>default</ows:Identifier></Style>
      <TileMatrixSetLink><TileMatrixSet>EPSG:28992</TileMatrixSet></TileMatrixSetLink>
      <TileMatrixSetLink><TileMatrixSet>EPSG:3857</TileMatrixSet></TileMatrixSetLink>
    </Layer>
    <Layer>
      <ows:Identifier>achtergrondvisualisatie</ows:Identifier>
      <TileMatrixSetLink><TileMatrixSet>EPSG:28992</TileMatrixSet></TileMatrixSetLink>
    </Layer>
    <Layer>
      <ows:Identifier>icoonvisualisatie</ows:Identifier>
      <TileMatrixSetLink><TileMatrixSet>EPSG:3857</TileMatrixSet></TileMatrixSetLink>
    </Layer>
    <Layer>
      <ows:Identifier>pastelvisualisatie</ows:Identifier>
      <TileMatrixSetLink><TileMatrixSet>EPSG:28992</TileMatrixSet></TileMatrixSetLink>
    </Layer>
    <TileMatrixSet>
      <ows:Identifier>EPSG:28992</ows:Identifier>
    </TileMatrixSet>
  </Contents>
</Capabilities>"#;

#[test]
fn test_parse_layers_and_matrix_sets() {
    let caps = Capabilities::parse(CAPABILITIES).unwrap();
    assert_eq!(caps.layers.len(), 4);

    let standaard = caps.layer("standaardvisualisatie").unwrap();
    assert_eq!(standaard.tile_matrix_sets, vec!["EPSG:28992", "EPSG:3857"]);

    // style identifiers and top-level matrix set identifiers are not layers
    assert!(caps.layer("default").is_none());
    assert!(caps.layer("EPSG:28992").is_none());
}

#[test]
fn test_report_lists_missing_layers_and_frames() {
    let caps = Capabilities::parse(CAPABILITIES).unwrap();
    let report = ServiceCatalog::builtin().check_capabilities("bgt", &caps).unwrap();

    assert!(!report.is_ok());
    assert_eq!(report.missing_layers, vec!["omtrekgerichtevisualisatie"]);
    assert_eq!(report.missing_frame, vec!["icoonvisualisatie"]);
}

#[test]
fn test_malformed_document_is_rejected() {
    assert!(Capabilities::parse("<Capabilities><Contents></Layer></Contents>").is_err());
}
