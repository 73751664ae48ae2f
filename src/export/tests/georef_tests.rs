//! Tests for world file georeferencing

use std::path::{Path, PathBuf};

use crate::coordinate::{Point, Rectangle};
use crate::errors::QInfraError;
use crate::export::georef::{sidecar_path, GeoreferencingRecord};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_record_from_extent() {
    let rect = Rectangle::new(0.0, 0.0, 100.0, 50.0);
    let record = GeoreferencingRecord::from_extent(&rect, 1000, 500);

    assert!((record.pixel_size_x - 0.1).abs() < TOLERANCE);
    assert!((record.pixel_size_y + 0.1).abs() < TOLERANCE);
    assert!((record.upper_left_x - 0.05).abs() < TOLERANCE);
    assert!((record.upper_left_y - 49.95).abs() < TOLERANCE);
    assert_eq!(record.rotation_x, 0.0);
    assert_eq!(record.rotation_y, 0.0);
}

#[test]
fn test_world_file_text() {
    let rect = Rectangle::new(0.0, 0.0, 100.0, 50.0);
    let record = GeoreferencingRecord::from_extent(&rect, 1000, 500);
    assert_eq!(record.to_string(), "0.1\n0.0\n0.0\n-0.1\n0.05\n49.95\n");
}

#[test]
fn test_world_file_text_keeps_decimal_on_whole_numbers() {
    let rect = Rectangle::new(100_000.0, 450_000.0, 100_500.0, 450_300.0);
    let record = GeoreferencingRecord::from_extent(&rect, 250, 150);
    let text = record.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["2.0", "0.0", "0.0", "-2.0", "100001.0", "450299.0"]);
}

#[test]
fn test_parse_world_file() {
    let record = GeoreferencingRecord::parse("0.25\n0.0\n0.0\n-0.25\n100000.125\n450299.875\n").unwrap();
    assert_eq!(record.pixel_size_x, 0.25);
    assert_eq!(record.pixel_size_y, -0.25);
    assert_eq!(record.upper_left_x, 100000.125);
    assert_eq!(record.upper_left_y, 450299.875);
}

#[test]
fn test_parse_rejects_bad_world_files() {
    assert!(matches!(GeoreferencingRecord::parse("1.0\n0.0\n0.0\n-1.0\n"), Err(QInfraError::InvalidInput(_))));
    assert!(matches!(
        GeoreferencingRecord::parse("1.0\n0.0\nabc\n-1.0\n0.5\n0.5\n"),
        Err(QInfraError::InvalidInput(_))
    ));
}

#[test]
fn test_extent_inverts_from_extent() {
    let rect = Rectangle::new(100_000.0, 450_000.0, 100_500.0, 450_300.0);
    let record = GeoreferencingRecord::from_extent(&rect, 2000, 1200);
    assert!(record.extent(2000, 1200).approx_eq(&rect, 1e-6));
}

#[test]
fn test_pixel_center_and_pixel_at() {
    let rect = Rectangle::new(0.0, 0.0, 100.0, 50.0);
    let record = GeoreferencingRecord::from_extent(&rect, 1000, 500);

    let center = record.pixel_center(0.0, 0.0);
    assert!((center.x - 0.05).abs() < TOLERANCE);
    assert!((center.y - 49.95).abs() < TOLERANCE);

    let (col, row) = record.pixel_at(&Point::new(99.95, 0.05));
    assert!((col - 999.0).abs() < 1e-6);
    assert!((row - 499.0).abs() < 1e-6);
}

#[test]
fn test_sidecar_path_replaces_png_extension() {
    assert_eq!(sidecar_path(Path::new("out/luchtfoto.png")), PathBuf::from("out/luchtfoto.pgw"));
    assert_eq!(sidecar_path(Path::new("out/LUCHTFOTO.PNG")), PathBuf::from("out/LUCHTFOTO.pgw"));
}

#[test]
fn test_sidecar_path_appends_for_other_names() {
    assert_eq!(sidecar_path(Path::new("out/luchtfoto")), PathBuf::from("out/luchtfoto.pgw"));
    assert_eq!(sidecar_path(Path::new("out/luchtfoto.jpg")), PathBuf::from("out/luchtfoto.jpg.pgw"));
}
