//! Tests for frame normalization

use crate::coordinate::{ensure_frame, to_target_frame, Rectangle, ReferenceFrame};
use crate::workspace::{MapView, MemoryWorkspace, Workspace};

#[test]
fn test_ensure_frame_switches_and_is_idempotent() {
    let view = MapView::new(Rectangle::new(4.0, 51.0, 6.0, 53.0), 800, 600);
    let mut workspace = MemoryWorkspace::new(ReferenceFrame::WGS84, view);

    ensure_frame(&mut workspace);
    assert_eq!(workspace.active_frame(), ReferenceFrame::RdNew);
    let extent_after_first = workspace.view().extent;

    ensure_frame(&mut workspace);
    assert_eq!(workspace.active_frame(), ReferenceFrame::RdNew);
    assert_eq!(workspace.view().extent, extent_after_first);
}

#[test]
fn test_to_target_frame_passthrough() {
    let rect = Rectangle::new(100_000.0, 450_000.0, 100_500.0, 450_300.0);
    assert_eq!(to_target_frame(rect, ReferenceFrame::RdNew).unwrap(), rect);
}

#[test]
fn test_to_target_frame_converts() {
    let wgs = Rectangle::new(5.38, 52.15, 5.39, 52.16);
    let rd = to_target_frame(wgs, ReferenceFrame::WGS84).unwrap();
    assert!(rd.contains(&crate::coordinate::Point::new(155_000.0, 463_000.0)));
}
