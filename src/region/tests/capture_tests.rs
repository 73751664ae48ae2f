//! Tests for the capture state machine

use std::cell::RefCell;

use crate::constants::layers::REGION_LAYER_NAME;
use crate::coordinate::{Point, Rectangle, ReferenceFrame};
use crate::errors::QInfraError;
use crate::region::{self, CaptureState, RegionCaptureTool};
use crate::workspace::{MapView, MemoryWorkspace, Workspace};

/// 1 m per display pixel, upper-left corner at (100000, 451000)
fn rd_workspace() -> MemoryWorkspace {
    let view = MapView::new(Rectangle::new(100_000.0, 450_000.0, 101_000.0, 451_000.0), 1000, 1000);
    MemoryWorkspace::new(ReferenceFrame::RdNew, view)
}

#[test]
fn test_drag_produces_map_rectangle() {
    let received = RefCell::new(Vec::new());
    let mut tool = RegionCaptureTool::new(|_, rect| {
        received.borrow_mut().push(rect);
        Ok(())
    });
    let mut workspace = rd_workspace();

    assert_eq!(tool.state(), CaptureState::Idle);
    tool.press(Point::new(0.0, 0.0));
    assert_eq!(tool.preview(), Some(Rectangle::new(0.0, 0.0, 0.0, 0.0)));

    tool.move_to(Point::new(200.0, 100.0));
    tool.move_to(Point::new(500.0, 300.0));
    assert_eq!(tool.preview(), Some(Rectangle::new(0.0, 0.0, 500.0, 300.0)));

    let rect = tool.release(Point::new(500.0, 300.0), &mut workspace).unwrap();
    let expected = Rectangle::new(100_000.0, 450_700.0, 100_500.0, 451_000.0);
    assert_eq!(rect, Some(expected));

    drop(tool);
    assert_eq!(received.into_inner(), vec![expected]);
}

#[test]
fn test_release_resets_state_and_preview() {
    let mut tool = RegionCaptureTool::new(|_, _| Ok(()));
    let mut workspace = rd_workspace();

    tool.press(Point::new(10.0, 10.0));
    tool.release(Point::new(20.0, 30.0), &mut workspace).unwrap();

    assert_eq!(tool.state(), CaptureState::Idle);
    assert_eq!(tool.preview(), None);
}

#[test]
fn test_moves_while_idle_are_ignored() {
    let calls = RefCell::new(0);
    let mut tool = RegionCaptureTool::new(|_, _| {
        *calls.borrow_mut() += 1;
        Ok(())
    });
    let mut workspace = rd_workspace();

    tool.move_to(Point::new(50.0, 50.0));
    assert_eq!(tool.preview(), None);
    assert_eq!(tool.release(Point::new(50.0, 50.0), &mut workspace).unwrap(), None);

    drop(tool);
    assert_eq!(calls.into_inner(), 0);
}

#[test]
fn test_click_without_move_reaches_callback_as_degenerate() {
    let received = RefCell::new(None);
    let mut tool = RegionCaptureTool::new(|_, rect| {
        *received.borrow_mut() = Some(rect);
        Ok(())
    });
    let mut workspace = rd_workspace();

    tool.press(Point::new(0.0, 0.0));
    tool.release(Point::new(0.0, 0.0), &mut workspace).unwrap();

    drop(tool);
    let rect = received.into_inner().unwrap();
    assert!(rect.is_degenerate());
}

#[test]
fn test_store_callback_rejects_click_without_move() {
    let mut tool = RegionCaptureTool::new(|ws, rect| {
        region::upsert(ws, rect, REGION_LAYER_NAME).map(|_| ())
    });
    let mut workspace = rd_workspace();

    tool.press(Point::new(0.0, 0.0));
    let result = tool.release(Point::new(0.0, 0.0), &mut workspace);

    assert!(matches!(result, Err(QInfraError::DegenerateRegion)));
    assert_eq!(tool.state(), CaptureState::Idle);
    assert!(region::read_bbox(&workspace, REGION_LAYER_NAME).is_none());
}

#[test]
fn test_release_normalizes_foreign_frame() {
    let view = MapView::new(Rectangle::new(5.38, 52.15, 5.39, 52.16), 100, 100);
    let mut workspace = MemoryWorkspace::new(ReferenceFrame::WGS84, view);
    let mut tool = RegionCaptureTool::new(|_, _| Ok(()));

    tool.press(Point::new(0.0, 0.0));
    let rect = tool.release(Point::new(100.0, 100.0), &mut workspace).unwrap().unwrap();

    // Amersfoort origin lies inside the dragged area
    assert!(rect.contains(&Point::new(155_000.0, 463_000.0)));
    assert!(rect.width() > 600.0 && rect.width() < 750.0, "width {}", rect.width());
}

#[test]
fn test_cancel_drops_drag() {
    let mut tool = RegionCaptureTool::new(|_, _| Ok(()));
    let mut workspace = rd_workspace();

    tool.press(Point::new(1.0, 1.0));
    tool.cancel();
    assert_eq!(tool.preview(), None);
    assert_eq!(tool.release(Point::new(5.0, 5.0), &mut workspace).unwrap(), None);
    assert_eq!(workspace.layer_count(), 0);
}
