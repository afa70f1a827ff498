//! Assertion utilities for robot testing

use prismatia_drawer::{DrawerEvent, DrawerPhase};

use crate::robot::DrawerRobot;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the drawer rests open at `index`, with the surface agreeing.
pub fn assert_settled_at(robot: &DrawerRobot, index: usize) {
    let drawer = robot.drawer();
    assert_eq!(
        drawer.phase(),
        DrawerPhase::Settled(index),
        "drawer should be settled at snap #{}",
        index
    );
    let expected = drawer.resolved_snap_points()[index].offset;
    assert_approx_eq(drawer.style().offset_y, expected, 0.01, "offset");
    assert_approx_eq(drawer.style().swipe_y, 0.0, 0.01, "swipe");
    assert!(robot.surface().is_dialog_open(), "dialog should be open");
    assert!(!robot.surface().is_swiping(), "surface still swiping");
}

/// Assert that the drawer and its surface are closed.
pub fn assert_closed(robot: &DrawerRobot) {
    assert_eq!(robot.drawer().phase(), DrawerPhase::Closed);
    assert!(!robot.surface().is_dialog_open(), "dialog still open");
    assert!(!robot.surface().has_open_attribute(), "open attribute kept");
}

/// Assert that the recorded events end with `expected`.
pub fn assert_events_end_with(robot: &DrawerRobot, expected: &[DrawerEvent]) {
    let events = robot.surface().events();
    assert!(
        events.ends_with(expected),
        "expected events to end with {:?}, got {:?}",
        expected,
        events
    );
}
