//! End-to-end drag scenarios driven through `DrawerHost` by the test robot.
//!
//! Panels are 800px tall in an 800px viewport, so `[1, 0.5, 0.25]` resolves
//! to offsets 0, 400 and 600.

use prismatia_drawer::{DrawerEvent, DrawerOptions, DrawerPhase, PanelMetrics, StyleProperty};
use prismatia_foundation::GestureDisposition;
use prismatia_testing::robot_assertions::{assert_closed, assert_events_end_with, assert_settled_at};
use prismatia_testing::{assert_approx_eq, DrawerRobot};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn three_snap_options() -> DrawerOptions {
    DrawerOptions::new().with_snap_points([1.0_f32, 0.5, 0.25])
}

fn open_robot(options: DrawerOptions) -> DrawerRobot {
    init_logging();
    let mut robot = DrawerRobot::new(options, PanelMetrics::new(800.0, 800.0));
    robot.show();
    robot
}

#[test]
fn slow_short_drag_settles_back() {
    let mut robot = open_robot(three_snap_options());

    robot.swipe(40.0, 400.0);

    assert_settled_at(&robot, 0);
}

#[test]
fn press_captures_the_pointer() {
    let mut robot = open_robot(three_snap_options());

    let disposition = robot.press();

    assert_eq!(disposition, GestureDisposition::Started { capture: Some(1) });
    assert_eq!(robot.surface().captured_pointers(), &[1]);
    assert_eq!(robot.drawer().phase(), DrawerPhase::Dragging);
    assert!(robot.surface().is_swiping());
}

#[test]
fn closed_drawer_ignores_presses() {
    init_logging();
    let mut robot = DrawerRobot::new(three_snap_options(), PanelMetrics::new(800.0, 800.0));

    assert_eq!(robot.press(), GestureDisposition::Ignored);
    assert!(robot.surface().captured_pointers().is_empty());
}

#[test]
fn drag_updates_swipe_and_backdrop() {
    let mut robot = open_robot(three_snap_options());

    robot.press();
    robot.drag_to(40.0, 400.0);

    assert_approx_eq(robot.drawer().style().swipe_y, 40.0, 0.01, "swipe");
    let backdrop = robot
        .surface()
        .last_style(StyleProperty::BackdropOpacity)
        .unwrap_or_default();
    assert_approx_eq(backdrop, 0.475, 0.001, "backdrop");
}

#[test]
fn fast_downward_flick_dismisses_with_quick_settle() {
    let mut robot = open_robot(three_snap_options());

    robot.swipe(60.0, 60.0);

    assert_closed(&robot);
    assert_events_end_with(&robot, &[DrawerEvent::OpenChanged(false), DrawerEvent::Closed]);
    // The flick's strength is published before the close restores the
    // default.
    let strengths = robot.surface().style_writes(StyleProperty::SwipeStrength);
    assert_eq!(strengths[strengths.len() - 2..], [0.1_f32, 0.6]);

    robot.show();
    let transition = robot.drawer().style().panel_transition();
    assert_eq!(transition.map(|spec| spec.duration_millis), Some(210));
}

#[test]
fn pause_before_lifting_discards_flick_velocity() {
    let mut robot = open_robot(three_snap_options());

    robot.drag_and_hold(60.0, 60.0, 100.0);

    assert_settled_at(&robot, 0);
    let strength = robot.surface().last_style(StyleProperty::SwipeStrength);
    assert_eq!(strength, Some(0.6));
}

#[test]
fn slow_drag_past_threshold_dismisses() {
    let mut robot = open_robot(three_snap_options());

    robot.swipe(150.0, 1500.0);

    assert_closed(&robot);
}

#[test]
fn free_release_near_the_bottom_dismisses() {
    let options = three_snap_options()
        .with_default_snap_index(2)
        .with_dismiss_threshold(500.0);
    let mut robot = open_robot(options);
    assert_settled_at(&robot, 2);

    // Ends at 750, projected to 780: closer to the bottom than to 600.
    robot.swipe(150.0, 1500.0);

    assert_closed(&robot);
    let strengths = robot.surface().style_writes(StyleProperty::SwipeStrength);
    assert_eq!(strengths[strengths.len() - 2..], [1.0_f32, 0.6]);
}

#[test]
fn free_upward_flick_projects_past_adjacent_snap() {
    let options = three_snap_options().with_default_snap_index(2);
    let mut robot = open_robot(options);

    robot.swipe(-120.0, 60.0);

    assert_settled_at(&robot, 0);
    let point = robot.drawer().resolved_snap_points()[0].clone();
    assert_events_end_with(&robot, &[DrawerEvent::SnapChanged { point, index: 0 }]);
}

#[test]
fn sequential_upward_flick_steps_one_snap() {
    let options = three_snap_options()
        .with_default_snap_index(2)
        .sequential(true);
    let mut robot = open_robot(options);

    robot.swipe(-120.0, 60.0);

    assert_settled_at(&robot, 1);
    let point = robot.drawer().resolved_snap_points()[1].clone();
    assert_events_end_with(&robot, &[DrawerEvent::SnapChanged { point, index: 1 }]);
}

#[test]
fn sequential_slow_release_picks_closest_snap() {
    let options = three_snap_options()
        .with_default_snap_index(1)
        .sequential(true);
    let mut robot = open_robot(options);

    // 400 -> 330 slowly: 0 is 330 away, 400 is 70 away.
    robot.swipe(-70.0, 1400.0);

    assert_settled_at(&robot, 1);
}

#[test]
fn overdrag_above_first_snap_is_damped() {
    let mut robot = open_robot(three_snap_options());

    robot.press();
    robot.drag_to(-100.0, 200.0);
    assert_approx_eq(robot.drawer().style().swipe_y, -10.0, 0.01, "damped swipe");
    let backdrop = robot.surface().last_style(StyleProperty::BackdropOpacity);
    assert_eq!(backdrop, Some(0.5));

    robot.release();
    assert_settled_at(&robot, 0);
}

#[test]
fn horizontal_drag_leaves_panel_alone() {
    let mut robot = open_robot(three_snap_options());

    robot.press();
    robot.clear_surface();
    robot.advance(20.0);
    robot.move_horizontally(30.0);

    assert!(robot.surface().style_writes(StyleProperty::SwipeY).is_empty());
    robot.release();
    assert_settled_at(&robot, 0);
}

#[test]
fn touch_gestures_do_not_capture() {
    init_logging();
    let mut robot =
        DrawerRobot::new(three_snap_options(), PanelMetrics::new(800.0, 800.0)).using_touch();
    robot.show();

    assert_eq!(robot.press(), GestureDisposition::Started { capture: None });
    robot.drag_to(60.0, 60.0);
    assert_eq!(robot.release(), GestureDisposition::Ended);

    assert!(robot.surface().captured_pointers().is_empty());
    assert_closed(&robot);
}

#[test]
fn cancel_restores_settled_position() {
    let mut robot = open_robot(three_snap_options().with_default_snap_index(1));

    robot.press();
    robot.drag_to(80.0, 400.0);
    assert_eq!(robot.cancel(), GestureDisposition::Cancelled);

    assert_settled_at(&robot, 1);
    let backdrop = robot.surface().last_style(StyleProperty::BackdropOpacity);
    assert_eq!(backdrop, Some(0.25));
}

#[test]
fn hide_during_drag_ends_the_gesture_closed() {
    let mut robot = open_robot(three_snap_options());

    robot.press();
    robot.drag_to(30.0, 200.0);
    robot.hide();
    assert_closed(&robot);
    assert!(!robot.surface().is_swiping());

    robot.release();
    assert_closed(&robot);
}
