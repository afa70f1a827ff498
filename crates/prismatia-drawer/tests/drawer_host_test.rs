//! Host-level behavior: scroll vetoes, keys, attributes and lifecycle.

use prismatia_drawer::{
    DrawerEffect, DrawerEvent, DrawerHost, DrawerOptions, DrawerPhase, DrawerSurface,
    PanelMetrics, StyleProperty,
};
use prismatia_foundation::{GestureDisposition, KeyCode};
use prismatia_testing::robot_assertions::{assert_closed, assert_events_end_with, assert_settled_at};
use prismatia_testing::{assert_approx_eq, DrawerRobot, RecordingSurface, TestNode};

fn metrics() -> PanelMetrics {
    PanelMetrics::new(800.0, 800.0)
}

fn three_snap_options() -> DrawerOptions {
    DrawerOptions::new().with_snap_points([1.0_f32, 0.5, 0.25])
}

#[test]
fn show_presents_dialog_and_announces() {
    let mut robot = DrawerRobot::new(three_snap_options().modal(true), metrics());

    robot.show();

    assert_settled_at(&robot, 0);
    assert!(robot.surface().is_modal());
    assert!(robot.surface().has_open_attribute());
    assert_events_end_with(&robot, &[DrawerEvent::OpenChanged(true), DrawerEvent::Opened]);
}

#[test]
fn press_inside_scrolled_content_is_vetoed() {
    let root = TestNode::root();
    let content = TestNode::child(&root);
    let list = TestNode::scroller(&content, 1000.0, 300.0);
    list.scroll_to(120.0);

    let surface = RecordingSurface::with_panel(root);
    let mut robot = DrawerRobot::with_surface(three_snap_options(), metrics(), surface);
    robot.show();

    robot.targeting(Some(list.clone()));
    assert_eq!(robot.press(), GestureDisposition::Ignored);
    assert_settled_at(&robot, 0);

    list.scroll_to(0.0);
    assert!(matches!(robot.press(), GestureDisposition::Started { .. }));
    robot.cancel();

    robot.targeting(Some(content));
    assert!(matches!(robot.press(), GestureDisposition::Started { .. }));
}

#[test]
fn escape_closes_and_resets_strength() {
    let mut robot = DrawerRobot::new(three_snap_options(), metrics());
    robot.show();

    assert!(!robot.key_down(KeyCode::Enter));
    assert!(robot.key_down(KeyCode::Escape));

    assert_closed(&robot);
    assert_events_end_with(&robot, &[DrawerEvent::OpenChanged(false), DrawerEvent::Closed]);
    assert_eq!(
        robot.surface().last_style(StyleProperty::SwipeStrength),
        Some(0.6)
    );
    assert!(!robot.key_down(KeyCode::Escape));
}

#[test]
fn native_dialog_cancel_closes() {
    let mut robot = DrawerRobot::new(three_snap_options(), metrics());
    robot.show();

    robot.host_mut().dialog_cancelled();

    assert_closed(&robot);
}

#[test]
fn attributes_drive_snap_points_and_open_state() {
    let mut robot = DrawerRobot::new(DrawerOptions::new(), metrics());
    assert_eq!(robot.drawer().resolved_snap_points().len(), 1);

    robot
        .host_mut()
        .attribute_changed("snap-points", Some("1, 0.5, 20rem"));
    let offsets: Vec<f32> = robot
        .drawer()
        .resolved_snap_points()
        .iter()
        .map(|point| point.offset)
        .collect();
    assert_eq!(offsets, vec![0.0, 400.0, 480.0]);

    robot.host_mut().attribute_changed("data-theme", Some("dark"));
    robot.host_mut().attribute_changed("open", Some(""));
    assert_settled_at(&robot, 0);

    robot.host_mut().attribute_changed("open", None);
    assert_closed(&robot);
}

#[test]
fn invalid_snap_entries_are_skipped() {
    let mut robot = DrawerRobot::new(DrawerOptions::new(), metrics());

    robot
        .host_mut()
        .set_snap_points_attribute(Some("0.5, 10vh, , 200px"));

    let heights: Vec<f32> = robot
        .drawer()
        .resolved_snap_points()
        .iter()
        .map(|point| point.height)
        .collect();
    assert_eq!(heights, vec![400.0, 200.0]);
}

#[test]
fn snap_to_moves_and_announces() {
    let mut robot = DrawerRobot::new(three_snap_options(), metrics());
    robot.show();

    robot.host_mut().snap_to(2);
    assert_settled_at(&robot, 2);
    let point = robot.drawer().resolved_snap_points()[2].clone();
    assert_events_end_with(&robot, &[DrawerEvent::SnapChanged { point, index: 2 }]);
    assert_approx_eq(
        robot.drawer().style().backdrop_opacity,
        0.125,
        0.001,
        "backdrop at 600",
    );

    robot.clear_surface();
    robot.host_mut().snap_to(7);
    assert!(robot.surface().effects().is_empty());
    assert_settled_at(&robot, 2);
}

#[test]
fn resize_reapplies_settled_offset() {
    let mut robot = DrawerRobot::new(three_snap_options().with_default_snap_index(1), metrics());
    robot.show();
    assert_approx_eq(robot.drawer().style().offset_y, 400.0, 0.01, "before");

    robot.host_mut().resize(PanelMetrics::new(600.0, 600.0));

    assert_settled_at(&robot, 1);
    assert_approx_eq(robot.drawer().style().offset_y, 300.0, 0.01, "after");
}

#[test]
fn reconfigure_while_open_jumps_to_new_default() {
    let mut robot = DrawerRobot::new(three_snap_options(), metrics());
    robot.show();

    robot.host_mut().configure(
        DrawerOptions::new()
            .with_snap_points([0.75_f32, 0.5])
            .with_default_snap_index(1),
    );

    assert_settled_at(&robot, 1);
    assert_approx_eq(robot.drawer().style().offset_y, 400.0, 0.01, "offset");
}

#[test]
fn detach_drops_gesture_and_input() {
    let mut robot = DrawerRobot::new(three_snap_options(), metrics());
    robot.show();

    robot.press();
    robot.drag_to(50.0, 100.0);
    assert_eq!(robot.drawer().phase(), DrawerPhase::Dragging);

    robot.host_mut().detach();
    assert!(!robot.host().is_attached());
    assert_settled_at(&robot, 0);
    assert_eq!(robot.press(), GestureDisposition::Ignored);

    robot.host_mut().attach();
    assert!(matches!(robot.press(), GestureDisposition::Started { .. }));
}

#[test]
fn deferred_notifications_wait_for_the_caller() {
    let mut host = DrawerHost::new(three_snap_options(), metrics(), RecordingSurface::new())
        .defer_notifications();
    host.attach();

    host.show();
    assert!(host.surface().is_dialog_open());
    assert!(!host.surface().has_open_attribute());
    assert!(host.surface().events().is_empty());

    let notifications = host.take_notifications();
    assert_eq!(
        notifications,
        vec![
            DrawerEffect::ReflectOpenAttribute(true),
            DrawerEffect::Emit(DrawerEvent::OpenChanged(true)),
            DrawerEffect::Emit(DrawerEvent::Opened),
        ]
    );

    // An `Opened` listener closes the drawer while notifications are being
    // delivered.
    for notification in &notifications {
        host.surface_mut().apply(notification);
        if notification.event() == Some(&DrawerEvent::Opened) {
            host.hide();
        }
    }
    assert!(!host.drawer().is_open());
    assert!(!host.surface().is_dialog_open());
    let follow_up = host.take_notifications();
    assert_eq!(
        follow_up.last(),
        Some(&DrawerEffect::Emit(DrawerEvent::Closed))
    );
    assert!(host.take_notifications().is_empty());
}
