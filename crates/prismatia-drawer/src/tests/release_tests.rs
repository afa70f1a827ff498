use super::*;
use prismatia_ui_layout::{resolve_snap_points, SnapPointInput};

const PANEL: f32 = 800.0;

fn table() -> Vec<ResolvedSnapPoint> {
    let inputs: Vec<SnapPointInput> = [1.0_f32, 0.5, 0.25].into_iter().map(Into::into).collect();
    resolve_snap_points(&inputs, PANEL, PANEL, 16.0).into_vec()
}

fn release(origin_offset: f32, drag_offset: f32, velocity: f32) -> Release {
    Release {
        origin_offset,
        drag_offset,
        velocity,
        panel_height: PANEL,
    }
}

fn approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {} got {}",
        expected,
        actual
    );
}

#[test]
fn sequential_fast_release_steps_from_origin() {
    let points = table();
    assert_eq!(
        resolve_release_target(SnapMode::Sequential, &release(400.0, 430.0, 0.8), &points),
        ReleaseTarget::Snap(2)
    );
    assert_eq!(
        resolve_release_target(SnapMode::Sequential, &release(400.0, 380.0, -0.8), &points),
        ReleaseTarget::Snap(0)
    );
}

#[test]
fn sequential_slow_release_takes_closest_to_drag() {
    let points = table();
    assert_eq!(
        resolve_release_target(SnapMode::Sequential, &release(0.0, 450.0, 0.2), &points),
        ReleaseTarget::Snap(1)
    );
}

#[test]
fn sequential_step_clamps_at_last_snap() {
    let points = table();
    assert_eq!(
        resolve_release_target(SnapMode::Sequential, &release(600.0, 640.0, 0.9), &points),
        ReleaseTarget::Snap(2)
    );
}

#[test]
fn free_release_near_bottom_dismisses() {
    let points = table();
    assert_eq!(
        resolve_release_target(SnapMode::Free, &release(600.0, 750.0, 0.0), &points),
        ReleaseTarget::Dismiss
    );
}

#[test]
fn free_release_settles_at_nearest_projection() {
    let points = table();
    assert_eq!(
        resolve_release_target(SnapMode::Free, &release(400.0, 420.0, 0.0), &points),
        ReleaseTarget::Snap(1)
    );
    // 300 + 0.4 * 300 = 420.
    assert_eq!(
        resolve_release_target(SnapMode::Free, &release(400.0, 300.0, 0.4), &points),
        ReleaseTarget::Snap(1)
    );
    assert_eq!(
        resolve_release_target(SnapMode::Free, &release(400.0, 100.0, -1.0), &points),
        ReleaseTarget::Snap(0)
    );
}

#[test]
fn projection_clamps_velocity_and_range() {
    approx(project_offset(&release(0.0, 0.0, 10.0)), PANEL);
    approx(project_offset(&release(0.0, 100.0, -10.0)), 0.0);
    approx(project_offset(&release(0.0, 100.0, 1.0)), 400.0);
}

#[test]
fn empty_table_dismisses() {
    for mode in [SnapMode::Free, SnapMode::Sequential] {
        assert_eq!(
            resolve_release_target(mode, &release(0.0, 10.0, -2.0), &[]),
            ReleaseTarget::Dismiss
        );
    }
}

#[test]
fn strength_defaults_when_still_or_settled() {
    let points = table();
    approx(swipe_strength(0.0, 250.0, &points, PANEL), 0.6);
    approx(swipe_strength(0.0005, 250.0, &points, PANEL), 0.6);
    approx(swipe_strength(2.0, 400.5, &points, PANEL), 0.6);
}

#[test]
fn strength_scales_with_travel_time() {
    let points = table();
    // 200px at 1px/ms = 200ms.
    approx(swipe_strength(1.0, 200.0, &points, PANEL), 0.1 + 0.9 * 120.0 / 280.0);
    // Very fast flicks bottom out at the minimum duration.
    approx(swipe_strength(4.0, 100.0, &points, PANEL), 0.1);
    // Slow drags are clamped to 0.2px/ms and the maximum duration.
    approx(swipe_strength(0.05, 300.0, &points, PANEL), 1.0);
}

#[test]
fn strength_targets_panel_height_without_snaps() {
    approx(swipe_strength(1.0, 700.0, &[], PANEL), 0.1 + 0.9 * 20.0 / 280.0);
}

#[test]
fn strength_is_always_in_range() {
    let points = table();
    for speed in [0.0, 0.01, 0.3, 1.0, 3.0, 50.0, f32::NAN] {
        for offset in [-100.0, 0.0, 150.0, 399.0, 777.0, 2000.0] {
            let strength = swipe_strength(speed, offset, &points, PANEL);
            assert!((0.1..=1.0).contains(&strength), "{} at {}", strength, offset);
        }
    }
}

#[test]
fn damping_above_most_expanded_snap() {
    approx(damp_drag_delta(0.0, -16.0, 0.0), -4.0);
    approx(damp_drag_delta(400.0, -409.0, 0.0), -403.0);
    approx(damp_drag_delta(400.0, 50.0, 0.0), 50.0);
    approx(damp_drag_delta(400.0, -400.0, 0.0), -400.0);
}

#[test]
fn damping_grows_slower_than_drag() {
    let small = damp_drag_delta(0.0, -25.0, 0.0);
    let large = damp_drag_delta(0.0, -100.0, 0.0);
    approx(small, -5.0);
    approx(large, -10.0);
}

#[test]
fn backdrop_follows_visible_fraction() {
    approx(backdrop_opacity(0.0, PANEL), 0.5);
    approx(backdrop_opacity(400.0, PANEL), 0.25);
    approx(backdrop_opacity(900.0, PANEL), 0.0);
    approx(backdrop_opacity(-20.0, PANEL), 0.5);
    approx(backdrop_opacity(100.0, 0.0), 0.5);
}
