//! Release-time decisions: where a dragged panel settles and how fast.
//!
//! Offsets are measured from the fully expanded position; larger offsets
//! show less of the panel. Positive velocity points downward, towards
//! dismissal.

use prismatia_ui_layout::{
    find_adjacent_snap_point, find_closest_snap_point, ResolvedSnapPoint, SnapDirection,
};

use crate::constants::{
    DEFAULT_SWIPE_STRENGTH, MAX_BACKDROP_OPACITY, MAX_SWIPE_RELEASE_DURATION_MS,
    MAX_SWIPE_RELEASE_VELOCITY, MAX_SWIPE_STRENGTH, MIN_SWIPE_RELEASE_DURATION_MS,
    MIN_SWIPE_RELEASE_VELOCITY, MIN_SWIPE_STRENGTH, SETTLED_DISTANCE, SNAP_VELOCITY_MULTIPLIER,
    SNAP_VELOCITY_THRESHOLD, STILL_VELOCITY,
};
use crate::options::SnapMode;

/// Outcome of a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseTarget {
    /// Settle at this index of the snap table.
    Snap(usize),
    Dismiss,
}

/// Panel geometry and motion at the moment of release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Offset of the snap the gesture started from.
    pub origin_offset: f32,
    /// Undamped offset under the finger: origin plus vertical drag.
    pub drag_offset: f32,
    /// Vertical release velocity, px/ms.
    pub velocity: f32,
    pub panel_height: f32,
}

/// Picks the snap point a release settles at, or decides to dismiss.
///
/// An empty table always dismisses.
pub fn resolve_release_target(
    mode: SnapMode,
    release: &Release,
    points: &[ResolvedSnapPoint],
) -> ReleaseTarget {
    if points.is_empty() {
        return ReleaseTarget::Dismiss;
    }
    let target = match mode {
        SnapMode::Sequential => sequential_target(release, points),
        SnapMode::Free => free_target(release, points),
    };
    target.map_or(ReleaseTarget::Dismiss, ReleaseTarget::Snap)
}

fn sequential_target(release: &Release, points: &[ResolvedSnapPoint]) -> Option<usize> {
    let direction = if release.velocity > SNAP_VELOCITY_THRESHOLD {
        Some(SnapDirection::Collapse)
    } else if release.velocity < -SNAP_VELOCITY_THRESHOLD {
        Some(SnapDirection::Expand)
    } else {
        None
    };
    match direction {
        Some(direction) => find_adjacent_snap_point(release.origin_offset, direction, points),
        None => find_closest_snap_point(release.drag_offset, points),
    }
}

fn free_target(release: &Release, points: &[ResolvedSnapPoint]) -> Option<usize> {
    let projected = project_offset(release);
    let nearest = find_closest_snap_point(projected, points)?;
    let close_distance = (release.panel_height - projected).abs();
    let snap_distance = (points[nearest].offset - projected).abs();
    if close_distance < snap_distance {
        None
    } else {
        Some(nearest)
    }
}

/// Where the panel would coast to from the release velocity.
pub fn project_offset(release: &Release) -> f32 {
    let velocity = release
        .velocity
        .clamp(-MAX_SWIPE_RELEASE_VELOCITY, MAX_SWIPE_RELEASE_VELOCITY);
    let projected = release.drag_offset + velocity * SNAP_VELOCITY_MULTIPLIER;
    projected.clamp(0.0, release.panel_height.max(0.0))
}

/// Settle strength for the transition after a release.
///
/// A fast flick far from its target settles quickly (low strength); slow or
/// nearly settled releases use [`DEFAULT_SWIPE_STRENGTH`].
pub fn swipe_strength(
    speed: f32,
    current_offset: f32,
    points: &[ResolvedSnapPoint],
    panel_height: f32,
) -> f32 {
    let target = find_closest_snap_point(current_offset, points)
        .map_or(panel_height, |index| points[index].offset);
    let remaining = (target - current_offset).abs();
    if !remaining.is_finite()
        || !speed.is_finite()
        || remaining < SETTLED_DISTANCE
        || speed < STILL_VELOCITY
    {
        return DEFAULT_SWIPE_STRENGTH;
    }

    let speed = speed.clamp(MIN_SWIPE_RELEASE_VELOCITY, MAX_SWIPE_RELEASE_VELOCITY);
    let duration = (remaining / speed).clamp(
        MIN_SWIPE_RELEASE_DURATION_MS,
        MAX_SWIPE_RELEASE_DURATION_MS,
    );
    let normalized = (duration - MIN_SWIPE_RELEASE_DURATION_MS)
        / (MAX_SWIPE_RELEASE_DURATION_MS - MIN_SWIPE_RELEASE_DURATION_MS);
    (MIN_SWIPE_STRENGTH + normalized * 0.9).clamp(MIN_SWIPE_STRENGTH, MAX_SWIPE_STRENGTH)
}

/// Drag delta with square-root resistance past the most expanded snap.
pub fn damp_drag_delta(origin_offset: f32, delta_y: f32, min_offset: f32) -> f32 {
    let offset = origin_offset + delta_y;
    if offset < min_offset {
        let overshoot = min_offset - offset;
        min_offset - origin_offset - overshoot.sqrt()
    } else {
        delta_y
    }
}

/// Backdrop opacity for a panel drawn at `offset`, proportional to the
/// visible fraction of the panel.
pub fn backdrop_opacity(offset: f32, panel_height: f32) -> f32 {
    if panel_height.is_nan() || panel_height <= 0.0 {
        return MAX_BACKDROP_OPACITY;
    }
    let visible = panel_height - offset.max(0.0);
    let fraction = (visible / panel_height).max(0.0);
    (fraction * MAX_BACKDROP_OPACITY).min(MAX_BACKDROP_OPACITY)
}

#[cfg(test)]
#[path = "tests/release_tests.rs"]
mod tests;
