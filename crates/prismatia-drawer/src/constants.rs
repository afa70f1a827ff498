//! Tuned constants for drawer release behavior.
//!
//! Velocities are in px/ms, distances in px, durations in ms.

/// Downward release speed above which the drawer always dismisses.
pub const FAST_SWIPE_VELOCITY: f32 = 0.5;

/// Release speed above which sequential drawers step to the adjacent snap.
pub const SNAP_VELOCITY_THRESHOLD: f32 = 0.5;

/// How far ahead (in ms of travel) free-mode release projects the drag.
pub const SNAP_VELOCITY_MULTIPLIER: f32 = 300.0;

pub const MIN_SWIPE_RELEASE_VELOCITY: f32 = 0.2;
pub const MAX_SWIPE_RELEASE_VELOCITY: f32 = 4.0;

pub const MIN_SWIPE_RELEASE_DURATION_MS: f32 = 80.0;
pub const MAX_SWIPE_RELEASE_DURATION_MS: f32 = 360.0;

/// Settle strength used when a release carries no usable speed.
pub const DEFAULT_SWIPE_STRENGTH: f32 = 0.6;
pub const MIN_SWIPE_STRENGTH: f32 = 0.1;
pub const MAX_SWIPE_STRENGTH: f32 = 1.0;

/// Remaining distance below which the release counts as already settled.
pub const SETTLED_DISTANCE: f32 = 1.0;
/// Release speed below which the drawer counts as still.
pub const STILL_VELOCITY: f32 = 0.001;

/// Downward drag beyond which a non-fast release dismisses.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 100.0;

/// Panel height assumed until the platform reports a measurement.
pub const DEFAULT_PANEL_HEIGHT: f32 = 400.0;

/// Backdrop opacity with the panel fully expanded.
pub const MAX_BACKDROP_OPACITY: f32 = 0.5;
