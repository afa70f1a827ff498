//! Shared gesture constants for drawer drag handling.
//!
//! All distances are logical (CSS) pixels and all times are milliseconds on
//! the clock that stamps the incoming events.

/// Displacement after which a drag commits to one axis.
///
/// Six pixels is enough to ignore finger jitter on touch screens while
/// keeping the handle responsive for mouse drags.
pub const LOCK_THRESHOLD: f32 = 6.0;

/// Minimum spacing between two velocity samples.
///
/// Events that arrive faster than this keep the previous velocity estimate
/// instead of dividing by a near-zero interval.
pub const MIN_SAMPLE_INTERVAL_MS: f64 = 16.0;

/// Maximum age of the newest sample at release for its velocity to count.
///
/// A finger that rests longer than this before lifting released a stationary
/// drag, not a flick.
pub const MAX_RELEASE_VELOCITY_AGE_MS: f64 = 80.0;

/// Floor for the elapsed time used by the overall velocity estimate.
pub const MIN_OVERALL_ELAPSED_MS: f64 = 1.0;
