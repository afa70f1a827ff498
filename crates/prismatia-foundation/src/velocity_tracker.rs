//! Velocity tracking for drag release.
//!
//! The drawer only needs the most recent slope of the drag, so instead of a
//! sample history this keeps two samples: the newest one and the anchor the
//! current velocity estimate was measured from. Velocities are in px/ms.

use crate::gesture_constants::{MAX_RELEASE_VELOCITY_AGE_MS, MIN_SAMPLE_INTERVAL_MS};
use prismatia_ui_graphics::Point;

/// Cumulative displacement from the gesture anchor at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSample {
    pub time_ms: f64,
    pub delta: Point,
}

impl DragSample {
    pub fn new(time_ms: f64, delta: Point) -> Self {
        Self { time_ms, delta }
    }
}

/// Two-sample velocity estimator.
///
/// # Usage
/// ```
/// use prismatia_foundation::{DragSample, DragVelocityTracker};
/// use prismatia_ui_graphics::Point;
///
/// let mut tracker = DragVelocityTracker::new(DragSample::new(0.0, Point::ZERO));
/// tracker.add_sample(DragSample::new(20.0, Point::new(0.0, 40.0)));
/// assert_eq!(tracker.velocity(), Point::new(0.0, 2.0));
/// ```
#[derive(Clone, Debug)]
pub struct DragVelocityTracker {
    /// Sample the current estimate was measured from.
    anchor: DragSample,
    /// Newest sample seen.
    last: DragSample,
    velocity: Point,
}

impl DragVelocityTracker {
    /// Starts tracking at `origin` with zero velocity.
    pub fn new(origin: DragSample) -> Self {
        Self {
            anchor: origin,
            last: origin,
            velocity: Point::ZERO,
        }
    }

    /// Records a sample. Returns true when the velocity estimate was
    /// refreshed, false when the sample arrived too soon after the anchor
    /// and the previous estimate was kept.
    pub fn add_sample(&mut self, sample: DragSample) -> bool {
        self.last = sample;
        let dt = sample.time_ms - self.anchor.time_ms;
        if dt <= MIN_SAMPLE_INTERVAL_MS {
            return false;
        }
        let displacement = sample.delta - self.anchor.delta;
        self.velocity = Point::new(
            (displacement.x as f64 / dt) as f32,
            (displacement.y as f64 / dt) as f32,
        );
        self.anchor = sample;
        true
    }

    /// Zeroes the velocity when the newest sample is older than the release
    /// window at `release_time_ms`: a pause before lifting is not a flick.
    pub fn release(&mut self, release_time_ms: f64) {
        if release_time_ms - self.last.time_ms > MAX_RELEASE_VELOCITY_AGE_MS {
            self.velocity = Point::ZERO;
        }
    }

    /// Current velocity estimate in px/ms.
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Newest sample.
    pub fn last_sample(&self) -> DragSample {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time_ms: f64, y: f32) -> DragSample {
        DragSample::new(time_ms, Point::new(0.0, y))
    }

    #[test]
    fn fresh_tracker_is_still() {
        let tracker = DragVelocityTracker::new(sample(100.0, 0.0));
        assert_eq!(tracker.velocity(), Point::ZERO);
    }

    #[test]
    fn velocity_is_slope_between_samples() {
        let mut tracker = DragVelocityTracker::new(sample(0.0, 0.0));
        assert!(tracker.add_sample(sample(20.0, 10.0)));
        assert_eq!(tracker.velocity().y, 0.5);
        assert!(tracker.add_sample(sample(40.0, 50.0)));
        assert_eq!(tracker.velocity().y, 2.0);
    }

    #[test]
    fn rapid_samples_keep_previous_estimate() {
        let mut tracker = DragVelocityTracker::new(sample(0.0, 0.0));
        tracker.add_sample(sample(20.0, 20.0));
        assert!(!tracker.add_sample(sample(25.0, 200.0)));
        assert_eq!(tracker.velocity().y, 1.0);
        // Once enough time passes the slope is measured from the last anchor.
        assert!(tracker.add_sample(sample(40.0, 60.0)));
        assert_eq!(tracker.velocity().y, 2.0);
        assert_eq!(tracker.last_sample(), sample(40.0, 60.0));
    }

    #[test]
    fn stale_release_zeroes_velocity() {
        let mut tracker = DragVelocityTracker::new(sample(0.0, 0.0));
        tracker.add_sample(sample(20.0, 40.0));
        tracker.release(20.0 + MAX_RELEASE_VELOCITY_AGE_MS + 1.0);
        assert_eq!(tracker.velocity(), Point::ZERO);
    }

    #[test]
    fn prompt_release_keeps_velocity() {
        let mut tracker = DragVelocityTracker::new(sample(0.0, 0.0));
        tracker.add_sample(sample(20.0, -40.0));
        tracker.release(30.0);
        assert_eq!(tracker.velocity().y, -2.0);
    }

    #[test]
    fn out_of_order_samples_do_not_divide_by_negative_time() {
        let mut tracker = DragVelocityTracker::new(sample(50.0, 0.0));
        assert!(!tracker.add_sample(sample(10.0, 30.0)));
        assert_eq!(tracker.velocity(), Point::ZERO);
    }
}
