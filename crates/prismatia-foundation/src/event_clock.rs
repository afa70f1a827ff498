//! Monotonic timestamps for input transports that do not carry their own.
//!
//! Browser events come with `timeStamp`; winit events do not, so desktop
//! adapters stamp them against an [`EventClock`] created with the window.

use web_time::Instant;

/// Millisecond clock anchored at its creation.
#[derive(Clone, Copy, Debug)]
pub struct EventClock {
    origin: Instant,
}

impl EventClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> f64 {
        self.stamp(Instant::now())
    }

    /// Milliseconds between the clock origin and `instant`, saturating at
    /// zero for instants taken before the clock existed.
    pub fn stamp(&self, instant: Instant) -> f64 {
        instant
            .checked_duration_since(self.origin)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn stamps_are_relative_to_origin() {
        let clock = EventClock::new();
        let later = clock.origin + Duration::from_millis(250);
        assert!((clock.stamp(later) - 250.0).abs() < 1e-6);
    }

    #[test]
    fn instants_before_origin_saturate() {
        let early = Instant::now();
        let clock = EventClock::new();
        assert_eq!(clock.stamp(early), 0.0);
    }

    #[test]
    fn now_is_monotonic() {
        let clock = EventClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(second >= first);
    }
}
