use crate::animation::{AnimationSpec, Lerp};

/// A tween between two panel offsets, sampled against caller-supplied
/// timestamps.
///
/// Holds no clock of its own; hosts drive it from their frame callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimation {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    start_ms: f64,
}

impl SettleAnimation {
    pub fn new(from: f32, to: f32, spec: AnimationSpec, start_ms: f64) -> Self {
        Self {
            from,
            to,
            spec,
            start_ms,
        }
    }

    /// Settle from `from` to `to` with the duration implied by `strength`.
    pub fn with_strength(from: f32, to: f32, strength: f32, start_ms: f64) -> Self {
        Self::new(from, to, AnimationSpec::settle(strength), start_ms)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Offset at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> f32 {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let progress = self.spec.progress_at(now_ms - self.start_ms);
        self.from.lerp(&self.to, progress)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.spec.total_millis() as f64
    }
}
