//! Easing curves and tween specifications.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Base duration of the drawer settle transition at full strength.
pub const SETTLE_BASE_DURATION_MS: f32 = 350.0;

/// Duration of the backdrop fade.
pub const BACKDROP_FADE_DURATION_MS: u64 = 300;

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    /// The drawer's settle curve: a quick start with a long tail.
    pub const DRAWER: CubicBezier = CubicBezier::new(0.32, 0.72, 0.0, 1.0);

    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps a linear time fraction to eased progress.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let x = Polynomial::new(self.x1, self.x2);
        let y = Polynomial::new(self.y1, self.y2);
        y.sample(x.solve(fraction))
    }

    /// CSS `transition-timing-function` text.
    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// One coordinate of a bezier anchored at (0, 0) and (1, 1), in power form.
struct Polynomial {
    a: f32,
    b: f32,
    c: f32,
}

impl Polynomial {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn sample(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn derivative(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }

    /// Parameter `t` with `sample(t) == x`. Newton steps first, bisection
    /// when the slope flattens out.
    fn solve(&self, x: f32) -> f32 {
        const EPSILON: f32 = 1e-6;

        let mut t = x;
        for _ in 0..8 {
            let error = self.sample(t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = self.derivative(t);
            if slope.abs() < EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..24 {
            let error = self.sample(t) - x;
            if error.abs() < EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

/// Easing functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    /// CSS `ease`.
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Arbitrary CSS timing curve.
    Bezier(CubicBezier),
}

impl Easing {
    /// The drawer settle curve.
    pub const DRAWER: Easing = Easing::Bezier(CubicBezier::DRAWER);

    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::Ease => CubicBezier::new(0.25, 0.1, 0.25, 1.0).transform(fraction),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).transform(fraction),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).transform(fraction),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).transform(fraction),
            Easing::Bezier(curve) => curve.transform(fraction),
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Easing::LinearEasing => "linear".to_string(),
            Easing::Ease => "ease".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::Bezier(curve) => curve.to_css(),
        }
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Settle transition for a release of the given swipe strength.
    ///
    /// Strength scales the base duration; a stronger flick settles sooner
    /// because its strength is lower. Non-finite strengths use the default
    /// duration.
    pub fn settle(strength: f32) -> Self {
        let strength = if strength.is_finite() {
            strength.clamp(0.0, 1.0)
        } else {
            log::warn!("non-finite swipe strength {}, using default settle", strength);
            1.0
        };
        let duration = (strength * SETTLE_BASE_DURATION_MS).round() as u64;
        Self::tween(duration, Easing::DRAWER)
    }

    /// Backdrop opacity fade.
    pub fn backdrop_fade() -> Self {
        Self::tween(BACKDROP_FADE_DURATION_MS, Easing::Ease)
    }

    /// Total time from start to the final value.
    pub fn total_millis(&self) -> u64 {
        self.duration_millis
    }

    /// Eased progress `elapsed_ms` after the animation was started.
    pub fn progress_at(&self, elapsed_ms: f64) -> f32 {
        if elapsed_ms <= 0.0 {
            return 0.0;
        }
        if self.duration_millis == 0 {
            return 1.0;
        }
        let linear = (elapsed_ms / self.duration_millis as f64).clamp(0.0, 1.0) as f32;
        self.easing.transform(linear)
    }

    /// CSS `transition` shorthand for `property`.
    pub fn to_css_transition(&self, property: &str) -> String {
        format!(
            "{} {}ms {}",
            property,
            self.duration_millis,
            self.easing.to_css()
        )
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(SETTLE_BASE_DURATION_MS as u64, Easing::DRAWER)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
