/// Axis a drag gesture commits to once it leaves the lock slop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left/right movement.
    Horizontal,

    /// Up/down movement. Ties between the two displacements resolve here.
    Vertical,
}

impl Axis {
    /// Picks the axis with the larger absolute displacement.
    #[inline]
    pub fn dominant(dx: f32, dy: f32) -> Self {
        if dx.abs() <= dy.abs() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_prefers_vertical_on_ties() {
        assert_eq!(Axis::dominant(6.0, 6.0), Axis::Vertical);
        assert_eq!(Axis::dominant(-6.0, 6.0), Axis::Vertical);
    }

    #[test]
    fn dominant_uses_absolute_values() {
        assert_eq!(Axis::dominant(-9.0, 2.0), Axis::Horizontal);
        assert_eq!(Axis::dominant(1.0, -7.0), Axis::Vertical);
    }
}
