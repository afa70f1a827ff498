use prismatia_ui_layout::SnapPointInput;

use crate::constants::DEFAULT_DISMISS_THRESHOLD;

/// How a release picks its snap target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapMode {
    /// Project the release velocity forward and take the nearest snap.
    #[default]
    Free,
    /// Only move one snap point at a time.
    Sequential,
}

/// Drawer configuration.
///
/// ```
/// use prismatia_drawer::DrawerOptions;
///
/// let options = DrawerOptions::new()
///     .with_snap_points([1.0_f32, 0.5])
///     .with_default_snap_index(1)
///     .sequential(true);
/// assert_eq!(options.snap_points.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerOptions {
    /// Declared snap sizes. Empty means a single full-height snap.
    pub snap_points: Vec<SnapPointInput>,
    /// Snap point used when opening; 0 is the most expanded.
    pub default_snap_index: usize,
    pub mode: SnapMode,
    /// Downward drag (px) a slow release needs before it dismisses.
    pub dismiss_threshold: f32,
    /// Present the dialog modally.
    pub modal: bool,
}

impl DrawerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snap_points<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<SnapPointInput>,
    {
        self.snap_points = points.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_snap_index(mut self, index: usize) -> Self {
        self.default_snap_index = index;
        self
    }

    pub fn sequential(mut self, sequential: bool) -> Self {
        self.mode = if sequential {
            SnapMode::Sequential
        } else {
            SnapMode::Free
        };
        self
    }

    pub fn with_dismiss_threshold(mut self, threshold: f32) -> Self {
        self.dismiss_threshold = threshold;
        self
    }

    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn is_sequential(&self) -> bool {
        self.mode == SnapMode::Sequential
    }
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            snap_points: Vec::new(),
            default_snap_index: 0,
            mode: SnapMode::Free,
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            modal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = DrawerOptions::default();
        assert!(options.snap_points.is_empty());
        assert_eq!(options.default_snap_index, 0);
        assert_eq!(options.mode, SnapMode::Free);
        assert_eq!(options.dismiss_threshold, 100.0);
        assert!(!options.modal);
    }

    #[test]
    fn builder_accepts_mixed_declarations() {
        let options = DrawerOptions::new()
            .with_snap_points(["20rem", "0.5", "300px"])
            .with_dismiss_threshold(60.0)
            .modal(true)
            .sequential(true);
        assert_eq!(
            options.snap_points,
            vec![
                SnapPointInput::Length("20rem".to_string()),
                SnapPointInput::Number(0.5),
                SnapPointInput::Length("300px".to_string()),
            ]
        );
        assert!(options.is_sequential());
        assert!(options.modal);
        assert_eq!(options.dismiss_threshold, 60.0);
    }
}
