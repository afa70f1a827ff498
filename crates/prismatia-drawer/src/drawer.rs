//! Drawer panel state machine.
//!
//! [`Drawer`] owns the open state, the resolved snap table, the active snap
//! index and the live drag offset. It never touches a platform: every
//! visible change is queued as a [`DrawerEffect`] and drained by the host.

use prismatia_foundation::{GestureHandler, GestureState, KeyCode, KeyEvent, PointerEvent};
use prismatia_ui_graphics::DEFAULT_ROOT_FONT_SIZE;
use prismatia_ui_layout::{resolve_snap_points, ResolvedSnapPoint, SnapPointInput, SnapTable};

use crate::attributes::parse_snap_points_attribute;
use crate::constants::{DEFAULT_PANEL_HEIGHT, DEFAULT_SWIPE_STRENGTH, FAST_SWIPE_VELOCITY};
use crate::effects::{DrawerEffect, DrawerEvent};
use crate::options::DrawerOptions;
use crate::release::{
    backdrop_opacity, damp_drag_delta, resolve_release_target, swipe_strength, Release,
    ReleaseTarget,
};
use crate::style::{DrawerStyle, StyleProperty};

/// Measured sizes the snap table is resolved against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelMetrics {
    /// Rendered panel height; zero until measured.
    pub panel_height: f32,
    pub viewport_height: f32,
    pub root_font_size: f32,
}

impl PanelMetrics {
    pub fn new(panel_height: f32, viewport_height: f32) -> Self {
        Self {
            panel_height,
            viewport_height,
            root_font_size: DEFAULT_ROOT_FONT_SIZE,
        }
    }

    pub fn with_root_font_size(mut self, root_font_size: f32) -> Self {
        self.root_font_size = root_font_size;
        self
    }

    /// Panel height to resolve against, falling back to the default when
    /// the panel has not been laid out.
    pub fn effective_panel_height(&self) -> f32 {
        if self.panel_height > 0.0 && self.panel_height.is_finite() {
            self.panel_height
        } else {
            DEFAULT_PANEL_HEIGHT
        }
    }

    fn effective_root_font_size(&self) -> f32 {
        if self.root_font_size > 0.0 && self.root_font_size.is_finite() {
            self.root_font_size
        } else {
            DEFAULT_ROOT_FONT_SIZE
        }
    }
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Coarse drawer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerPhase {
    Closed,
    Settled(usize),
    Dragging,
}

/// Bookkeeping for the drag in progress.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    /// Snap offset the drag started from.
    origin_offset: f32,
}

/// Bottom drawer with snap points.
#[derive(Debug)]
pub struct Drawer {
    options: DrawerOptions,
    metrics: PanelMetrics,
    /// Height the current table was resolved with.
    panel_height: f32,
    open: bool,
    active_snap_index: usize,
    resolved: SnapTable,
    style: DrawerStyle,
    drag: Option<DragSession>,
    effects: Vec<DrawerEffect>,
}

impl Drawer {
    /// Creates a closed drawer. The snap table is resolved lazily, on the
    /// first resize, reconfiguration or `show`.
    pub fn new(options: DrawerOptions, metrics: PanelMetrics) -> Self {
        Self {
            active_snap_index: options.default_snap_index,
            options,
            metrics,
            panel_height: metrics.effective_panel_height(),
            open: false,
            resolved: SnapTable::new(),
            style: DrawerStyle::default(),
            drag: None,
            effects: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_swiping(&self) -> bool {
        self.drag.is_some()
    }

    pub fn phase(&self) -> DrawerPhase {
        match (self.open, self.drag) {
            (false, _) => DrawerPhase::Closed,
            (true, Some(_)) => DrawerPhase::Dragging,
            (true, None) => DrawerPhase::Settled(self.active_snap_index),
        }
    }

    pub fn active_snap_index(&self) -> usize {
        self.active_snap_index
    }

    pub fn active_snap_point(&self) -> Option<&ResolvedSnapPoint> {
        self.resolved.get(self.active_snap_index)
    }

    pub fn resolved_snap_points(&self) -> &[ResolvedSnapPoint] {
        &self.resolved
    }

    pub fn style(&self) -> &DrawerStyle {
        &self.style
    }

    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    pub fn metrics(&self) -> PanelMetrics {
        self.metrics
    }

    /// Panel height used by the current snap table.
    pub fn panel_height(&self) -> f32 {
        self.panel_height
    }

    /// Drains the effects queued since the last call.
    pub fn take_effects(&mut self) -> Vec<DrawerEffect> {
        std::mem::take(&mut self.effects)
    }

    pub fn has_pending_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn show(&mut self) {
        if self.open {
            return;
        }
        self.open = true;

        if self.resolved.is_empty() {
            self.resolve();
        }
        if self.active_snap_index >= self.resolved.len() {
            self.active_snap_index = 0;
        }
        log::debug!("drawer show at snap #{}", self.active_snap_index);

        self.effects.push(DrawerEffect::ReflectOpenAttribute(true));
        self.effects.push(DrawerEffect::PresentDialog {
            modal: self.options.modal,
        });
        self.apply_snap_offset();
        self.update_backdrop();
        self.emit(DrawerEvent::OpenChanged(true));
        self.emit(DrawerEvent::Opened);
    }

    pub fn hide(&mut self) {
        self.close();
    }

    /// Programmatic snap. Out-of-range indices are ignored.
    pub fn snap_to(&mut self, index: usize) {
        let Some(point) = self.resolved.get(index).cloned() else {
            log::debug!(
                "snap_to({}) ignored, {} snap points",
                index,
                self.resolved.len()
            );
            return;
        };
        self.active_snap_index = index;
        self.apply_snap_offset();
        self.emit(DrawerEvent::SnapChanged { point, index });
        self.update_backdrop();
    }

    /// Replaces the configuration and re-resolves the snap table.
    pub fn configure(&mut self, options: DrawerOptions) {
        self.active_snap_index = options.default_snap_index;
        self.options = options;
        self.resolve();
        if self.open {
            self.apply_snap_offset();
            self.update_backdrop();
        }
    }

    pub fn set_snap_points(&mut self, snap_points: Vec<SnapPointInput>) {
        self.options.snap_points = snap_points;
        self.resolve();
        if self.open {
            self.apply_snap_offset();
            self.update_backdrop();
        }
    }

    /// Applies a `snap-points` attribute value. Removal and blank values
    /// leave the current declaration in place.
    pub fn set_snap_points_attribute(&mut self, value: Option<&str>) {
        let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
            return;
        };
        self.set_snap_points(parse_snap_points_attribute(value));
    }

    /// Applies the presence of the `open` attribute.
    pub fn set_open_attribute(&mut self, present: bool) {
        if present == self.open {
            return;
        }
        if present {
            self.show();
        } else {
            self.hide();
        }
    }

    /// New measurements. A drag in progress keeps its origin.
    pub fn resize(&mut self, metrics: PanelMetrics) {
        if metrics == self.metrics && !self.resolved.is_empty() {
            return;
        }
        self.metrics = metrics;
        self.resolve();
        if self.open && self.drag.is_none() {
            self.apply_snap_offset();
            self.update_backdrop();
        }
    }

    /// Escape closes an open drawer. Returns true when the key was handled.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.is_key_down() && event.key_code == KeyCode::Escape && self.open {
            self.hide();
            return true;
        }
        false
    }

    /// The platform dialog was dismissed natively.
    pub fn dialog_cancelled(&mut self) {
        self.hide();
    }

    /// Abandons a drag without a release, restoring the settled position.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.set_swiping(false);
        self.set_style(StyleProperty::SwipeY, 0.0);
        self.apply_snap_offset();
        self.update_backdrop();
    }

    fn resolve(&mut self) {
        self.panel_height = self.metrics.effective_panel_height();
        if self.panel_height != self.metrics.panel_height {
            log::warn!(
                "panel height not measured, resolving against {}px",
                self.panel_height
            );
        }

        self.resolved = if self.options.snap_points.is_empty() {
            SnapTable::new()
        } else {
            resolve_snap_points(
                &self.options.snap_points,
                self.panel_height,
                self.metrics.viewport_height,
                self.metrics.effective_root_font_size(),
            )
        };
        if self.resolved.is_empty() {
            self.resolved.push(ResolvedSnapPoint::full_height(self.panel_height));
        }

        if self.active_snap_index >= self.resolved.len() {
            log::debug!(
                "active snap #{} out of range, resetting",
                self.active_snap_index
            );
            self.active_snap_index = 0;
        }
        log::debug!(
            "resolved {} snap points against {}px panel",
            self.resolved.len(),
            self.panel_height
        );
    }

    /// Every close restores the default strength so the next opening
    /// settles at the normal pace.
    fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        if self.drag.take().is_some() {
            self.set_swiping(false);
        }
        log::debug!("drawer hide");

        self.effects.push(DrawerEffect::ReflectOpenAttribute(false));
        self.effects.push(DrawerEffect::CloseDialog);
        self.set_style(StyleProperty::OffsetY, 0.0);
        self.set_style(StyleProperty::SwipeY, 0.0);
        self.set_style(StyleProperty::SwipeStrength, DEFAULT_SWIPE_STRENGTH);
        self.set_style(StyleProperty::BackdropOpacity, 0.0);
        self.emit(DrawerEvent::OpenChanged(false));
        self.emit(DrawerEvent::Closed);
    }

    fn dismiss(&mut self) {
        self.set_style(StyleProperty::SwipeY, 0.0);
        self.close();
    }

    fn apply_snap_offset(&mut self) {
        if let Some(offset) = self.active_snap_point().map(|point| point.offset) {
            self.set_style(StyleProperty::OffsetY, offset);
        }
    }

    fn update_backdrop(&mut self) {
        let opacity = if !self.open {
            0.0
        } else {
            match self.active_snap_point() {
                Some(point) => backdrop_opacity(point.offset, self.panel_height),
                None => backdrop_opacity(0.0, 0.0),
            }
        };
        self.set_style(StyleProperty::BackdropOpacity, opacity);
    }

    fn set_style(&mut self, property: StyleProperty, value: f32) {
        self.style.set(property, value);
        self.effects.push(DrawerEffect::SetStyle(property, value));
    }

    fn set_swiping(&mut self, swiping: bool) {
        self.style.swiping = swiping;
        self.effects.push(DrawerEffect::SetSwiping(swiping));
    }

    fn emit(&mut self, event: DrawerEvent) {
        log::debug!("drawer event: {}", event);
        self.effects.push(DrawerEffect::Emit(event));
    }

    fn min_offset(&self) -> f32 {
        self.resolved.first().map_or(0.0, |point| point.offset)
    }
}

impl GestureHandler for Drawer {
    fn should_start(&mut self, _event: &PointerEvent) -> bool {
        self.open
    }

    fn on_start(&mut self, _event: &PointerEvent) {
        let origin_offset = self.active_snap_point().map_or(0.0, |point| point.offset);
        self.drag = Some(DragSession { origin_offset });
        self.set_swiping(true);
    }

    fn on_move(&mut self, state: &GestureState, _event: &PointerEvent) {
        let Some(session) = self.drag else {
            return;
        };
        if state.is_locked_horizontal() {
            return;
        }

        let delta = damp_drag_delta(session.origin_offset, state.delta_y, self.min_offset());
        self.set_style(StyleProperty::SwipeY, delta);
        let opacity = backdrop_opacity(session.origin_offset + delta, self.panel_height);
        self.set_style(StyleProperty::BackdropOpacity, opacity);
        log::trace!("drag delta {} backdrop {}", delta, opacity);
    }

    fn on_end(&mut self, state: &GestureState, _event: &PointerEvent) {
        let Some(session) = self.drag.take() else {
            return;
        };
        self.set_swiping(false);

        let velocity = state.velocity_y;
        let delta = state.delta_y;
        let release = Release {
            origin_offset: session.origin_offset,
            drag_offset: session.origin_offset + delta,
            velocity,
            panel_height: self.panel_height,
        };

        let strength = swipe_strength(
            velocity.abs(),
            release.drag_offset,
            &self.resolved,
            self.panel_height,
        );
        self.set_style(StyleProperty::SwipeStrength, strength);

        if velocity > FAST_SWIPE_VELOCITY {
            log::debug!("fast swipe ({} px/ms), dismissing", velocity);
            self.dismiss();
            return;
        }
        if delta > self.options.dismiss_threshold && velocity >= 0.0 {
            log::debug!("dragged {}px past dismiss threshold, dismissing", delta);
            self.dismiss();
            return;
        }

        match resolve_release_target(self.options.mode, &release, &self.resolved) {
            ReleaseTarget::Dismiss => {
                log::debug!("no snap target for release, dismissing");
                self.dismiss();
            }
            ReleaseTarget::Snap(index) => {
                log::debug!("release settles at snap #{} (strength {})", index, strength);
                self.active_snap_index = index;
                self.set_style(StyleProperty::SwipeY, 0.0);
                self.apply_snap_offset();
                self.update_backdrop();
                if let Some(point) = self.resolved.get(index).cloned() {
                    self.emit(DrawerEvent::SnapChanged { point, index });
                }
            }
        }
    }

    fn on_cancel(&mut self) {
        self.cancel_drag();
    }
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
