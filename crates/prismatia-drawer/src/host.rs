//! Glue between a [`Drawer`], its gesture tracker and a presentation surface.

use prismatia_foundation::{
    allows_pull_to_dismiss, GestureDisposition, GestureTracker, KeyEvent, PointerEvent,
    PointerEventKind, ScrollNode,
};
use prismatia_ui_layout::SnapPointInput;

use crate::attributes::{OPEN_ATTRIBUTE, SNAP_POINTS_ATTRIBUTE};
use crate::drawer::{Drawer, PanelMetrics};
use crate::effects::DrawerEffect;
use crate::options::DrawerOptions;

/// Platform side of a drawer: applies effects and exposes the panel node for
/// scroll-boundary checks.
pub trait DrawerSurface {
    type Node: ScrollNode;

    fn apply(&mut self, effect: &DrawerEffect);

    /// Root of the panel's node tree. Without one every press may drag.
    fn panel_root(&self) -> Option<Self::Node> {
        None
    }
}

/// Owns a drawer and routes platform input to it.
///
/// Every inbound call flushes the drawer's pending effects into the surface
/// before returning. With [`defer_notifications`](Self::defer_notifications)
/// the effects that call back into user code (attribute reflection and
/// events) are held back until [`take_notifications`](Self::take_notifications),
/// so platforms that keep the host behind a `RefCell` can deliver them after
/// releasing the borrow.
pub struct DrawerHost<S: DrawerSurface> {
    drawer: Drawer,
    tracker: GestureTracker,
    surface: S,
    attached: bool,
    defer_notifications: bool,
    notifications: Vec<DrawerEffect>,
}

impl<S: DrawerSurface> DrawerHost<S> {
    pub fn new(options: DrawerOptions, metrics: PanelMetrics, surface: S) -> Self {
        Self {
            drawer: Drawer::new(options, metrics),
            tracker: GestureTracker::new(),
            surface,
            attached: false,
            defer_notifications: false,
            notifications: Vec::new(),
        }
    }

    pub fn defer_notifications(mut self) -> Self {
        self.defer_notifications = true;
        self
    }

    /// Drains notifications held back since the last call, oldest first.
    pub fn take_notifications(&mut self) -> Vec<DrawerEffect> {
        std::mem::take(&mut self.notifications)
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Starts accepting input and resolves the snap table against the
    /// current metrics.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        let metrics = self.drawer.metrics();
        self.drawer.resize(metrics);
        log::debug!("drawer host attached");
        self.flush();
    }

    /// Stops accepting input. An in-flight gesture is dropped and the panel
    /// returns to its settled position.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.tracker.reset();
        self.drawer.cancel_drag();
        log::debug!("drawer host detached");
        self.flush();
    }

    /// Routes a pointer event through the gesture tracker. `target` is the
    /// node the event was dispatched to, when the platform knows it.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        target: Option<&S::Node>,
    ) -> GestureDisposition {
        if !self.attached {
            return GestureDisposition::Ignored;
        }
        if event.kind == PointerEventKind::Down
            && !self.tracker.is_active()
            && !self.press_allowed(target)
        {
            return GestureDisposition::Ignored;
        }

        let disposition = self.tracker.handle(event, &mut self.drawer);
        if let GestureDisposition::Started {
            capture: Some(pointer),
        } = disposition
        {
            self.surface.apply(&DrawerEffect::CapturePointer(pointer));
        }
        self.flush();
        disposition
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let handled = self.drawer.handle_key(event);
        self.flush();
        handled
    }

    pub fn dialog_cancelled(&mut self) {
        self.drawer.dialog_cancelled();
        self.flush();
    }

    pub fn show(&mut self) {
        self.drawer.show();
        self.flush();
    }

    pub fn hide(&mut self) {
        self.drawer.hide();
        self.flush();
    }

    pub fn snap_to(&mut self, index: usize) {
        self.drawer.snap_to(index);
        self.flush();
    }

    pub fn configure(&mut self, options: DrawerOptions) {
        self.drawer.configure(options);
        self.flush();
    }

    pub fn set_snap_points(&mut self, snap_points: Vec<SnapPointInput>) {
        self.drawer.set_snap_points(snap_points);
        self.flush();
    }

    pub fn set_open_attribute(&mut self, present: bool) {
        self.drawer.set_open_attribute(present);
        self.flush();
    }

    pub fn set_snap_points_attribute(&mut self, value: Option<&str>) {
        self.drawer.set_snap_points_attribute(value);
        self.flush();
    }

    /// Dispatches an attribute change by name. Unknown attributes are ignored.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        match name {
            OPEN_ATTRIBUTE => self.set_open_attribute(value.is_some()),
            SNAP_POINTS_ATTRIBUTE => self.set_snap_points_attribute(value),
            _ => log::trace!("ignoring attribute {}", name),
        }
    }

    pub fn resize(&mut self, metrics: PanelMetrics) {
        self.drawer.resize(metrics);
        self.flush();
    }

    /// Pushes pending drawer effects into the surface.
    pub fn flush(&mut self) {
        for effect in self.drawer.take_effects() {
            if self.defer_notifications && effect.is_notification() {
                self.notifications.push(effect);
            } else {
                self.surface.apply(&effect);
            }
        }
    }

    fn press_allowed(&self, target: Option<&S::Node>) -> bool {
        match self.surface.panel_root() {
            Some(root) => allows_pull_to_dismiss(target, &root),
            None => true,
        }
    }
}
