//! Scripted gestures against a headless drawer host.
//!
//! The robot owns a [`DrawerHost`] with a [`RecordingSurface`] and a virtual
//! clock, so every synthetic event carries an explicit timestamp and
//! velocities are reproducible.
//!
//! # Example
//!
//! ```
//! use prismatia_drawer::{DrawerOptions, PanelMetrics};
//! use prismatia_testing::DrawerRobot;
//!
//! let options = DrawerOptions::new().with_snap_points([1.0_f32, 0.5]);
//! let mut robot = DrawerRobot::new(options, PanelMetrics::new(800.0, 800.0));
//! robot.show();
//!
//! // A slow, short drag settles back where it started.
//! robot.swipe(40.0, 400.0);
//! assert!(robot.drawer().is_open());
//! assert_eq!(robot.drawer().active_snap_index(), 0);
//! ```

use prismatia_drawer::{Drawer, DrawerHost, DrawerOptions, PanelMetrics};
use prismatia_foundation::{
    GestureDisposition, InputTransport, KeyCode, KeyEvent, PointerEvent, PointerEventKind,
    PointerId,
};
use prismatia_ui_graphics::Point;

use crate::scroll_tree::TestNode;
use crate::surface::RecordingSurface;

/// Interval between synthetic move events.
pub const STEP_MS: f64 = 20.0;

/// Horizontal position of scripted gestures.
const GESTURE_X: f32 = 200.0;
/// Vertical position scripted gestures start from.
const GESTURE_Y: f32 = 300.0;

/// Drives a [`DrawerHost`] with timestamped input.
pub struct DrawerRobot {
    host: DrawerHost<RecordingSurface>,
    now_ms: f64,
    transport: InputTransport,
    pointer: PointerId,
    position: Point,
    target: Option<TestNode>,
}

impl DrawerRobot {
    /// Creates and attaches a host with a bare recording surface.
    pub fn new(options: DrawerOptions, metrics: PanelMetrics) -> Self {
        Self::with_surface(options, metrics, RecordingSurface::new())
    }

    pub fn with_surface(
        options: DrawerOptions,
        metrics: PanelMetrics,
        surface: RecordingSurface,
    ) -> Self {
        let mut host = DrawerHost::new(options, metrics, surface);
        host.attach();
        Self {
            host,
            now_ms: 0.0,
            transport: InputTransport::Pointer,
            pointer: 1,
            position: Point::new(GESTURE_X, GESTURE_Y),
            target: None,
        }
    }

    /// Sends subsequent gestures through touch events.
    pub fn using_touch(mut self) -> Self {
        self.transport = InputTransport::Touch;
        self
    }

    /// Dispatches subsequent presses to `target`.
    pub fn targeting(&mut self, target: Option<TestNode>) -> &mut Self {
        self.target = target;
        self
    }

    pub fn host(&self) -> &DrawerHost<RecordingSurface> {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut DrawerHost<RecordingSurface> {
        &mut self.host
    }

    pub fn drawer(&self) -> &Drawer {
        self.host.drawer()
    }

    pub fn surface(&self) -> &RecordingSurface {
        self.host.surface()
    }

    pub fn clear_surface(&mut self) {
        self.host.surface_mut().clear();
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn advance(&mut self, ms: f64) -> &mut Self {
        self.now_ms += ms;
        self
    }

    pub fn show(&mut self) -> &mut Self {
        self.host.show();
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.host.hide();
        self
    }

    pub fn key_down(&mut self, key: KeyCode) -> bool {
        self.host.handle_key(&KeyEvent::key_down(key))
    }

    /// Presses at the current gesture position.
    pub fn press(&mut self) -> GestureDisposition {
        self.position = Point::new(GESTURE_X, GESTURE_Y);
        self.dispatch(PointerEventKind::Down)
    }

    /// Moves the contact to `dy` below the press point at the current time.
    pub fn move_to(&mut self, dy: f32) -> GestureDisposition {
        self.position = Point::new(GESTURE_X, GESTURE_Y + dy);
        self.dispatch(PointerEventKind::Move)
    }

    /// Moves sideways without vertical travel.
    pub fn move_horizontally(&mut self, dx: f32) -> GestureDisposition {
        self.position = Point::new(GESTURE_X + dx, GESTURE_Y);
        self.dispatch(PointerEventKind::Move)
    }

    /// Drags linearly to `dy` over `duration_ms` in [`STEP_MS`] steps.
    pub fn drag_to(&mut self, dy: f32, duration_ms: f64) -> &mut Self {
        let start = self.position.y - GESTURE_Y;
        let steps = (duration_ms / STEP_MS).ceil().max(1.0) as usize;
        let step_ms = duration_ms / steps as f64;
        for step in 1..=steps {
            self.now_ms += step_ms;
            let fraction = step as f32 / steps as f32;
            self.move_to(start + (dy - start) * fraction);
        }
        self
    }

    pub fn release(&mut self) -> GestureDisposition {
        self.dispatch(PointerEventKind::Up)
    }

    pub fn cancel(&mut self) -> GestureDisposition {
        self.dispatch(PointerEventKind::Cancel)
    }

    /// Press, drag `dy` over `duration_ms`, release immediately.
    pub fn swipe(&mut self, dy: f32, duration_ms: f64) -> GestureDisposition {
        self.press();
        self.drag_to(dy, duration_ms);
        self.release()
    }

    /// Like [`swipe`](Self::swipe) but holds still for `hold_ms` before
    /// lifting.
    pub fn drag_and_hold(&mut self, dy: f32, duration_ms: f64, hold_ms: f64) -> GestureDisposition {
        self.press();
        self.drag_to(dy, duration_ms);
        self.now_ms += hold_ms;
        self.release()
    }

    fn dispatch(&mut self, kind: PointerEventKind) -> GestureDisposition {
        let event = match self.transport {
            InputTransport::Pointer => {
                PointerEvent::new(kind, self.position, self.now_ms).with_id(self.pointer)
            }
            InputTransport::Touch => {
                let touches = match kind {
                    PointerEventKind::Down | PointerEventKind::Move => 1,
                    PointerEventKind::Up | PointerEventKind::Cancel => 0,
                };
                PointerEvent::touch(kind, self.position, touches, self.now_ms)
            }
        };
        let disposition = self.host.handle_pointer(&event, self.target.as_ref());
        log::trace!("robot {:?} at {}ms -> {:?}", kind, self.now_ms, disposition);
        disposition
    }
}
