use prismatia_foundation::{EventClock, KeyCode, KeyEvent, PointerEvent, PointerEventKind};
use prismatia_ui_graphics::Point;
use winit::dpi::PhysicalPosition;
use winit::event::ElementState;
use winit::keyboard::{Key, NamedKey};

/// Converts winit input into drawer input.
///
/// Positions arrive in physical pixels and are divided by the window scale
/// factor. winit events carry no timestamp, so each one is stamped against
/// an [`EventClock`] started with the platform.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
    clock: EventClock,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            clock: EventClock::new(),
        }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        log::debug!("scale factor changed to {}", factor);
        self.scale_factor = factor;
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    /// Converts and stamps a pointer event with the current time.
    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        position: PhysicalPosition<f64>,
    ) -> PointerEvent {
        self.pointer_event_at(kind, position, self.clock.now_ms())
    }

    pub fn pointer_event_at(
        &self,
        kind: PointerEventKind,
        position: PhysicalPosition<f64>,
        time_ms: f64,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(position), time_ms)
    }

    /// Press or release of the primary mouse button.
    pub fn primary_button(
        &self,
        state: ElementState,
        position: PhysicalPosition<f64>,
    ) -> PointerEvent {
        let kind = match state {
            ElementState::Pressed => PointerEventKind::Down,
            ElementState::Released => PointerEventKind::Up,
        };
        self.pointer_event(kind, position)
    }

    pub fn key_event(&self, key: &Key, state: ElementState) -> KeyEvent {
        let key_code = match key {
            Key::Named(NamedKey::Escape) => KeyCode::Escape,
            Key::Named(NamedKey::Enter) => KeyCode::Enter,
            Key::Named(NamedKey::Tab) => KeyCode::Tab,
            _ => KeyCode::Other,
        };
        match state {
            ElementState::Pressed => KeyEvent::key_down(key_code),
            ElementState::Released => KeyEvent::key_up(key_code),
        }
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_scaled_to_logical_pixels() {
        let platform = DesktopWinitPlatform::new(2.0);
        let event = platform.pointer_event_at(
            PointerEventKind::Move,
            PhysicalPosition::new(300.0, 500.0),
            12.0,
        );
        assert_eq!(event.position, Point::new(150.0, 250.0));
        assert_eq!(event.time_ms, 12.0);
    }

    #[test]
    fn scale_factor_updates_apply_to_later_events() {
        let mut platform = DesktopWinitPlatform::default();
        platform.set_scale_factor(1.5);
        let point = platform.pointer_position(PhysicalPosition::new(150.0, 30.0));
        assert_eq!(point, Point::new(100.0, 20.0));
    }

    #[test]
    fn button_state_maps_to_press_and_release() {
        let platform = DesktopWinitPlatform::default();
        let origin = PhysicalPosition::new(0.0, 0.0);
        assert_eq!(
            platform.primary_button(ElementState::Pressed, origin).kind,
            PointerEventKind::Down
        );
        assert_eq!(
            platform.primary_button(ElementState::Released, origin).kind,
            PointerEventKind::Up
        );
    }

    #[test]
    fn escape_key() {
        let platform = DesktopWinitPlatform::default();
        let event = platform.key_event(&Key::Named(NamedKey::Escape), ElementState::Pressed);
        assert_eq!(event, KeyEvent::key_down(KeyCode::Escape));
        let event = platform.key_event(&Key::Character(" ".into()), ElementState::Released);
        assert_eq!(event, KeyEvent::key_up(KeyCode::Other));
    }
}
