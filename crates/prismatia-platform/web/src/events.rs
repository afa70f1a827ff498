//! DOM event conversion.

use prismatia_foundation::{
    KeyCode, KeyEvent, KeyEventType, PointerButton, PointerEvent, PointerEventKind, PointerId,
    PointerSource,
};
use prismatia_ui_graphics::Point;

/// Maps a pointer or touch event type to its phase.
pub fn pointer_kind_from_dom(event_type: &str) -> Option<PointerEventKind> {
    match event_type {
        "pointerdown" | "touchstart" => Some(PointerEventKind::Down),
        "pointermove" | "touchmove" => Some(PointerEventKind::Move),
        "pointerup" | "touchend" => Some(PointerEventKind::Up),
        "pointercancel" | "touchcancel" => Some(PointerEventKind::Cancel),
        _ => None,
    }
}

/// Maps `PointerEvent.pointerType`.
pub fn pointer_source_from_dom(pointer_type: &str) -> PointerSource {
    match pointer_type {
        "touch" => PointerSource::Touch,
        "pen" => PointerSource::Pen,
        _ => PointerSource::Mouse,
    }
}

pub fn key_event_type_from_dom(event_type: &str) -> Option<KeyEventType> {
    match event_type {
        "keydown" => Some(KeyEventType::KeyDown),
        "keyup" => Some(KeyEventType::KeyUp),
        _ => None,
    }
}

/// Converts browser events into core inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    pub fn pointer_position(&self, x: f64, y: f64) -> Point {
        // client_x/client_y are already in CSS pixels (logical coordinates)
        Point {
            x: x as f32,
            y: y as f32,
        }
    }

    pub fn pointer_event(&self, event: &web_sys::PointerEvent) -> Option<PointerEvent> {
        let kind = pointer_kind_from_dom(&event.type_())?;
        let position = self.pointer_position(event.client_x() as f64, event.client_y() as f64);
        let button = match kind {
            PointerEventKind::Down | PointerEventKind::Up => {
                PointerButton::from_dom_index(event.button())
            }
            PointerEventKind::Move | PointerEventKind::Cancel => None,
        };
        let id = PointerId::try_from(event.pointer_id()).unwrap_or_default();
        Some(
            PointerEvent::new(kind, position, event.time_stamp())
                .with_id(id)
                .with_source(pointer_source_from_dom(&event.pointer_type()))
                .with_button(button),
        )
    }

    /// Converts a touch event. The position comes from the first remaining
    /// contact, or from the lifted one when none remain.
    pub fn touch_event(&self, event: &web_sys::TouchEvent) -> Option<PointerEvent> {
        let kind = pointer_kind_from_dom(&event.type_())?;
        let touches = event.touches();
        let contact = touches
            .get(0)
            .or_else(|| event.changed_touches().get(0))?;
        let position =
            self.pointer_position(contact.client_x() as f64, contact.client_y() as f64);
        let id = PointerId::try_from(contact.identifier()).unwrap_or_default();
        Some(
            PointerEvent::touch(kind, position, touches.length() as usize, event.time_stamp())
                .with_id(id),
        )
    }

    pub fn key_event(&self, event: &web_sys::KeyboardEvent) -> Option<KeyEvent> {
        let key_code = KeyCode::from_dom_key(&event.key());
        match key_event_type_from_dom(&event.type_())? {
            KeyEventType::KeyDown => Some(KeyEvent::key_down(key_code)),
            KeyEventType::KeyUp => Some(KeyEvent::key_up(key_code)),
        }
    }
}
