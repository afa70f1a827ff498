//! Input transports a gesture can be bound to.
//!
//! Browsers report a touch contact twice: once as a pointer event with
//! `pointerType == "touch"` and once as a touch event. Each gesture picks one
//! transport when it starts and ignores the other for its whole lifetime.

use crate::nodes::input::types::{PointerButton, PointerEvent, PointerEventKind, PointerId, PointerSource};

/// Event family that delivered a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputTransport {
    /// Pointer events from mice and pens.
    Pointer,
    /// Touch events.
    Touch,
}

impl InputTransport {
    pub(crate) fn stream(self) -> &'static dyn PointerStream {
        match self {
            InputTransport::Pointer => &MousePenStream,
            InputTransport::Touch => &TouchStream,
        }
    }
}

/// Per-transport rules for arming and following a gesture.
pub(crate) trait PointerStream {
    /// Whether `event` may begin a gesture on this transport.
    fn accepts_press(&self, event: &PointerEvent) -> bool;

    /// Whether a follow-up `event` belongs to the gesture started by
    /// `pointer`.
    fn owns(&self, pointer: PointerId, event: &PointerEvent) -> bool;

    /// Whether the host should capture the pointer when a gesture starts.
    fn captures_pointer(&self) -> bool;

    /// Whether moves locked onto the vertical axis suppress native scrolling.
    fn blocks_native_scroll(&self) -> bool;
}

struct MousePenStream;

impl PointerStream for MousePenStream {
    fn accepts_press(&self, event: &PointerEvent) -> bool {
        event.transport == InputTransport::Pointer
            && event.source != PointerSource::Touch
            && event.button == Some(PointerButton::Primary)
    }

    fn owns(&self, pointer: PointerId, event: &PointerEvent) -> bool {
        if event.transport != InputTransport::Pointer {
            return false;
        }
        // Cancellation ends the gesture regardless of which pointer reports it.
        event.kind == PointerEventKind::Cancel || event.id == pointer
    }

    fn captures_pointer(&self) -> bool {
        true
    }

    fn blocks_native_scroll(&self) -> bool {
        false
    }
}

struct TouchStream;

impl PointerStream for TouchStream {
    fn accepts_press(&self, event: &PointerEvent) -> bool {
        event.transport == InputTransport::Touch && event.touch_count == 1
    }

    fn owns(&self, _pointer: PointerId, event: &PointerEvent) -> bool {
        if event.transport != InputTransport::Touch {
            return false;
        }
        // A move without any contact left carries no position.
        event.kind != PointerEventKind::Move || event.touch_count > 0
    }

    fn captures_pointer(&self) -> bool {
        false
    }

    fn blocks_native_scroll(&self) -> bool {
        true
    }
}
