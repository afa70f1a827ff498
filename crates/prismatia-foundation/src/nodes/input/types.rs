use crate::nodes::input::gestures::InputTransport;
use prismatia_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Physical device behind a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Pen,
    Touch,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` index.
    pub fn from_dom_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Middle),
            2 => Some(PointerButton::Secondary),
            3 => Some(PointerButton::Back),
            4 => Some(PointerButton::Forward),
            _ => None,
        }
    }
}

/// A pointer or touch event in logical coordinates.
///
/// `transport` records which event family delivered the event. Browsers send
/// touch contacts through both pointer and touch events; the gesture tracker
/// binds each gesture to one family so a contact is never counted twice.
///
/// Events can be consumed by the tracker to tell the platform adapter that
/// the native default action (page scrolling) must be suppressed.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub transport: InputTransport,
    pub source: PointerSource,
    pub position: Point,
    /// Button that changed state, for presses and releases.
    pub button: Option<PointerButton>,
    /// Number of contacts still on the surface (touch transport only).
    pub touch_count: usize,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    /// Creates a primary-button mouse event on the pointer transport.
    pub fn new(kind: PointerEventKind, position: Point, time_ms: f64) -> Self {
        let button = match kind {
            PointerEventKind::Down | PointerEventKind::Up => Some(PointerButton::Primary),
            PointerEventKind::Move | PointerEventKind::Cancel => None,
        };
        Self {
            id: 0,
            kind,
            transport: InputTransport::Pointer,
            source: PointerSource::Mouse,
            position,
            button,
            touch_count: 0,
            time_ms,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Creates an event on the touch transport.
    ///
    /// `touch_count` is the number of contacts currently on the surface, as
    /// reported by `TouchEvent.touches`.
    pub fn touch(kind: PointerEventKind, position: Point, touch_count: usize, time_ms: f64) -> Self {
        let mut event = Self::new(kind, position, time_ms);
        event.transport = InputTransport::Touch;
        event.source = PointerSource::Touch;
        event.button = None;
        event.touch_count = touch_count;
        event
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_button(mut self, button: Option<PointerButton>) -> Self {
        self.button = button;
        self
    }

    /// Mark this event as consumed so the adapter suppresses the native
    /// default action.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
