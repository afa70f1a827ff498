//! Pointer input, gesture tracking and scroll boundaries for the Prismatia drawer
//!
//! Platform adapters translate their native events into [`PointerEvent`]s and
//! feed them to a [`GestureTracker`]. The tracker reports a normalized drag
//! signal to a [`GestureHandler`] and knows nothing about panels or snapping.

pub mod event_clock;
pub mod gesture_constants;
pub mod nodes;
pub mod scrollable;
pub mod velocity_tracker;

pub use event_clock::EventClock;
pub use nodes::input::gestures::{
    GestureDisposition, GestureHandler, GestureState, GestureTracker, InputTransport,
};
pub use nodes::input::key::{KeyCode, KeyEvent, KeyEventType};
pub use nodes::input::{PointerButton, PointerEvent, PointerEventKind, PointerId, PointerSource};
pub use scrollable::{
    allows_pull_to_dismiss, find_scrollable_ancestor, is_at_scroll_edge, is_scrollable_y,
    Overflow, ScrollEdge, ScrollMetrics, ScrollNode,
};
pub use velocity_tracker::{DragSample, DragVelocityTracker};

pub mod prelude {
    pub use crate::nodes::input::gestures::{GestureHandler, GestureState, GestureTracker};
    pub use crate::nodes::input::prelude::*;
    pub use crate::scrollable::ScrollNode;
}
