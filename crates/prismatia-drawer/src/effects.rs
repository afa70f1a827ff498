use std::fmt;

use prismatia_foundation::PointerId;
use prismatia_ui_layout::ResolvedSnapPoint;

use crate::style::StyleProperty;

/// Notifications for drawer consumers.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawerEvent {
    OpenChanged(bool),
    Opened,
    Closed,
    SnapChanged {
        point: ResolvedSnapPoint,
        index: usize,
    },
}

impl DrawerEvent {
    /// DOM event name, for events that have one.
    pub fn dom_name(&self) -> Option<&'static str> {
        match self {
            DrawerEvent::OpenChanged(_) => None,
            DrawerEvent::Opened => Some("drawer-open"),
            DrawerEvent::Closed => Some("drawer-close"),
            DrawerEvent::SnapChanged { .. } => Some("drawer-snap"),
        }
    }
}

impl fmt::Display for DrawerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerEvent::OpenChanged(open) => write!(f, "open changed to {}", open),
            DrawerEvent::Opened => f.write_str("opened"),
            DrawerEvent::Closed => f.write_str("closed"),
            DrawerEvent::SnapChanged { point, index } => {
                write!(f, "snapped to #{} ({}, offset {}px)", index, point.value, point.offset)
            }
        }
    }
}

/// Pending instruction for the presentation surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawerEffect {
    SetStyle(StyleProperty, f32),
    /// Toggle the swiping state; transitions are disabled while set.
    SetSwiping(bool),
    PresentDialog { modal: bool },
    CloseDialog,
    /// Mirror the open state into the host element's `open` attribute.
    ReflectOpenAttribute(bool),
    CapturePointer(PointerId),
    Emit(DrawerEvent),
}

impl DrawerEffect {
    /// Effects that reach observers rather than the panel's appearance.
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            DrawerEffect::ReflectOpenAttribute(_) | DrawerEffect::Emit(_)
        )
    }

    pub fn event(&self) -> Option<&DrawerEvent> {
        match self {
            DrawerEffect::Emit(event) => Some(event),
            _ => None,
        }
    }
}
