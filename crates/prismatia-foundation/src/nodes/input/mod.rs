pub mod gestures;
pub mod key;
pub mod types;

pub use types::{PointerButton, PointerEvent, PointerEventKind, PointerId, PointerSource};

pub mod prelude {
    pub use super::gestures::InputTransport;
    pub use super::key::{KeyCode, KeyEvent, KeyEventType};
    pub use super::types::{PointerButton, PointerEvent, PointerEventKind, PointerId, PointerSource};
}
