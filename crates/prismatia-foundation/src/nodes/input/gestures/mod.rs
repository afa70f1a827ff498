pub mod drag;
pub mod transport;

pub use drag::{GestureDisposition, GestureHandler, GestureState, GestureTracker};
pub use transport::InputTransport;
