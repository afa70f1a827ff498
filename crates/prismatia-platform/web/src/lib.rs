//! Web platform adapter for the Prismatia drawer
//!
//! [`WebPlatform`] converts DOM pointer, touch and keyboard events into core
//! inputs. [`WebDrawer`] mounts a complete drawer onto a host element: it
//! builds the dialog and panel markup with its stylesheet, wires the
//! listeners and applies drawer effects through a [`WebDrawerSurface`].

mod error;
mod events;
mod mount;
mod node;
mod notify;
mod styles;
mod surface;

pub use error::WebPlatformError;
pub use events::{
    key_event_type_from_dom, pointer_kind_from_dom, pointer_source_from_dom, WebPlatform,
};
pub use mount::WebDrawer;
pub use node::ElementNode;
pub use notify::DrawerNotifier;
pub use styles::{drawer_stylesheet, DIALOG_CLASS, SWIPING_CLASS};
pub use surface::WebDrawerSurface;

pub mod prelude {
    pub use crate::events::WebPlatform;
    pub use crate::mount::WebDrawer;
    pub use crate::node::ElementNode;
}
