//! Bottom drawer for the Prismatia color editor
//!
//! A [`Drawer`] is a modal panel that slides up from the bottom of the
//! viewport, rests at one of several snap points and can be dragged between
//! them or swiped away. The state machine is platform independent: a
//! [`DrawerHost`] feeds it pointer, key and attribute input and pushes the
//! resulting [`DrawerEffect`]s into a [`DrawerSurface`].

pub mod attributes;
pub mod constants;
mod drawer;
mod effects;
mod host;
mod options;
pub mod release;
mod style;

pub use drawer::{Drawer, DrawerPhase, PanelMetrics};
pub use effects::{DrawerEffect, DrawerEvent};
pub use host::{DrawerHost, DrawerSurface};
pub use options::{DrawerOptions, SnapMode};
pub use release::ReleaseTarget;
pub use style::{DrawerStyle, StyleProperty};

pub use prismatia_ui_layout::{ResolvedSnapPoint, SnapPointInput};

pub mod prelude {
    pub use crate::drawer::{Drawer, PanelMetrics};
    pub use crate::effects::{DrawerEffect, DrawerEvent};
    pub use crate::host::{DrawerHost, DrawerSurface};
    pub use crate::options::{DrawerOptions, SnapMode};
    pub use crate::style::{DrawerStyle, StyleProperty};
}
