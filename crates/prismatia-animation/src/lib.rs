//! Easing curves and settle transitions for the Prismatia drawer
//!
//! The browser runs the drawer's settle transition in CSS. Renderers without
//! CSS transitions sample a [`SettleAnimation`] per frame instead; both use
//! the same duration and curve.

mod animation;
mod settle;

pub use animation::*;
pub use settle::SettleAnimation;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, CubicBezier, Easing, Lerp};
    pub use crate::settle::SettleAnimation;
}
