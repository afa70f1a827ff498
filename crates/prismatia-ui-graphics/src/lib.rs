//! Pure geometry and unit data for the Prismatia drawer
//!
//! This crate contains the point primitive and CSS-like length units
//! shared by the gesture, layout and drawer crates.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::unit::{Px, Rem};
}
