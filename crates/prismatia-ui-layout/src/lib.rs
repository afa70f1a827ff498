//! Axis contracts and snap-point resolution for the Prismatia drawer

mod axis;
mod snap_points;

pub use axis::*;
pub use snap_points::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::snap_points::{
        find_adjacent_snap_point, find_closest_snap_point, resolve_snap_points,
        ResolvedSnapPoint, SnapDirection, SnapPointInput, SnapTable,
    };
}
