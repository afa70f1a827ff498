//! Testing utilities and gesture robot for the Prismatia drawer

pub mod robot;
pub mod robot_assertions;
pub mod scroll_tree;
pub mod surface;

pub use robot::*;
pub use robot_assertions::assert_approx_eq;
pub use scroll_tree::TestNode;
pub use surface::RecordingSurface;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::scroll_tree::TestNode;
    pub use crate::surface::RecordingSurface;
}
