//! Deadfall Math - 2D Vector and Rectangle Primitives
//!
//! Foundation types for the simulation core: a plain `f32` 2D vector with
//! the rotation/angle conventions the gameplay code relies on, and a
//! center-anchored axis-aligned rectangle used for all hit testing.

pub mod rect;
pub mod vector;

pub mod prelude {
    pub use crate::rect::Rect;
    pub use crate::vector::Vec2;
}

pub use prelude::*;
