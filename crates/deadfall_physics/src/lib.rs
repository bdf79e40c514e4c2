//! Deadfall Physics - Integration and Collision Resolution
//!
//! This crate provides the kinematic core of the simulation:
//!
//! - Semi-implicit Euler integration shared by every moving entity
//! - Axis-separated resolution of moving hit-rects against static
//!   obstacles (resolve x, then y, one obstacle per axis per frame)
//! - Group-vs-group overlap queries used by combat and pickup resolution
//!
//! There is no general-purpose collision engine underneath: the resolution
//! order and tie-breaks are part of the game's observable behavior, so the
//! passes are implemented directly.

pub mod body;
pub mod collision;
pub mod config;

pub mod prelude {
    pub use crate::body::Body;
    pub use crate::collision::{collide_with_obstacles, first_overlap, group_overlaps, Axis};
    pub use crate::config::PhysicsConfig;
}

pub use prelude::*;
