//! Deadfall AI - Steering and Enemy Decision Logic
//!
//! This crate provides the enemy-side intelligence of the simulation:
//!
//! - Steering behaviors (seek, wander, separation) that each produce an
//!   acceleration contribution, summed and integrated by the caller
//! - The per-enemy brain: a two-state machine (Wander / Pursue) driven by
//!   target distance and the damaged flag
//!
//! Behaviors are pure functions over positions and velocities; they hold no
//! state and draw randomness only from the RNG handed in, so a seeded run
//! is fully reproducible.

pub mod brain;
pub mod steering;

pub mod prelude {
    pub use crate::brain::{Brain, BrainContext, BrainState};
    pub use crate::steering::{seek, separation, wander};
}

pub use prelude::*;
