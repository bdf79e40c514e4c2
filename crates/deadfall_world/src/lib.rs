//! Deadfall World - Registry and Frame Orchestration
//!
//! The `World` owns every live entity in typed collections (one player,
//! enemies, projectiles, pickups, static obstacles) and steps them in a
//! fixed per-frame order:
//!
//! 1. player (input effects, movement, obstacle collision)
//! 2. enemies (brain + steering, movement, obstacle collision)
//! 3. projectiles (flight, expiry, wall hits)
//! 4. combat resolution (melee beats contact; bullets before death checks)
//! 5. item pickups
//!
//! Everything is single-threaded and synchronous; timers are plain
//! millisecond counters fed by the frame delta. Discrete happenings leave
//! through a [`deadfall_event::EventChannel`] of [`SimEvent`]s for the
//! audio/HUD collaborators; the renderer reads world state directly.

pub mod config;
pub mod enemy;
pub mod error;
pub mod events;
pub mod input;
pub mod map;
pub mod player;
pub mod world;

pub mod prelude {
    pub use crate::config::{EnemyConfig, GameConfig, PlayerConfig, TileSize};
    pub use crate::enemy::Enemy;
    pub use crate::error::WorldError;
    pub use crate::events::SimEvent;
    pub use crate::input::FrameInput;
    pub use crate::map::TileKind;
    pub use crate::player::{Player, PlayerAction};
    pub use crate::world::{Session, World};
}

pub use prelude::*;
