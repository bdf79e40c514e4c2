//! Per-frame input snapshot
//!
//! The input device layer is out of scope; it hands the simulation one of
//! these per frame. Only the *effect* of input is modeled here.

use deadfall_combat::WeaponKind;
use deadfall_math::Vec2;
use serde::{Deserialize, Serialize};

/// Everything the simulation consumes from the input layer in one frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Movement axis, each component in [-1, 1]. Longer vectors are
    /// normalized so diagonals are not faster.
    pub move_axis: Vec2,
    /// Aim direction from the player toward the cursor/stick, world frame.
    /// A zero vector keeps the previous facing.
    pub aim: Vec2,
    /// Trigger held.
    pub fire: bool,
    /// Reload requested.
    pub reload: bool,
    /// Melee swing requested.
    pub melee: bool,
    /// Sprint held.
    pub sprint: bool,
    /// Weapon slot switch requested this frame.
    pub switch_weapon: Option<WeaponKind>,
}

impl FrameInput {
    /// An idle frame: no movement, no triggers.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Movement-only input.
    pub fn moving(axis: Vec2) -> Self {
        Self {
            move_axis: axis,
            ..Self::default()
        }
    }
}
