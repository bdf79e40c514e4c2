//! World pickups

use crate::item::{ItemConfig, ItemKind};
use deadfall_math::{Rect, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An item lying in the world, waiting to be walked over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub position: Vec2,
    pub rect: Rect,
    pub kind: ItemKind,
    /// Magnitude of the grant: magazines, hit points, or armour points,
    /// depending on `kind`. Sampled once at spawn.
    pub quantity: u32,
}

impl Pickup {
    /// Spawn an item at a position, sampling its quantity.
    pub fn spawn<R: Rng>(kind: ItemKind, position: Vec2, config: &ItemConfig, rng: &mut R) -> Self {
        Self {
            position,
            rect: Rect::from_center_size(position, config.pickup_extent, config.pickup_extent),
            kind,
            quantity: config.sample_quantity(kind, rng),
        }
    }
}
