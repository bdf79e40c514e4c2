//! Game configuration
//!
//! One immutable bundle of every tunable, assembled at startup. `Default`
//! carries the shipped tuning; [`GameConfig::from_json`] loads an external
//! table. The simulation never mutates a config.

use crate::error::WorldError;
use deadfall_combat::WeaponTable;
use deadfall_inventory::ItemConfig;
use deadfall_physics::PhysicsConfig;
use serde::{Deserialize, Serialize};

/// Player tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Walk speed, world units per second.
    pub speed: f32,
    /// Speed multiplier while sprinting.
    pub sprint_boost: f32,
    pub max_health: i32,
    pub max_stamina: f32,
    /// Side length of the square hit-rect.
    pub hit_extent: f32,
    /// Base stumble speed imparted to melee victims.
    pub melee_stumble: f32,
    /// Milliseconds between footstep events while sprinting.
    pub footstep_sprint_ms: f32,
    /// Milliseconds between footstep events while walking.
    pub footstep_walk_ms: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 140.0,
            sprint_boost: 2.25,
            max_health: 100,
            max_stamina: 100.0,
            hit_extent: 50.0,
            melee_stumble: 100.0,
            footstep_sprint_ms: 350.0,
            footstep_walk_ms: 750.0,
        }
    }
}

/// Enemy tuning. The per-spawn pools are sampled once per enemy at
/// construction time, from the world RNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyConfig {
    /// Side length of the square hit-rect.
    pub hit_extent: f32,
    /// Contact damage range, inclusive.
    pub damage: (i32, i32),
    /// Positional knockback applied to the player on contact.
    pub knockback: f32,
    /// Minimum milliseconds between contact attacks per enemy.
    pub attack_rate_ms: f32,
    /// Speed pool sampled at spawn.
    pub speeds: Vec<f32>,
    /// Health pool sampled at spawn.
    pub healths: Vec<i32>,
    /// Max steering force pool sampled at spawn.
    pub seek_forces: Vec<f32>,
    /// Radius inside which the player is noticed.
    pub detect_radius: f32,
    /// Separation radius between enemies.
    pub avoid_radius: f32,
    /// Wander ring projection distance.
    pub wander_ring_distance: f32,
    /// Wander ring radius pool, sampled per wander step.
    pub wander_ring_radii: Vec<f32>,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            hit_extent: 64.0,
            damage: (20, 39),
            knockback: 10.0,
            attack_rate_ms: 500.0,
            speeds: vec![150.0, 160.0, 170.0, 180.0, 190.0, 200.0, 210.0],
            healths: vec![500],
            seek_forces: vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
            detect_radius: 550.0,
            avoid_radius: 10.0,
            wander_ring_distance: 100.0,
            wander_ring_radii: vec![40.0, 50.0, 60.0, 70.0, 80.0, 90.0],
        }
    }
}

/// The full configuration bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tile_size: TileSize,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub weapons: WeaponTable,
    pub items: ItemConfig,
    pub physics: PhysicsConfig,
}

/// Edge length of one map tile, world units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileSize(pub f32);

impl Default for TileSize {
    fn default() -> Self {
        Self(64.0)
    }
}

impl GameConfig {
    /// Load a configuration from a JSON table. Missing sections fall back
    /// to the shipped defaults.
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_shipped_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.tile_size.0, 64.0);
        assert_eq!(config.player.speed, 140.0);
        assert_eq!(config.enemy.speeds.len(), 7);
        assert_eq!(config.enemy.healths, vec![500]);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = GameConfig::from_json(r#"{"player": {
            "speed": 200.0, "sprint_boost": 2.0, "max_health": 150,
            "max_stamina": 100.0, "hit_extent": 50.0, "melee_stumble": 100.0,
            "footstep_sprint_ms": 350.0, "footstep_walk_ms": 750.0
        }}"#)
        .unwrap();
        assert_eq!(config.player.speed, 200.0);
        assert_eq!(config.player.max_health, 150);
        // Untouched sections keep their defaults.
        assert_eq!(config.enemy.detect_radius, 550.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(GameConfig::from_json("not json").is_err());
    }
}
