//! Weapon definitions
//!
//! The weapon table is static configuration: loaded once at startup (or
//! taken from `Default`, which carries the shipped tuning) and never
//! mutated by the simulation.

use deadfall_math::Vec2;
use serde::{Deserialize, Serialize};

/// The player's weapon slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Knife,
    Handgun,
    Rifle,
    Shotgun,
}

impl WeaponKind {
    /// All kinds, knife first.
    pub const ALL: [Self; 4] = [Self::Knife, Self::Handgun, Self::Rifle, Self::Shotgun];

    /// Whether this weapon fires projectiles.
    pub fn is_firearm(&self) -> bool {
        !matches!(self, Self::Knife)
    }
}

impl Default for WeaponKind {
    fn default() -> Self {
        Self::Knife
    }
}

/// Projectile size class, selecting the hit-rect (and sprite) of spawned
/// bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletSize {
    Small,
    Medium,
    Large,
}

impl BulletSize {
    /// Side length of the square bullet hit-rect, in world units.
    pub fn extent(&self) -> f32 {
        match self {
            Self::Small => 7.0,
            Self::Medium => 10.0,
            Self::Large => 12.0,
        }
    }
}

/// Firing parameters of a projectile weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangedSpec {
    /// Projectile speed, world units per second.
    pub bullet_speed: f32,
    /// Projectile lifetime in milliseconds; expired bullets vanish even
    /// without hitting anything.
    pub bullet_lifetime_ms: f32,
    /// Minimum milliseconds between shots.
    pub fire_rate_ms: f32,
    /// Half-angle of the random spread cone, degrees.
    pub spread_deg: f32,
    /// Projectiles per trigger pull (shotguns fire many at once).
    pub bullet_count: u32,
    /// Hit-rect class of spawned bullets.
    pub bullet_size: BulletSize,
    /// Rounds per magazine.
    pub clip_size: u32,
    /// Spare magazines granted the first time the weapon is acquired.
    pub default_reloads: u32,
    /// Muzzle position relative to the shooter, in the unrotated frame.
    pub barrel_offset: Vec2,
    /// Chance a bullet keeps flying after damaging a target.
    pub penetration_chance: f32,
    /// Penetration budget a fresh bullet carries.
    pub penetration_strength: f32,
}

/// Full definition of one weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponSpec {
    /// Damage per bullet hit, and per melee strike with this weapon.
    pub damage: i32,
    /// Magnitude of the knockback impulse dealt to the wielder's victim.
    pub knockback: f32,
    /// Range the per-swing lethality probability is sampled from.
    pub melee_kill_chance: (f32, f32),
    /// Side length of the square melee box.
    pub melee_reach: f32,
    /// How long a swing's melee box stays live, milliseconds.
    pub melee_duration_ms: f32,
    /// Stamina points regained per second while not sprinting.
    pub stamina_regen: f32,
    /// Stamina points drained per second while sprinting.
    pub stamina_dropoff: f32,
    /// Firing parameters; `None` for melee-only weapons.
    pub ranged: Option<RangedSpec>,
}

/// The static table of all weapon definitions.
///
/// One field per [`WeaponKind`] so a lookup can never fail: an invalid id
/// is unrepresentable, and a table deserialized from JSON is complete by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponTable {
    pub knife: WeaponSpec,
    pub handgun: WeaponSpec,
    pub rifle: WeaponSpec,
    pub shotgun: WeaponSpec,
}

impl WeaponTable {
    /// Look up a weapon definition.
    pub fn spec(&self, kind: WeaponKind) -> &WeaponSpec {
        match kind {
            WeaponKind::Knife => &self.knife,
            WeaponKind::Handgun => &self.handgun,
            WeaponKind::Rifle => &self.rifle,
            WeaponKind::Shotgun => &self.shotgun,
        }
    }
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            knife: WeaponSpec {
                damage: 205,
                knockback: 30.0,
                melee_kill_chance: (0.85, 1.0),
                melee_reach: 50.0,
                melee_duration_ms: 200.0,
                stamina_regen: 2.5,
                stamina_dropoff: 3.0,
                ranged: None,
            },
            handgun: WeaponSpec {
                damage: 225,
                knockback: 20.0,
                melee_kill_chance: (0.65, 1.0),
                melee_reach: 50.0,
                melee_duration_ms: 200.0,
                stamina_regen: 4.25,
                stamina_dropoff: 3.75,
                ranged: Some(RangedSpec {
                    bullet_speed: 7000.0,
                    bullet_lifetime_ms: 5000.0,
                    fire_rate_ms: 100.0,
                    spread_deg: 1.0,
                    bullet_count: 1,
                    bullet_size: BulletSize::Medium,
                    clip_size: 25,
                    default_reloads: 5,
                    barrel_offset: Vec2::new(45.0, 22.0),
                    penetration_chance: 0.5,
                    penetration_strength: 45.0,
                }),
            },
            rifle: WeaponSpec {
                damage: 455,
                knockback: 25.0,
                melee_kill_chance: (0.8, 1.0),
                melee_reach: 64.0,
                melee_duration_ms: 250.0,
                stamina_regen: 4.0,
                stamina_dropoff: 4.0,
                ranged: Some(RangedSpec {
                    bullet_speed: 7000.0,
                    bullet_lifetime_ms: 5000.0,
                    fire_rate_ms: 150.0,
                    spread_deg: 2.0,
                    bullet_count: 1,
                    bullet_size: BulletSize::Large,
                    clip_size: 30,
                    default_reloads: 20,
                    barrel_offset: Vec2::new(60.0, 22.0),
                    penetration_chance: 0.15,
                    penetration_strength: 30.0,
                }),
            },
            shotgun: WeaponSpec {
                damage: 180,
                knockback: 25.0,
                melee_kill_chance: (0.8, 1.0),
                melee_reach: 64.0,
                melee_duration_ms: 250.0,
                stamina_regen: 3.75,
                stamina_dropoff: 4.5,
                ranged: Some(RangedSpec {
                    bullet_speed: 7000.0,
                    bullet_lifetime_ms: 5000.0,
                    fire_rate_ms: 520.0,
                    spread_deg: 8.0,
                    bullet_count: 16,
                    bullet_size: BulletSize::Small,
                    clip_size: 8,
                    default_reloads: 3,
                    barrel_offset: Vec2::new(67.0, 22.0),
                    penetration_chance: 0.2,
                    penetration_strength: 60.0,
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total() {
        let table = WeaponTable::default();
        for kind in WeaponKind::ALL {
            let spec = table.spec(kind);
            assert!(spec.damage > 0);
            assert_eq!(spec.ranged.is_some(), kind.is_firearm());
        }
    }

    #[test]
    fn test_shotgun_is_multi_pellet() {
        let table = WeaponTable::default();
        let ranged = table.spec(WeaponKind::Shotgun).ranged.as_ref().unwrap();
        assert!(ranged.bullet_count > 1);
    }
}
