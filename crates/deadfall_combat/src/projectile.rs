//! Projectiles and weapon firing
//!
//! Bullets are plain kinematic bodies with a damage payload, a lifetime,
//! and a penetration budget. Firing samples spread per bullet, so a
//! shotgun blast fans out even from a single trigger pull.

use crate::weapon::{BulletSize, WeaponSpec};
use deadfall_math::Vec2;
use deadfall_physics::Body;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Budget a bullet pays to pass through one victim.
const PASS_THROUGH_COST: f32 = 25.0;

/// A live bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Damage applied to each victim hit.
    pub damage: i32,
    /// Remaining flight time, milliseconds.
    pub lifetime_ms: f32,
    pub size: BulletSize,
    /// Chance to survive a hit, copied from the weapon.
    pub penetration_chance: f32,
    /// Remaining penetration budget.
    pub penetration: f32,
}

impl Projectile {
    /// Advance the lifetime clock. Returns `true` while still live.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.lifetime_ms -= dt * 1000.0;
        self.lifetime_ms > 0.0
    }

    /// Decide whether the bullet continues after damaging a victim.
    ///
    /// It survives only if the penetration roll succeeds AND the remaining
    /// budget covers the pass-through cost; the cost is then debited.
    pub fn punch_through<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.penetration < PASS_THROUGH_COST {
            return false;
        }
        if rng.gen::<f32>() < self.penetration_chance {
            self.penetration -= PASS_THROUGH_COST;
            true
        } else {
            false
        }
    }
}

/// Spawn the projectiles for one trigger pull of a firearm.
///
/// `origin` is the shooter's position and `rotation_deg` the facing. Each
/// bullet leaves the muzzle (barrel offset rotated into the facing) along
/// the facing plus a uniform random spread angle. Returns an empty vec for
/// melee-only weapons; ammo accounting is the caller's job.
pub fn fire<R: Rng>(
    spec: &WeaponSpec,
    origin: Vec2,
    rotation_deg: f32,
    rng: &mut R,
) -> Vec<Projectile> {
    let Some(ranged) = spec.ranged.as_ref() else {
        return Vec::new();
    };

    let muzzle = origin + ranged.barrel_offset.rotate_deg(-rotation_deg);
    let extent = ranged.bullet_size.extent();

    (0..ranged.bullet_count)
        .map(|_| {
            let spread = rng.gen_range(-ranged.spread_deg..=ranged.spread_deg);
            let direction = Vec2::from_heading_deg(rotation_deg + spread);
            Projectile {
                body: Body::new(muzzle, extent, extent)
                    .with_velocity(direction * ranged.bullet_speed),
                damage: spec.damage,
                lifetime_ms: ranged.bullet_lifetime_ms,
                size: ranged.bullet_size,
                penetration_chance: ranged.penetration_chance,
                penetration: ranged.penetration_strength,
            }
        })
        .collect()
}
