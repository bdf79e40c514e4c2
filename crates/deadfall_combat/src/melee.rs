//! Transient melee hit-box
//!
//! A swing spawns a short-lived box ahead of the attacker. The first enemy
//! it overlaps takes the hit and consumes the box, so one swing lands at
//! most once. While the box is live it also wins arbitration against that
//! enemy's contact damage.

use crate::weapon::WeaponSpec;
use deadfall_math::{Rect, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An active melee swing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeleeBox {
    pub rect: Rect,
    /// Damage dealt to the victim.
    pub damage: i32,
    /// Facing of the swing, degrees.
    pub facing_deg: f32,
    /// Victim stumble speed along the swing facing.
    pub stumble_speed: f32,
    /// Per-swing lethality probability, sampled from the weapon's range.
    pub lethality: f32,
    /// Remaining live time, milliseconds.
    pub lifetime_ms: f32,
}

impl MeleeBox {
    /// Start a swing with the given weapon from `position` facing
    /// `rotation_deg`. The box sits one reach-length ahead of the attacker.
    pub fn swing<R: Rng>(
        spec: &WeaponSpec,
        position: Vec2,
        rotation_deg: f32,
        stumble: f32,
        rng: &mut R,
    ) -> Self {
        let heading = Vec2::from_heading_deg(rotation_deg);
        let (lo, hi) = spec.melee_kill_chance;
        Self {
            rect: Rect::from_center_size(
                position + heading * spec.melee_reach,
                spec.melee_reach,
                spec.melee_reach,
            ),
            damage: spec.damage,
            facing_deg: rotation_deg,
            stumble_speed: 2.0 * stumble,
            lethality: rng.gen_range(lo..=hi),
            lifetime_ms: spec.melee_duration_ms,
        }
    }

    /// Advance the live window. Returns `true` while still active.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.lifetime_ms -= dt * 1000.0;
        self.lifetime_ms > 0.0
    }

    /// Stumble impulse for the victim, along the swing facing.
    pub fn stumble_velocity(&self) -> Vec2 {
        Vec2::from_heading_deg(self.facing_deg) * self.stumble_speed
    }

    /// Roll whether this particular hit is lethal.
    pub fn roll_lethal<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen::<f32>() < self.lethality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::{WeaponKind, WeaponTable};
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_swing_sits_ahead_of_attacker() {
        let table = WeaponTable::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let swing = MeleeBox::swing(
            table.spec(WeaponKind::Knife),
            Vec2::new(10.0, 20.0),
            0.0,
            100.0,
            &mut rng,
        );
        assert_relative_eq!(swing.rect.center.x, 60.0, epsilon = 1e-4);
        assert_relative_eq!(swing.rect.center.y, 20.0, epsilon = 1e-4);
        assert_eq!(swing.damage, 205);
    }

    #[test]
    fn test_lethality_sampled_within_range() {
        let table = WeaponTable::default();
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..16 {
            let swing = MeleeBox::swing(
                table.spec(WeaponKind::Handgun),
                Vec2::ZERO,
                0.0,
                100.0,
                &mut rng,
            );
            assert!(swing.lethality >= 0.65 && swing.lethality <= 1.0);
        }
    }

    #[test]
    fn test_expires() {
        let table = WeaponTable::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut swing =
            MeleeBox::swing(table.spec(WeaponKind::Knife), Vec2::ZERO, 0.0, 100.0, &mut rng);
        assert!(swing.tick(0.1));
        assert!(!swing.tick(0.15));
    }

    #[test]
    fn test_stumble_along_facing() {
        let table = WeaponTable::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let swing =
            MeleeBox::swing(table.spec(WeaponKind::Knife), Vec2::ZERO, 90.0, 100.0, &mut rng);
        let stumble = swing.stumble_velocity();
        assert_relative_eq!(stumble.length(), 200.0, epsilon = 1e-4);
        // Facing 90 degrees maps to heading (0, -1) in y-down world space.
        assert!(stumble.y < -199.0);
    }
}
