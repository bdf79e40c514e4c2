//! Item kinds and quantity distributions

use deadfall_combat::WeaponKind;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What a world item grants when picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A weapon plus spare magazines for it.
    Weapon(WeaponKind),
    /// Immediate healing.
    Health,
    /// Spare magazines for the wielded firearm.
    Ammo,
    /// Armour points, consumed before health when taking damage.
    Armour,
}

impl ItemKind {
    /// Whether picking this up switches the player's weapon.
    pub fn is_weapon(&self) -> bool {
        matches!(self, Self::Weapon(_))
    }
}

/// Inclusive quantity range.
type Range = (u32, u32);

/// Per-kind quantity distributions, fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Spare magazines granted by a weapon item, per firearm.
    pub rifle_reloads: Range,
    pub handgun_reloads: Range,
    pub shotgun_reloads: Range,
    /// Hit points restored by a health pack.
    pub health_points: Range,
    /// Spare magazines in an ammo box.
    pub ammo_reloads: Range,
    /// Armour pool values an armour item is drawn from.
    pub armour_values: Vec<u32>,
    /// Side length of the square item hit-rect.
    pub pickup_extent: f32,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            rifle_reloads: (2, 3),
            handgun_reloads: (3, 4),
            shotgun_reloads: (1, 1),
            health_points: (10, 20),
            ammo_reloads: (4, 5),
            armour_values: vec![50, 75, 100],
            pickup_extent: 48.0,
        }
    }
}

impl ItemConfig {
    /// Sample the quantity carried by a freshly spawned item.
    pub fn sample_quantity<R: Rng>(&self, kind: ItemKind, rng: &mut R) -> u32 {
        let (lo, hi) = match kind {
            ItemKind::Weapon(WeaponKind::Rifle) => self.rifle_reloads,
            ItemKind::Weapon(WeaponKind::Handgun) => self.handgun_reloads,
            ItemKind::Weapon(WeaponKind::Shotgun) => self.shotgun_reloads,
            // A knife item grants nothing beyond the weapon itself.
            ItemKind::Weapon(WeaponKind::Knife) => return 0,
            ItemKind::Health => self.health_points,
            ItemKind::Ammo => self.ammo_reloads,
            ItemKind::Armour => {
                if self.armour_values.is_empty() {
                    return 0;
                }
                let index = rng.gen_range(0..self.armour_values.len());
                return self.armour_values[index];
            }
        };
        rng.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_quantities_within_range() {
        let config = ItemConfig::default();
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..32 {
            let q = config.sample_quantity(ItemKind::Weapon(WeaponKind::Rifle), &mut rng);
            assert!((2..=3).contains(&q));
            let q = config.sample_quantity(ItemKind::Health, &mut rng);
            assert!((10..=20).contains(&q));
            let q = config.sample_quantity(ItemKind::Armour, &mut rng);
            assert!([50, 75, 100].contains(&q));
        }
    }

    #[test]
    fn test_fixed_range_is_fixed() {
        let config = ItemConfig::default();
        let mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..8 {
            assert_eq!(
                config.sample_quantity(ItemKind::Weapon(WeaponKind::Shotgun), &mut rng),
                1
            );
        }
    }
}
