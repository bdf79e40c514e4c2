//! Deadfall Combat - Weapons, Ammo, Damage, and Health
//!
//! This crate provides combat functionality for the simulation core:
//!
//! - The static weapon table (immutable after load) with per-weapon fire
//!   rate, spread, clip size, knockback, and penetration parameters
//! - Arsenal bookkeeping: chambered rounds vs. spare magazines per weapon
//! - Projectile spawning (spread, multi-pellet) and the penetration model
//! - The transient melee box and its arbitration parameters
//! - Integer health with clamped damage application
//!
//! # Example
//!
//! ```ignore
//! use deadfall_combat::prelude::*;
//!
//! let table = WeaponTable::default();
//! let mut arsenal = Arsenal::new();
//! arsenal.add_weapon(WeaponKind::Rifle, &table);
//!
//! if arsenal.take_round(WeaponKind::Rifle) {
//!     let shots = fire(table.spec(WeaponKind::Rifle), muzzle_origin, rotation, &mut rng);
//! }
//! ```

pub mod arsenal;
pub mod health;
pub mod melee;
pub mod projectile;
pub mod weapon;

pub mod prelude {
    pub use crate::arsenal::{AmmoState, Arsenal};
    pub use crate::health::Health;
    pub use crate::melee::MeleeBox;
    pub use crate::projectile::{fire, Projectile};
    pub use crate::weapon::{BulletSize, RangedSpec, WeaponKind, WeaponSpec, WeaponTable};
}

pub use prelude::*;
