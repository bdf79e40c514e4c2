//! Simulation event notifications
//!
//! Discrete happenings the audio subsystem (and HUD) react to. The core
//! never plays a sound; it only reports.

use deadfall_combat::WeaponKind;
use deadfall_inventory::ItemKind;

/// One discrete simulation event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A shot left the muzzle.
    WeaponFired(WeaponKind),
    /// Trigger pulled on an empty clip.
    EmptyClip(WeaponKind),
    /// A spare magazine was swapped in.
    Reloaded(WeaponKind),
    /// A melee swing started.
    MeleeSwing(WeaponKind),
    /// A melee swing connected with an enemy.
    MeleeHit,
    /// A bullet damaged an enemy.
    BulletHit,
    /// An enemy touched the player and dealt contact damage.
    PlayerHurt { damage: i32 },
    /// An enemy died.
    EnemyDied,
    /// The player died; the session is over.
    PlayerDied,
    /// The player walked over an item.
    ItemPickedUp(ItemKind),
    /// Player movement cadence marker.
    Footstep,
}
