//! Arsenal bookkeeping
//!
//! Tracks, per owned firearm, the rounds currently chambered (`clip`) and
//! the spare magazines in reserve (`reloads`). The knife never appears
//! here: it neither loads nor runs dry.

use crate::weapon::{WeaponKind, WeaponTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ammo state of one owned firearm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoState {
    /// Rounds currently loaded. Never exceeds the weapon's clip size.
    pub clip: u32,
    /// Spare magazines in reserve.
    pub reloads: u32,
}

/// The player's owned weapons and their ammo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arsenal {
    slots: HashMap<WeaponKind, AmmoState>,
}

impl Arsenal {
    /// Empty arsenal (knife only; the knife needs no slot).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a firearm has been acquired. The knife is always owned.
    pub fn owns(&self, kind: WeaponKind) -> bool {
        !kind.is_firearm() || self.slots.contains_key(&kind)
    }

    /// Ammo state of a firearm, if owned.
    pub fn state(&self, kind: WeaponKind) -> Option<AmmoState> {
        self.slots.get(&kind).copied()
    }

    /// Acquire a firearm for the first time: full clip plus the weapon's
    /// default spare magazines. Re-acquiring is a no-op (use
    /// [`add_reloads`](Self::add_reloads) to merge pickups).
    pub fn add_weapon(&mut self, kind: WeaponKind, table: &WeaponTable) {
        let Some(ranged) = table.spec(kind).ranged.as_ref() else {
            return;
        };
        self.slots.entry(kind).or_insert(AmmoState {
            clip: ranged.clip_size,
            reloads: ranged.default_reloads,
        });
    }

    /// Add spare magazines to an owned firearm. Returns `false` if the
    /// weapon is not owned (or is not a firearm).
    pub fn add_reloads(&mut self, kind: WeaponKind, count: u32) -> bool {
        match self.slots.get_mut(&kind) {
            Some(state) => {
                state.reloads += count;
                true
            }
            None => false,
        }
    }

    /// Consume one chambered round. Returns `false` on an empty clip: the
    /// fire request becomes a no-op, not an error.
    pub fn take_round(&mut self, kind: WeaponKind) -> bool {
        match self.slots.get_mut(&kind) {
            Some(state) if state.clip > 0 => {
                state.clip -= 1;
                true
            }
            _ => false,
        }
    }

    /// Swap in a spare magazine: refills the clip, consumes one reload.
    /// No-op (returns `false`) with an already-full clip or no spares.
    pub fn reload(&mut self, kind: WeaponKind, table: &WeaponTable) -> bool {
        let Some(ranged) = table.spec(kind).ranged.as_ref() else {
            return false;
        };
        match self.slots.get_mut(&kind) {
            Some(state) if state.reloads > 0 && state.clip < ranged.clip_size => {
                state.clip = ranged.clip_size;
                state.reloads -= 1;
                true
            }
            _ => false,
        }
    }
}
