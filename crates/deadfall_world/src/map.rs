//! Tile-grid interpretation
//!
//! The map loader (out of scope) produces a grid of tile symbols; this
//! module interprets them into spawn instructions for the world builder.
//! One symbol per tile:
//!
//! - `1` static obstacle
//! - `P` player spawn (exactly one per map)
//! - `E` enemy spawn
//! - `H`/`A`/`M` health / armour / ammo item
//! - `R`/`G`/`S` rifle / handgun / shotgun item
//! - `.` or space: floor

use crate::error::WorldError;
use deadfall_combat::WeaponKind;
use deadfall_inventory::ItemKind;

/// What one tile symbol asks the builder to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Floor,
    Wall,
    PlayerSpawn,
    EnemySpawn,
    ItemSpawn(ItemKind),
}

impl TileKind {
    /// Interpret one tile symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | ' ' => Some(Self::Floor),
            '1' => Some(Self::Wall),
            'P' => Some(Self::PlayerSpawn),
            'E' => Some(Self::EnemySpawn),
            'H' => Some(Self::ItemSpawn(ItemKind::Health)),
            'A' => Some(Self::ItemSpawn(ItemKind::Armour)),
            'M' => Some(Self::ItemSpawn(ItemKind::Ammo)),
            'R' => Some(Self::ItemSpawn(ItemKind::Weapon(WeaponKind::Rifle))),
            'G' => Some(Self::ItemSpawn(ItemKind::Weapon(WeaponKind::Handgun))),
            'S' => Some(Self::ItemSpawn(ItemKind::Weapon(WeaponKind::Shotgun))),
            _ => None,
        }
    }
}

/// A parsed spawn instruction: tile kind plus grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: TileKind,
    pub col: usize,
    pub row: usize,
}

/// Parse a grid of rows into placements, in row-major order.
///
/// Validates that exactly one player spawn exists and every symbol is
/// known; floor tiles are dropped.
pub fn parse_grid(rows: &[&str]) -> Result<Vec<Placement>, WorldError> {
    let mut placements = Vec::new();
    let mut player_seen = false;

    for (row, line) in rows.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            let kind = TileKind::from_symbol(symbol)
                .ok_or(WorldError::UnknownTile { symbol, row, col })?;
            match kind {
                TileKind::Floor => continue,
                TileKind::PlayerSpawn => {
                    if player_seen {
                        return Err(WorldError::MultiplePlayerSpawns { row, col });
                    }
                    player_seen = true;
                }
                _ => {}
            }
            placements.push(Placement { kind, col, row });
        }
    }

    if !player_seen {
        return Err(WorldError::NoPlayerSpawn);
    }
    Ok(placements)
}
