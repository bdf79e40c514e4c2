//! Error types for world building and configuration

use thiserror::Error;

/// Failures while assembling a world. The step loop itself is infallible;
/// everything that can go wrong goes wrong at startup.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The tile grid contains no player spawn.
    #[error("map has no player spawn ('P' tile)")]
    NoPlayerSpawn,

    /// The tile grid contains more than one player spawn.
    #[error("map has multiple player spawns (first extra at row {row}, col {col})")]
    MultiplePlayerSpawns { row: usize, col: usize },

    /// An unrecognized tile symbol.
    #[error("unknown tile symbol {symbol:?} at row {row}, col {col}")]
    UnknownTile { symbol: char, row: usize, col: usize },

    /// Malformed configuration table.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for world operations.
pub type Result<T> = std::result::Result<T, WorldError>;
