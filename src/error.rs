//! Errors raised while building a board from untrusted input.

use thiserror::Error;

/// Reasons a tile arrangement is rejected as a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Not exactly nine tiles.
    #[error("expected 9 tiles, got {len}")]
    WrongLength { len: usize },

    /// Tile value outside 0..=8.
    #[error("tile {value} is out of range (must be 0-8)")]
    OutOfRange { value: u32 },

    /// The same tile appears more than once.
    #[error("tile {value} appears more than once")]
    Duplicate { value: u8 },

    /// A token that is not a number.
    #[error("cannot parse tile '{token}'")]
    InvalidToken { token: String },
}
