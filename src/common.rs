//! Shared result and error types for the sea battle engine.

use core::fmt;

use crate::coord::Coord;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck a vessel that still has cells afloat.
    Hit,
    /// Shot struck the last remaining cell of a vessel.
    Sink,
    /// Shot struck open water.
    Miss,
}

/// Errors returned by board, placement and match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the `[0, size)²` board.
    OutOfBounds(Coord),
    /// Coordinate was already fired upon in this game.
    AlreadyShot(Coord),
    /// A single placement attempt overlaps or touches another vessel.
    ShipPlacementRejected,
    /// Retry budget exhausted at both the per-vessel and per-batch level.
    ShipPlacementExhausted,
    /// Board size or fleet composition outside the allowed range.
    InvalidConfiguration(&'static str),
    /// Requested mask size exceeds the capacity of the backing integer.
    MaskCapacity { size: u8, capacity: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "out of board: {}", c),
            BoardError::AlreadyShot(c) => write!(f, "cell already fired upon: {}", c),
            BoardError::ShipPlacementRejected => {
                write!(f, "vessel overlaps or touches another vessel")
            }
            BoardError::ShipPlacementExhausted => {
                write!(f, "unable to place fleet within the retry budget")
            }
            BoardError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
            BoardError::MaskCapacity { size, capacity } => {
                write!(
                    f,
                    "mask of {}x{} cells exceeds backing capacity of {} bits",
                    size, size, capacity
                )
            }
        }
    }
}

impl std::error::Error for BoardError {}
