//! Match configuration: board size and fleet composition.

use serde::{Deserialize, Serialize};

use crate::common::BoardError;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: u8 = 10;

/// Board size and ordered fleet composition for one match.
///
/// Both sides play the same configuration. The fleet is a list of vessel
/// lengths placed in order; largest-first is conventional but not required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: u8,
    pub fleet: Vec<u8>,
}

impl GameConfig {
    /// Validated constructor.
    pub fn new(board_size: u8, fleet: Vec<u8>) -> Result<Self, BoardError> {
        let config = GameConfig { board_size, fleet };
        config.validate()?;
        Ok(config)
    }

    /// The classic 10×10 five-vessel fleet.
    pub fn classic() -> Self {
        GameConfig {
            board_size: 10,
            fleet: vec![5, 4, 3, 3, 2],
        }
    }

    /// Board side in `[1, MAX_BOARD_SIZE]`, fleet non-empty, every vessel
    /// between 1 cell and the board side.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidConfiguration(
                "board size must be between 1 and 10",
            ));
        }
        if self.fleet.is_empty() {
            return Err(BoardError::InvalidConfiguration(
                "fleet must contain at least one vessel",
            ));
        }
        if self.fleet.iter().any(|&len| len == 0 || len > self.board_size) {
            return Err(BoardError::InvalidConfiguration(
                "vessel length must be between 1 and the board size",
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// 6×6 board with the original seven-vessel fleet.
    fn default() -> Self {
        GameConfig {
            board_size: 6,
            fleet: vec![3, 2, 2, 1, 1, 1, 1],
        }
    }
}
