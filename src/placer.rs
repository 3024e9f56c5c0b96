//! Randomized fleet placement with bounded retries.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::BoardError;
use crate::coord::Coord;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

/// Attempts per vessel before the whole board is reset.
const VESSEL_ATTEMPTS: u32 = 1000;
/// Board resets before placement is abandoned.
const BATCH_ATTEMPTS: u32 = 100;

/// Places fleets of straight vessels onto a grid by rejection sampling.
///
/// Candidates are drawn at random and validated against the no-touch rule
/// until one fits. For the supported board sizes and fleet compositions
/// this terminates well inside the retry budget; the budget exists so a
/// genuinely unplaceable fleet fails instead of spinning forever.
pub struct FleetPlacer {
    rng: SmallRng,
}

impl FleetPlacer {
    pub fn new(rng: SmallRng) -> Self {
        FleetPlacer { rng }
    }

    /// Place one vessel per entry of `sizes`, in order. When a vessel
    /// exhausts its attempts the grid is cleared and the whole sequence
    /// restarts, up to the batch budget.
    pub fn place(&mut self, grid: &mut Grid, sizes: &[u8]) -> Result<(), BoardError> {
        for &len in sizes {
            if len == 0 || len > grid.size() {
                return Err(BoardError::InvalidConfiguration(
                    "vessel length must be between 1 and the board size",
                ));
            }
        }
        for attempt in 0..BATCH_ATTEMPTS {
            match self.place_batch(grid, sizes) {
                Ok(()) => return Ok(()),
                Err(BoardError::ShipPlacementRejected) => {
                    debug!(
                        "fleet placement stuck, resetting board (attempt {})",
                        attempt + 1
                    );
                    grid.clear();
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::ShipPlacementExhausted)
    }

    fn place_batch(&mut self, grid: &mut Grid, sizes: &[u8]) -> Result<(), BoardError> {
        for &len in sizes {
            self.place_one(grid, len)?;
        }
        Ok(())
    }

    fn place_one(&mut self, grid: &mut Grid, len: u8) -> Result<(), BoardError> {
        let size = grid.size();
        for _ in 0..VESSEL_ATTEMPTS {
            let orientation = if self.rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // Clamp the origin so the vessel always fits the board; only
            // overlap and adjacency can reject the candidate.
            let max_row = if orientation == Orientation::Vertical {
                size - len
            } else {
                size - 1
            };
            let max_col = if orientation == Orientation::Horizontal {
                size - len
            } else {
                size - 1
            };
            let origin = Coord::new(
                self.rng.random_range(0..=max_row),
                self.rng.random_range(0..=max_col),
            );
            let vessel = Vessel::line(origin, orientation, len);
            match grid.place_vessel(vessel) {
                Ok(()) => return Ok(()),
                Err(BoardError::ShipPlacementRejected) | Err(BoardError::OutOfBounds(_)) => {
                    continue
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::ShipPlacementRejected)
    }
}
