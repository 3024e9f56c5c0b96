//! Board state: cell grid, shot ledger, live vessels.
//!
//! The grid owns placement validation (the no-touch rule) and shot
//! resolution. Rejected operations never mutate state.

use crate::common::{BoardError, ShotOutcome};
use crate::config::MAX_BOARD_SIZE;
use crate::coord::{self, Coord};
use crate::mask::BoardMask;
use crate::vessel::Vessel;

/// State of a single board cell. Transitions are monotonic within a game:
/// `Empty→Occupied` at placement, `Empty→Miss` and `Occupied→Hit` at shot
/// resolution. Only [`Grid::clear`] resets cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
    Miss,
}

/// A square board holding the fleet of one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<CellState>,
    shots: BoardMask,
    vessels: Vec<Vessel>,
    show_ships: bool,
}

impl Grid {
    /// Empty `size`×`size` grid with a concealed fleet.
    pub fn new(size: u8) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidConfiguration(
                "board size must be between 1 and 10",
            ));
        }
        Ok(Grid {
            size,
            cells: vec![CellState::Empty; size as usize * size as usize],
            shots: BoardMask::try_new(size)?,
            vessels: Vec::new(),
            show_ships: false,
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    fn index(&self, c: Coord) -> Result<usize, BoardError> {
        if c.in_bounds(self.size) {
            Ok(c.row as usize * self.size as usize + c.col as usize)
        } else {
            Err(BoardError::OutOfBounds(c))
        }
    }

    /// True cell state, regardless of the visibility flag.
    pub fn get_cell(&self, c: Coord) -> Result<CellState, BoardError> {
        Ok(self.cells[self.index(c)?])
    }

    /// Cell state as disclosed to an observer: `Occupied` reads as `Empty`
    /// while the fleet is concealed. Hits and misses are always visible.
    pub fn view_cell(&self, c: Coord) -> Result<CellState, BoardError> {
        match self.get_cell(c)? {
            CellState::Occupied if !self.show_ships => Ok(CellState::Empty),
            state => Ok(state),
        }
    }

    pub fn set_cell(&mut self, c: Coord, state: CellState) -> Result<(), BoardError> {
        let idx = self.index(c)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Disclose or conceal `Occupied` cells to [`Grid::view_cell`] callers.
    /// Fleets stay concealed during play and are revealed at game end.
    pub fn set_reveal(&mut self, reveal: bool) {
        self.show_ships = reveal;
    }

    pub fn is_revealed(&self) -> bool {
        self.show_ships
    }

    /// The up-to-8 surrounding coordinates, clipped to the board.
    pub fn neighbors8(&self, c: Coord) -> Vec<Coord> {
        coord::neighbors8(c, self.size)
    }

    /// The up-to-2 vertical neighbors, clipped to the board.
    pub fn neighbors_vertical(&self, c: Coord) -> Vec<Coord> {
        coord::neighbors_vertical(c, self.size)
    }

    /// The up-to-2 horizontal neighbors, clipped to the board.
    pub fn neighbors_horizontal(&self, c: Coord) -> Vec<Coord> {
        coord::neighbors_horizontal(c, self.size)
    }

    /// Place `vessel` under the no-touch rule: every cell must be `Empty`
    /// and free of `Occupied` 8-neighbors. All cells are validated before
    /// any mutation, so a rejected placement changes nothing.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if vessel.is_empty() {
            return Err(BoardError::ShipPlacementRejected);
        }
        for c in vessel.cells() {
            if self.get_cell(c)? != CellState::Empty {
                return Err(BoardError::ShipPlacementRejected);
            }
            for n in self.neighbors8(c) {
                if self.get_cell(n)? == CellState::Occupied {
                    return Err(BoardError::ShipPlacementRejected);
                }
            }
        }
        for c in vessel.cells() {
            let idx = self.index(c)?;
            self.cells[idx] = CellState::Occupied;
        }
        self.vessels.push(vessel);
        Ok(())
    }

    /// Resolve a shot at `c`.
    ///
    /// Off-board coordinates are rejected before the ledger records
    /// anything, and repeated coordinates fail with `AlreadyShot`; neither
    /// rejection mutates any state. A landed shot shrinks the owning vessel,
    /// removing it from the live fleet once empty.
    pub fn shoot(&mut self, c: Coord) -> Result<ShotOutcome, BoardError> {
        self.index(c)?;
        if self.shots.contains(c) {
            return Err(BoardError::AlreadyShot(c));
        }
        self.shots.set(c)?;
        // At most one vessel owns any coordinate, so resolution order is
        // immaterial.
        for i in 0..self.vessels.len() {
            if self.vessels[i].hit(c) {
                self.set_cell(c, CellState::Hit)?;
                if self.vessels[i].is_sunk() {
                    self.vessels.swap_remove(i);
                    return Ok(ShotOutcome::Sink);
                }
                return Ok(ShotOutcome::Hit);
            }
        }
        self.set_cell(c, CellState::Miss)?;
        Ok(ShotOutcome::Miss)
    }

    /// Remove every vessel and reset all cells to `Empty`. Used when fleet
    /// placement gets stuck and has to start over.
    pub fn clear(&mut self) {
        self.vessels.clear();
        for cell in self.cells.iter_mut() {
            *cell = CellState::Empty;
        }
    }

    /// Vessels still afloat.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// True when no vessel is left afloat. Also true on a board that never
    /// had a fleet, so check only after placement.
    pub fn fleet_sunk(&self) -> bool {
        self.vessels.is_empty()
    }

    /// Ledger of every coordinate fired upon so far.
    pub fn shots(&self) -> &BoardMask {
        &self.shots
    }
}
