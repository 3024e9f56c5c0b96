//! Vessels: shrinking sets of occupied coordinates.

use std::collections::BTreeSet;

use crate::coord::Coord;

/// Orientation of a straight vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A vessel owns the set of coordinates it still occupies.
///
/// Hits remove cells from the set; an empty set means the vessel is sunk and
/// the grid drops it from its live fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    cells: BTreeSet<Coord>,
}

impl Vessel {
    /// Straight vessel of `len` cells starting at `origin` and extending
    /// right (horizontal) or down (vertical). Coordinates are not
    /// bounds-checked here; the grid validates them at placement.
    pub fn line(origin: Coord, orientation: Orientation, len: u8) -> Self {
        let cells = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
                Orientation::Vertical => Coord::new(origin.row + i, origin.col),
            })
            .collect();
        Vessel { cells }
    }

    /// Vessel over an arbitrary set of coordinates.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        Vessel {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    /// Remove `c` from the vessel. Returns `true` when the shot landed on a
    /// still-occupied cell.
    pub fn hit(&mut self, c: Coord) -> bool {
        self.cells.remove(&c)
    }

    /// True once every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells still afloat.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remaining cells in `(row, col)` order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}
