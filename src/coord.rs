//! Board coordinates and clipped neighborhood queries.

use core::fmt;

/// A 0-indexed (row, column) position on a square board.
///
/// Equality, ordering and hashing all follow `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }

    /// True when the coordinate lies on a `size`×`size` board.
    pub fn in_bounds(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Offset by `(dr, dc)`; `None` when the result falls off the board.
    pub fn offset(self, dr: i8, dc: i8, size: u8) -> Option<Coord> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= size as i16 || col >= size as i16 {
            None
        } else {
            Some(Coord::new(row as u8, col as u8))
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The up-to-8 surrounding coordinates, clipped to the board.
pub fn neighbors8(c: Coord, size: u8) -> Vec<Coord> {
    let mut out = Vec::with_capacity(8);
    for dr in -1..=1i8 {
        for dc in -1..=1i8 {
            if dr == 0 && dc == 0 {
                continue;
            }
            if let Some(n) = c.offset(dr, dc, size) {
                out.push(n);
            }
        }
    }
    out
}

/// The up-to-2 vertical neighbors, clipped to the board.
pub fn neighbors_vertical(c: Coord, size: u8) -> Vec<Coord> {
    [(-1i8, 0i8), (1, 0)]
        .iter()
        .filter_map(|&(dr, dc)| c.offset(dr, dc, size))
        .collect()
}

/// The up-to-2 horizontal neighbors, clipped to the board.
pub fn neighbors_horizontal(c: Coord, size: u8) -> Vec<Coord> {
    [(0i8, -1i8), (0, 1)]
        .iter()
        .filter_map(|&(dr, dc)| c.offset(dr, dc, size))
        .collect()
}
