//! Square occupancy masks with a runtime side length.
//!
//! A `size`×`size` grid of flags packed into an unsigned integer `T`.
//! Boards are configurable at run time (up to 10×10), so the side length is
//! a field rather than a const parameter; [`BoardMask`] in a `u128` covers
//! the largest supported board.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr, Not};

use num_traits::{PrimInt, Unsigned};

use crate::common::BoardError;
use crate::coord::Coord;

/// Mask wide enough for the largest supported board.
pub type BoardMask = CellMask<u128>;

/// A square bit mask stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T>
where
    T: PrimInt + Unsigned,
{
    bits: T,
    size: u8,
}

impl<T> CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Empty mask for a `size`×`size` board, without a capacity check.
    /// Use [`CellMask::try_new`] when the size is not already validated.
    pub fn new(size: u8) -> Self {
        debug_assert!(size as usize * size as usize <= Self::capacity());
        CellMask {
            bits: T::zero(),
            size,
        }
    }

    /// Checked constructor: fails when `size*size` exceeds `T`'s bits.
    pub fn try_new(size: u8) -> Result<Self, BoardError> {
        if size as usize * size as usize > Self::capacity() {
            Err(BoardError::MaskCapacity {
                size,
                capacity: Self::capacity(),
            })
        } else {
            Ok(CellMask {
                bits: T::zero(),
                size,
            })
        }
    }

    /// Side length of the mask.
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

    /// Reads the flag at `c`.
    pub fn get(&self, c: Coord) -> Result<bool, BoardError> {
        let idx = self.index(c)?;
        Ok((self.bits >> idx) & T::one() != T::zero())
    }

    /// Infallible test; off-board coordinates read as unset.
    pub fn contains(&self, c: Coord) -> bool {
        self.get(c).unwrap_or(false)
    }

    /// Sets the flag at `c`.
    pub fn set(&mut self, c: Coord) -> Result<(), BoardError> {
        let idx = self.index(c)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the flag at `c`.
    pub fn unset(&mut self, c: Coord) -> Result<(), BoardError> {
        let idx = self.index(c)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Number of set flags.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    /// Clears every flag.
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    fn full_mask(&self) -> T {
        let bits = self.size as usize * self.size as usize;
        if bits == Self::capacity() {
            !T::zero()
        } else {
            (T::one() << bits) - T::one()
        }
    }

    /// Iterator over the set coordinates in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = Coord> {
        let n = self.size as usize;
        let bits = self.bits;
        (0..n * n)
            .filter(move |&i| (bits >> i) & T::one() != T::zero())
            .map(move |i| Coord::new((i / n) as u8, (i % n) as u8))
    }
}

impl<T> fmt::Debug for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask {}x{}:", self.size, self.size)?;
        let n = self.size as usize;
        for r in 0..n {
            for c in 0..n {
                let bit = if (self.bits >> (r * n + c)) & T::one() != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Intersection of two masks of the same size.
impl<T> BitAnd for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        CellMask {
            bits: self.bits & rhs.bits,
            size: self.size,
        }
    }
}

/// Union of two masks of the same size.
impl<T> BitOr for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.size, rhs.size);
        CellMask {
            bits: self.bits | rhs.bits,
            size: self.size,
        }
    }
}

/// Complement within the board bounds.
impl<T> Not for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn not(self) -> Self {
        CellMask {
            bits: !self.bits & self.full_mask(),
            size: self.size,
        }
    }
}
