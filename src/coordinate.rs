//! Grid addressing: `(x, y)` pairs and their row-major cell index.

use core::fmt;

use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

/// A validated position on the grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    /// Fails with `OutOfBounds` unless `x < BOARD_WIDTH` and `y < BOARD_HEIGHT`.
    pub fn new(x: usize, y: usize) -> Result<Self, BoardError> {
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok(Coordinate { x, y })
    }

    /// Uniformly random cell anywhere on the grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Coordinate {
            x: rng.random_range(0..BOARD_WIDTH),
            y: rng.random_range(0..BOARD_HEIGHT),
        }
    }

    /// Inverse of [`Coordinate::to_index`].
    pub fn from_index(index: usize) -> Result<Self, BoardError> {
        Self::new(index % BOARD_WIDTH, index / BOARD_WIDTH)
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Row-major index into a board's flat cell storage.
    pub fn to_index(&self) -> usize {
        self.y * BOARD_WIDTH + self.x
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unchecked origin of a ship placement. May be negative or past the edge;
/// the placement validator decides whether the ship fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: isize,
    pub y: isize,
}

impl Anchor {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for Anchor {
    fn from(c: Coordinate) -> Self {
        Anchor {
            x: c.x as isize,
            y: c.y as isize,
        }
    }
}

impl From<(isize, isize)> for Anchor {
    fn from((x, y): (isize, isize)) -> Self {
        Anchor { x, y }
    }
}
