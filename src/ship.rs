//! Ship definitions and orientation-aware cell indexing.
//!
//! A ship is not stored anywhere as an entity: it is a contiguous run of
//! `length` cells starting at an anchor and extending along +x or +y.

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::common::BoardError;
use crate::config::BOARD_WIDTH;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Fair coin flip between the two orientations.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Index distance between consecutive cells of a ship in this orientation.
    pub fn stride(self) -> usize {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => BOARD_WIDTH,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "HORIZONTAL"),
            Orientation::Vertical => write!(f, "VERTICAL"),
        }
    }
}

impl FromStr for Orientation {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("horizontal") || s.eq_ignore_ascii_case("h") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") || s.eq_ignore_ascii_case("v") {
            Ok(Orientation::Vertical)
        } else {
            Err(BoardError::UnknownOrientation)
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = BoardError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            _ => Err(BoardError::UnknownOrientation),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Flat indices of the `size` cells a ship anchored at `anchor` covers.
///
/// The caller is responsible for having validated that the run fits.
pub fn ship_cells(
    size: usize,
    orientation: Orientation,
    anchor: Coordinate,
) -> impl Iterator<Item = usize> {
    let start = anchor.to_index();
    let stride = orientation.stride();
    (0..size).map(move |i| start + i * stride)
}
