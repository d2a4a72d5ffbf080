//! Error type shared by the board, placement and fleet code.

use crate::ship::Orientation;

/// Errors returned by board, placement and randomizer operations.
///
/// Every variant is recoverable: a failed placement leaves the board exactly
/// as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// A ship anchored here would run off the edge of the grid.
    OffBoard {
        size: usize,
        orientation: Orientation,
        x: isize,
        y: isize,
    },
    /// Placement overlaps an existing ship at this cell.
    CellOccupied { x: usize, y: usize },
    /// Orientation value outside the closed {Horizontal, Vertical} set.
    UnknownOrientation,
    /// Ship size is zero or cannot fit on the grid at all.
    InvalidShipSize(usize),
    /// Random placement ran out of attempts for a ship of this size.
    PlacementExhausted { size: usize, attempts: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is out of bounds", x, y)
            }
            BoardError::OffBoard {
                size,
                orientation,
                x,
                y,
            } => write!(
                f,
                "Ship of size {} at ({}, {}) [{}] is off the board",
                size, x, y, orientation
            ),
            BoardError::CellOccupied { x, y } => {
                write!(f, "Cell at ({}, {}) already occupied", x, y)
            }
            BoardError::UnknownOrientation => write!(f, "Unknown orientation"),
            BoardError::InvalidShipSize(size) => write!(f, "Unknown ship with size {}", size),
            BoardError::PlacementExhausted { size, attempts } => write!(
                f,
                "Max random limit reached after {} attempts. Cannot place ship of size {}",
                attempts, size
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
