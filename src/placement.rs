//! Placement validation and committing ships to a fleet board.

use log::debug;

use crate::board::FleetBoard;
use crate::common::BoardError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::coordinate::{Anchor, Coordinate};
use crate::ship::{ship_cells, Orientation};

/// Check that a ship of `size` anchored at `anchor` fits on the grid.
///
/// The last valid anchor is `BOARD_WIDTH - size` along x for horizontal ships
/// and `BOARD_HEIGHT - size` along y for vertical ones. Overlap is not
/// checked here. Returns the anchor as a validated coordinate.
pub fn verify_placement(
    size: usize,
    orientation: Orientation,
    anchor: Anchor,
) -> Result<Coordinate, BoardError> {
    if size == 0 || (size > BOARD_WIDTH && size > BOARD_HEIGHT) {
        return Err(BoardError::InvalidShipSize(size));
    }
    let off_board = BoardError::OffBoard {
        size,
        orientation,
        x: anchor.x,
        y: anchor.y,
    };
    if anchor.x < 0 || anchor.y < 0 {
        return Err(off_board);
    }
    let (x, y) = (anchor.x as usize, anchor.y as usize);
    let fits = match orientation {
        Orientation::Horizontal => x + size <= BOARD_WIDTH && y < BOARD_HEIGHT,
        Orientation::Vertical => y + size <= BOARD_HEIGHT && x < BOARD_WIDTH,
    };
    if !fits {
        return Err(off_board);
    }
    Coordinate::new(x, y)
}

impl FleetBoard {
    /// Validate, check for overlap, then mark the ship's cells occupied.
    ///
    /// Nothing is written unless every step succeeds.
    pub fn place_ship(
        &mut self,
        size: usize,
        orientation: Orientation,
        anchor: impl Into<Anchor>,
    ) -> Result<(), BoardError> {
        let anchor = verify_placement(size, orientation, anchor.into())?;

        let cells = self.cells_mut();
        if let Some(idx) = ship_cells(size, orientation, anchor).find(|&i| cells[i].occupied) {
            let taken = Coordinate::from_index(idx)?;
            return Err(BoardError::CellOccupied {
                x: taken.x(),
                y: taken.y(),
            });
        }

        for idx in ship_cells(size, orientation, anchor) {
            cells[idx].occupied = true;
        }
        debug!("placed ship of size {} at {} [{}]", size, anchor, orientation);
        Ok(())
    }
}
