//! Flat cell storage plus the two per-player views of it.
//!
//! The same [`Cell`] layout backs both boards a player owns, but the
//! `chosen` flag means different things on each:
//!
//! * [`FleetBoard`]: `chosen` records that the opponent attacked this cell
//!   and hit one of our ships.
//! * [`TargetBoard`]: `chosen` records that we attacked this cell and hit.
//!
//! The wrappers keep those meanings apart and decide which code path may set
//! which flag.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{BOARD_CELLS, BOARD_WIDTH};
use crate::coordinate::Coordinate;

/// One grid square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// A ship segment sits here.
    pub occupied: bool,
    /// An attempt against this cell was recorded, with the result as value.
    pub chosen: bool,
}

/// Fixed-length, row-major sequence of cells. Never resized.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board: no ships, no attempts.
    pub fn new() -> Self {
        Board {
            cells: vec![Cell::default(); BOARD_CELLS],
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.cells[coord.to_index()]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells holding a ship segment.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupied).count()
    }

    /// Number of cells whose `chosen` flag is set.
    pub fn chosen_count(&self) -> usize {
        self.cells.iter().filter(|c| c.chosen).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// ` X ` for a ship segment, ` O ` otherwise, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_WIDTH) {
            for cell in row {
                f.write_str(if cell.occupied { " X " } else { " O " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ occupied: {}, chosen: {} }}",
            self.occupied_count(),
            self.chosen_count()
        )?;
        fmt::Display::fmt(self, f)
    }
}

/// A player's own waters: ship positions and incoming hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetBoard {
    board: Board,
}

impl FleetBoard {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Is a ship segment at `coord`?
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.board.cell(coord).occupied
    }

    /// Did the opponent hit us at `coord`?
    pub fn was_struck(&self, coord: Coordinate) -> bool {
        self.board.cell(coord).chosen
    }

    /// Mirror an opponent's attempt onto our own board.
    pub fn mark_incoming(&mut self, coord: Coordinate, hit: bool) {
        self.board.cells_mut()[coord.to_index()].chosen = hit;
    }

    /// Ship segments not yet hit by the opponent.
    pub fn remaining_segments(&self) -> usize {
        self.board
            .cells()
            .iter()
            .filter(|c| c.occupied && !c.chosen)
            .count()
    }

    /// Only the placement path may set `occupied`.
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        self.board.cells_mut()
    }
}

/// A player's record of its own attacks on the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBoard {
    board: Board,
    attempted: Vec<bool>,
}

impl TargetBoard {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            attempted: vec![false; BOARD_CELLS],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Did our attack at `coord` hit?
    pub fn scored_hit(&self, coord: Coordinate) -> bool {
        self.board.cell(coord).chosen
    }

    /// Have we attacked `coord` at all, hit or miss?
    pub fn attempted(&self, coord: Coordinate) -> bool {
        self.attempted[coord.to_index()]
    }

    /// Record that we attacked `coord` and whether it hit.
    pub fn mark_shot(&mut self, coord: Coordinate, hit: bool) {
        let idx = coord.to_index();
        self.board.cells_mut()[idx].chosen = hit;
        self.attempted[idx] = true;
    }

    /// Coordinates we have never attacked, in row-major order.
    pub fn unexplored(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.attempted
            .iter()
            .enumerate()
            .filter(|(_, tried)| !**tried)
            .filter_map(|(idx, _)| Coordinate::from_index(idx).ok())
    }
}

impl Default for TargetBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn render_marks_ships_row_by_row() {
        let mut fleet = FleetBoard::new();
        fleet.cells_mut()[0].occupied = true;
        fleet.cells_mut()[BOARD_WIDTH + 1].occupied = true;
        let text = fleet.board().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BOARD_CELLS / BOARD_WIDTH);
        assert!(lines[0].starts_with(" X  O "));
        assert!(lines[1].starts_with(" O  X  O "));
        assert_eq!(lines[2], " O ".repeat(BOARD_WIDTH));
    }

    #[test]
    fn target_tracks_misses_separately_from_hits() {
        let mut target = TargetBoard::new();
        let c = Coordinate::new(2, 3).unwrap();
        target.mark_shot(c, false);
        assert!(target.attempted(c));
        assert!(!target.scored_hit(c));
        assert_eq!(target.unexplored().count(), BOARD_CELLS - 1);
        assert!(target.unexplored().all(|u| u != c));
    }
}
