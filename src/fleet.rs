//! Random fleet placement with a bounded retry budget.

use log::{trace, warn};
use rand::Rng;

use crate::board::FleetBoard;
use crate::common::BoardError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, SHIPS};
use crate::coordinate::Anchor;
use crate::ship::Orientation;

/// Draw an anchor whose run of `size` cells fits in either orientation:
/// `x` in `[0, BOARD_WIDTH - size)`, `y` in `[0, BOARD_HEIGHT - size)`.
pub fn random_anchor<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Anchor, BoardError> {
    if size >= BOARD_WIDTH || size >= BOARD_HEIGHT {
        return Err(BoardError::InvalidShipSize(size));
    }
    let x = rng.random_range(0..BOARD_WIDTH - size);
    let y = rng.random_range(0..BOARD_HEIGHT - size);
    Ok(Anchor::new(x as isize, y as isize))
}

impl FleetBoard {
    /// Place one ship of `size` at a random position, redrawing orientation
    /// and anchor on each failure. Gives up with `PlacementExhausted` after
    /// `max_attempts` tries; a failed call leaves the board untouched.
    pub fn randomize_ship<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        size: usize,
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        if size == 0 || size >= BOARD_WIDTH || size >= BOARD_HEIGHT {
            return Err(BoardError::InvalidShipSize(size));
        }
        for attempt in 1..=max_attempts {
            let orientation = Orientation::random(rng);
            let anchor = random_anchor(rng, size)?;
            match self.place_ship(size, orientation, anchor) {
                Ok(()) => return Ok(()),
                Err(err @ (BoardError::CellOccupied { .. } | BoardError::OffBoard { .. })) => {
                    trace!("attempt {} for size {} rejected: {}", attempt, size, err);
                }
                Err(err) => return Err(err),
            }
        }
        warn!(
            "giving up on ship of size {} after {} attempts",
            size, max_attempts
        );
        Err(BoardError::PlacementExhausted {
            size,
            attempts: max_attempts,
        })
    }

    /// Place the standard fleet, largest ship first. If any ship runs out of
    /// attempts the board is restored to how it was before the call.
    pub fn randomize_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        let before = self.clone();
        for def in SHIPS.iter() {
            if let Err(err) = self.randomize_ship(rng, def.length(), max_attempts) {
                *self = before;
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn anchor_leaves_room_on_both_axes() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = random_anchor(&mut rng, 4).unwrap();
            assert!((0..(BOARD_WIDTH - 4) as isize).contains(&a.x));
            assert!((0..(BOARD_HEIGHT - 4) as isize).contains(&a.y));
        }
    }

    #[test]
    fn zero_attempts_exhausts_immediately() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut fleet = FleetBoard::new();
        assert_eq!(
            fleet.randomize_ship(&mut rng, 3, 0),
            Err(BoardError::PlacementExhausted { size: 3, attempts: 0 })
        );
        assert_eq!(fleet.board().occupied_count(), 0);
    }
}
