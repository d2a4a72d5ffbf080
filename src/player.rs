use alloc::string::String;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::board::{FleetBoard, TargetBoard};
use crate::common::BoardError;
use crate::config::{GuessStrategy, MAX_RANDOM_LIMIT};
use crate::coordinate::{Anchor, Coordinate};
use crate::ship::Orientation;

/// One side of a game: a named fleet plus a record of shots fired.
///
/// Each player exclusively owns both of its boards. Ships are placed once
/// during setup; after that only the attempt markers change.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    fleet: FleetBoard,
    target: TargetBoard,
    strategy: GuessStrategy,
}

impl Player {
    /// A player with empty boards who guesses uniformly at random.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fleet: FleetBoard::new(),
            target: TargetBoard::new(),
            strategy: GuessStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: GuessStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> GuessStrategy {
        self.strategy
    }

    pub fn fleet_board(&self) -> &FleetBoard {
        &self.fleet
    }

    pub fn target_board(&self) -> &TargetBoard {
        &self.target
    }

    /// Place a ship of any size on our fleet board.
    pub fn place_ship(
        &mut self,
        size: usize,
        orientation: Orientation,
        anchor: impl Into<Anchor>,
    ) -> Result<(), BoardError> {
        self.fleet.place_ship(size, orientation, anchor)
    }

    pub fn place_carrier(
        &mut self,
        orientation: Orientation,
        anchor: impl Into<Anchor>,
    ) -> Result<(), BoardError> {
        self.place_ship(5, orientation, anchor)
    }

    pub fn place_battleship(
        &mut self,
        orientation: Orientation,
        anchor: impl Into<Anchor>,
    ) -> Result<(), BoardError> {
        self.place_ship(4, orientation, anchor)
    }

    pub fn place_cruiser_or_submarine(
        &mut self,
        orientation: Orientation,
        anchor: impl Into<Anchor>,
    ) -> Result<(), BoardError> {
        self.place_ship(3, orientation, anchor)
    }

    pub fn place_destroyer(
        &mut self,
        orientation: Orientation,
        anchor: impl Into<Anchor>,
    ) -> Result<(), BoardError> {
        self.place_ship(2, orientation, anchor)
    }

    /// Randomly place a single ship of `size`.
    pub fn randomize_ship_placement<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        size: usize,
    ) -> Result<(), BoardError> {
        self.fleet.randomize_ship(rng, size, MAX_RANDOM_LIMIT)
    }

    /// Randomly place the whole standard fleet with the default retry budget.
    pub fn randomize_placement<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.randomize_placement_within(rng, MAX_RANDOM_LIMIT)
    }

    /// Randomly place the whole standard fleet, allowing `max_attempts` tries per ship.
    pub fn randomize_placement_within<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<(), BoardError> {
        self.fleet.randomize_fleet(rng, max_attempts)
    }

    /// Next coordinate to attack, according to this player's strategy.
    pub fn get_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        match self.strategy {
            GuessStrategy::Uniform => Coordinate::random(rng),
            GuessStrategy::Unexplored => self
                .target
                .unexplored()
                .choose(rng)
                .unwrap_or_else(|| Coordinate::random(rng)),
        }
    }

    /// Is one of our ships at `coord`?
    pub fn check_hit(&self, coord: Coordinate) -> bool {
        self.fleet.is_occupied(coord)
    }

    /// We attacked `coord`; record the outcome on our target board.
    pub fn mark_target_attempt(&mut self, coord: Coordinate, hit: bool) {
        self.target.mark_shot(coord, hit);
    }

    /// The opponent attacked `coord`; mirror the outcome on our fleet board.
    pub fn mark_player_attempt(&mut self, coord: Coordinate, hit: bool) {
        self.fleet.mark_incoming(coord, hit);
    }
}
