use crate::ship::ShipType;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Attempts the fleet randomizer makes per ship before giving up.
pub const MAX_RANDOM_LIMIT: usize = 1000;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// How a player picks the next coordinate to attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum GuessStrategy {
    /// Any cell on the grid, repeats allowed.
    #[default]
    Uniform,
    /// Only cells this player has not attacked yet.
    Unexplored,
}

/// Runtime knobs for a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_placement_attempts: usize,
    pub guess_strategy: GuessStrategy,
    /// Stop the turn loop after this many turns. `None` plays until someone wins.
    pub max_turns: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_placement_attempts: MAX_RANDOM_LIMIT,
            guess_strategy: GuessStrategy::Uniform,
            max_turns: None,
        }
    }
}

