use core::fmt;

use log::{debug, info};
use rand::Rng;

use crate::board::{FleetBoard, TargetBoard};
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::player::Player;

/// Has the attacker hit every ship segment on the defender's fleet board?
///
/// True only when, for every cell, the fleet board's `occupied` flag equals
/// the target board's `chosen` flag.
pub fn check_winner(target: &TargetBoard, fleet: &FleetBoard) -> bool {
    fleet
        .board()
        .cells()
        .iter()
        .zip(target.board().cells())
        .all(|(own, shot)| own.occupied == shot.chosen)
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    /// Index (0 or 1) of the winning player.
    Won(usize),
}

/// What happened during a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub turn: usize,
    pub attacker: usize,
    pub coord: Coordinate,
    pub hit: bool,
    pub status: GameStatus,
}

/// Per-player shot counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotStats {
    pub guesses: usize,
    pub hits: usize,
}

/// Errors surfaced by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Fleet setup failed; the session cannot start.
    Setup(BoardError),
    /// The configured turn cap was reached without a winner.
    TurnLimit { turns: usize },
    /// A turn was requested after the game ended.
    Finished,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Setup(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Setup(e) => write!(f, "Fleet setup failed: {}", e),
            GameError::TurnLimit { turns } => {
                write!(f, "No winner after {} turns", turns)
            }
            GameError::Finished => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Two players taking alternating turns until one sinks the other's fleet.
///
/// Each call to [`Game::take_turn`] is self-contained, so a host may stop
/// driving the game at any turn boundary.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    stats: [ShotStats; 2],
    attacker: usize,
    turns: usize,
    status: GameStatus,
    config: GameConfig,
}

impl Game {
    /// Start a game between two already-placed players. `first` attacks first.
    pub fn new(first: Player, second: Player, config: GameConfig) -> Self {
        Self {
            players: [first, second],
            stats: [ShotStats::default(); 2],
            attacker: 0,
            turns: 0,
            status: GameStatus::InProgress,
            config,
        }
    }

    /// Create both players, apply the configured guess strategy and place
    /// both fleets at random.
    pub fn setup<R: Rng + ?Sized>(
        rng: &mut R,
        first: &str,
        second: &str,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let mut players = [
            Player::new(first).with_strategy(config.guess_strategy),
            Player::new(second).with_strategy(config.guess_strategy),
        ];
        for p in players.iter_mut() {
            p.randomize_placement_within(rng, config.max_placement_attempts)?;
            debug!("{} fleet:\n{}", p.name(), p.fleet_board().board());
        }
        let [a, b] = players;
        Ok(Self::new(a, b, config))
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, idx: usize) -> &Player {
        &self.players[idx]
    }

    pub fn stats(&self) -> &[ShotStats; 2] {
        &self.stats
    }

    /// Index of the player whose turn it is.
    pub fn attacker(&self) -> usize {
        self.attacker
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(idx) => Some(&self.players[idx]),
            GameStatus::InProgress => None,
        }
    }

    /// Resolve one attack and either declare a winner or hand the turn over.
    pub fn take_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnReport, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::Finished);
        }
        let (a, d) = (self.attacker, 1 - self.attacker);
        let coord = self.players[a].get_guess(rng);
        let hit = self.players[d].check_hit(coord);
        self.players[a].mark_target_attempt(coord, hit);
        self.players[d].mark_player_attempt(coord, hit);

        self.turns += 1;
        self.stats[a].guesses += 1;
        if hit {
            self.stats[a].hits += 1;
        }
        debug!(
            "turn {}: {} fires at {} -> {}",
            self.turns,
            self.players[a].name(),
            coord,
            if hit { "hit" } else { "miss" }
        );

        if check_winner(
            self.players[a].target_board(),
            self.players[d].fleet_board(),
        ) {
            self.status = GameStatus::Won(a);
            info!(
                "{} wins after {} turns",
                self.players[a].name(),
                self.turns
            );
        } else {
            self.attacker = d;
        }

        Ok(TurnReport {
            turn: self.turns,
            attacker: a,
            coord,
            hit,
            status: self.status,
        })
    }

    /// Keep taking turns until someone wins, returning the winner's index.
    ///
    /// Fails with `TurnLimit` if `max_turns` is configured and reached first.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, GameError> {
        self.play_with(rng, |_, _| {})
    }

    /// Like [`Game::play`], calling `observe` after every turn.
    pub fn play_with<R, F>(&mut self, rng: &mut R, mut observe: F) -> Result<usize, GameError>
    where
        R: Rng + ?Sized,
        F: FnMut(&Game, &TurnReport),
    {
        loop {
            if let GameStatus::Won(idx) = self.status {
                return Ok(idx);
            }
            if let Some(limit) = self.config.max_turns {
                if self.turns >= limit {
                    return Err(GameError::TurnLimit { turns: self.turns });
                }
            }
            let report = self.take_turn(rng)?;
            observe(self, &report);
        }
    }
}
