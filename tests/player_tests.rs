use rand::rngs::SmallRng;
use rand::SeedableRng;
use submarines::{
    BoardError, Coordinate, GuessStrategy, Orientation, Player, BOARD_CELLS, SHIPS,
};

#[test]
fn test_new_player_has_empty_boards() {
    let player = Player::new("player 1");
    assert_eq!(player.name(), "player 1");
    assert_eq!(player.strategy(), GuessStrategy::Uniform);
    assert_eq!(player.fleet_board().board().len(), BOARD_CELLS);
    assert_eq!(player.fleet_board().board().occupied_count(), 0);
    assert_eq!(player.target_board().board().chosen_count(), 0);
}

#[test]
fn test_randomize_ship_placement_each_size() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut player = Player::new("p");
    let mut expected = 0;
    for def in SHIPS.iter() {
        player
            .randomize_ship_placement(&mut rng, def.length())
            .unwrap();
        expected += def.length();
        assert_eq!(player.fleet_board().board().occupied_count(), expected);
    }
}

#[test]
fn test_randomize_rejects_unknown_size() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut player = Player::new("p");
    assert_eq!(
        player.randomize_ship_placement(&mut rng, 0),
        Err(BoardError::InvalidShipSize(0))
    );
    assert_eq!(
        player.randomize_ship_placement(&mut rng, 10),
        Err(BoardError::InvalidShipSize(10))
    );
}

#[test]
fn test_exhausted_placement_restores_fleet() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut player = Player::new("p");
    // fill every row but the last with a 5+5 pair of ships, leaving no room
    // anywhere the randomizer is allowed to anchor
    for y in 0..9 {
        player
            .place_carrier(Orientation::Horizontal, Coordinate::new(0, y).unwrap())
            .unwrap();
        player
            .place_carrier(Orientation::Horizontal, Coordinate::new(5, y).unwrap())
            .unwrap();
    }
    let before = player.fleet_board().clone();
    let err = player.randomize_placement_within(&mut rng, 50).unwrap_err();
    assert_eq!(err, BoardError::PlacementExhausted { size: 5, attempts: 50 });
    assert_eq!(player.fleet_board(), &before);
}

#[test]
fn test_same_seed_same_fleet() {
    let mut a = Player::new("a");
    let mut b = Player::new("b");
    a.randomize_placement(&mut SmallRng::seed_from_u64(42)).unwrap();
    b.randomize_placement(&mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.fleet_board(), b.fleet_board());
}

#[test]
fn test_uniform_guess_stays_on_grid() {
    let mut rng = SmallRng::seed_from_u64(5);
    let player = Player::new("p");
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2000 {
        let c = player.get_guess(&mut rng);
        assert!(Coordinate::new(c.x(), c.y()).is_ok());
        seen.insert(c);
    }
    // the whole grid is reachable, including the last row and column
    assert_eq!(seen.len(), BOARD_CELLS);
}

#[test]
fn test_unexplored_guess_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut player = Player::new("p").with_strategy(GuessStrategy::Unexplored);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..BOARD_CELLS {
        let c = player.get_guess(&mut rng);
        assert!(seen.insert(c), "{} guessed twice", c);
        player.mark_target_attempt(c, false);
    }
    assert_eq!(player.target_board().unexplored().count(), 0);
    // once everything has been tried it falls back to any cell
    let c = player.get_guess(&mut rng);
    assert!(player.target_board().attempted(c));
}

#[test]
fn test_mark_attempts_hit_separate_boards() {
    let mut player = Player::new("p");
    let c = Coordinate::new(6, 2).unwrap();
    player.mark_target_attempt(c, true);
    assert!(player.target_board().scored_hit(c));
    assert!(!player.fleet_board().was_struck(c));

    player.mark_player_attempt(c, true);
    assert!(player.fleet_board().was_struck(c));

    player.mark_target_attempt(c, false);
    player.mark_player_attempt(c, false);
    assert!(!player.target_board().scored_hit(c));
    assert!(!player.fleet_board().was_struck(c));
    assert!(player.target_board().attempted(c));
}

#[test]
fn test_check_hit_does_not_mutate() {
    let mut player = Player::new("p");
    let c = Coordinate::new(1, 1).unwrap();
    player.place_destroyer(Orientation::Vertical, c).unwrap();
    let before = player.fleet_board().clone();
    assert!(player.check_hit(c));
    assert!(!player.check_hit(Coordinate::new(2, 1).unwrap()));
    assert_eq!(player.fleet_board(), &before);
}
