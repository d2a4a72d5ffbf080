use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use submarines::{Game, GameConfig, GuessStrategy};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [uniform|unexplored]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let guess_strategy = match args.get(2).map(String::as_str) {
        None | Some("uniform") => GuessStrategy::Uniform,
        Some("unexplored") => GuessStrategy::Unexplored,
        Some(other) => anyhow::bail!("unknown strategy '{}'", other),
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig {
        guess_strategy,
        ..GameConfig::default()
    };
    let mut game = Game::setup(&mut rng, "player1", "player2", config)
        .map_err(|e| anyhow::anyhow!(e))?;
    let winner = game.play(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let [s1, s2] = *game.stats();
    let result = json!({
        "seed": seed,
        "strategy": guess_strategy,
        "turns": game.turns(),
        "player1": s1,
        "player2": s2,
        "winner": game.player(winner).name(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
