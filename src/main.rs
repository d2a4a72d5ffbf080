use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use submarines::{
    init_logging, ui, Game, GameConfig, GuessStrategy, Player, MAX_RANDOM_LIMIT,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch two computer players fight it out on this machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = GuessStrategy::Uniform)]
        strategy: GuessStrategy,
        #[arg(long, help = "Give up after this many turns")]
        max_turns: Option<usize>,
        #[arg(long, default_value_t = MAX_RANDOM_LIMIT)]
        max_attempts: usize,
        #[arg(long, default_value_t = 0, help = "Pause between turns, in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Only print the result")]
        quiet: bool,
    },
    /// Place a random fleet and print it.
    Fleet {
        #[arg(long, help = "Fix RNG seed for reproducible placement")]
        seed: Option<u64>,
        #[arg(long, default_value_t = MAX_RANDOM_LIMIT)]
        max_attempts: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn clear_screen() -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "\x1B[2J\x1B[H")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local {
            seed,
            strategy,
            max_turns,
            max_attempts,
            delay_ms,
            quiet,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let config = GameConfig {
                max_placement_attempts: max_attempts,
                guess_strategy: strategy,
                max_turns,
            };
            let mut game = Game::setup(&mut rng, "player 1", "player 2", config)
                .map_err(|e| anyhow::anyhow!(e))?;
            let delay = Duration::from_millis(delay_ms);

            let winner = game
                .play_with(&mut rng, |game, report| {
                    if quiet {
                        return;
                    }
                    if clear_screen().is_err() {
                        return;
                    }
                    println!(
                        "Turn {}: {} fires at {} - {}",
                        report.turn,
                        game.player(report.attacker).name(),
                        report.coord,
                        if report.hit { "HIT" } else { "miss" }
                    );
                    for p in game.players() {
                        println!("{}", ui::render_player_view(p));
                    }
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                })
                .map_err(|e| anyhow::anyhow!(e))?;

            println!(
                "The winner is {}! ({} turns)",
                game.player(winner).name(),
                game.turns()
            );
        }
        Commands::Fleet { seed, max_attempts } => {
            let mut rng = make_rng(seed);
            let mut player = Player::new("fleet");
            player
                .randomize_placement_within(&mut rng, max_attempts)
                .map_err(|e| anyhow::anyhow!(e))?;
            print!("{}", player.fleet_board().board());
        }
    }
    Ok(())
}
