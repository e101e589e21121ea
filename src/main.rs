//! Twenty48: the sliding-tile puzzle in a terminal.
//!
//! ## Usage
//!
//! - `twenty48` - Play interactively
//! - `twenty48 --seed 42` - Play a reproducible game
//! - `twenty48 demo` - Watch random moves play out a game

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use twenty48::board::Direction;
use twenty48::console::Console;
use twenty48::constants::{DEFAULT_SIZE, DEMO_MAX_MOVES, MAX_SIZE, SEPARATOR};
use twenty48::game::Game;
use twenty48::rng::TileRng;

/// Twenty48: slide and merge tiles on a square grid
#[derive(Parser)]
#[command(name = "twenty48")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN), 1 to 16
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,

    /// Seed for tile placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on the terminal
    Play,
    /// Play random moves until the game ends
    Demo {
        /// Stop after this many accepted moves
        #[arg(long, default_value_t = DEMO_MAX_MOVES)]
        max_moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    info!("starting {size}x{size} game (seed {seed:?})", size = cli.size, seed = cli.seed);
    let game = Game::new(cli.size, rng);

    match cli.command {
        Some(Commands::Play) | None => {
            let end = Console::new(game).run()?;
            info!("session ended: {end:?}");
        }
        Some(Commands::Demo { max_moves }) => run_demo(game, max_moves),
    }
    Ok(())
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("board size must be between 1 and {MAX_SIZE}"))
    }
}

fn run_demo<R: TileRng>(mut game: Game<R>, max_moves: usize) {
    println!("Twenty48 demo: random moves\n");

    while !game.is_over() && game.moves() < max_moves {
        let dir = Direction::ALL[game.rng_mut().next_index(Direction::ALL.len())];
        game.step(dir);
    }

    println!("{SEPARATOR}");
    print!("{}", game.board());
    println!("{SEPARATOR}");
    println!("Moves: {}", game.moves());
    println!("Max tile: {}", game.board().max_tile());
    if game.is_over() {
        println!("Game over!");
    }
}
