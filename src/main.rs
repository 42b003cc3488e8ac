//! Blocky-Rust: the Blocky board game, headless.
//!
//! ## Usage
//!
//! - `blocky-rust` - Show a demo
//! - `blocky-rust play` - Run a game between automated players
//! - `blocky-rust demo` - Run the demo explicitly

use anyhow::ensure;
use clap::{Parser, Subcommand};

use blocky_rust::block::generate_board;
use blocky_rust::game::Game;
use blocky_rust::moves::{Action, apply_move};
use blocky_rust::player::{InputEvent, create_players};
use blocky_rust::settings::{
    BOARD_SIZE, COLOUR_LIST, DEFAULT_DIFFICULTY, DEFAULT_MAX_DEPTH, DEFAULT_TURNS,
};

/// Blocky-Rust: a quad-tree colour game with automated players
#[derive(Parser)]
#[command(name = "blocky-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless game between automated players
    Play {
        /// Number of random players
        #[arg(long, default_value_t = 1)]
        random: usize,
        /// Difficulty of each smart player (repeat the flag for several)
        #[arg(long = "smart", default_values_t = [DEFAULT_DIFFICULTY])]
        smart: Vec<usize>,
        /// Number of rounds to play
        #[arg(long, default_value_t = DEFAULT_TURNS)]
        turns: usize,
        /// Maximum subdivision depth of the board
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a simple demo of the board operations
    Demo {
        /// RNG seed for a reproducible demo
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            random,
            smart,
            turns,
            max_depth,
            seed,
        }) => run_game(random, &smart, turns, max_depth, seed),
        Some(Commands::Demo { seed }) => run_demo(seed),
        None => run_demo(None),
    }
}

fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}

fn run_game(
    random: usize,
    smart: &[usize],
    turns: usize,
    max_depth: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let total = random + smart.len();
    ensure!(total > 0, "need at least one player");
    ensure!(
        total <= COLOUR_LIST.len(),
        "at most {} players (one goal colour each)",
        COLOUR_LIST.len()
    );
    ensure!(
        smart.iter().all(|&d| d > 0),
        "smart player difficulty must be positive"
    );
    ensure!(
        max_depth <= BOARD_SIZE.trailing_zeros() as usize,
        "max depth {max_depth} does not divide the board into integer unit cells"
    );

    let mut rng = make_rng(seed);
    let players = create_players(0, random, smart, &mut rng);
    for player in &players {
        println!("player {}: {}", player.id, player.goal.description());
    }

    let mut game = Game::new(max_depth, BOARD_SIZE, players, rng);
    for outcome in game.run(turns) {
        let note = if outcome.applied { "" } else { " (no-op)" };
        println!(
            "player {} -> {:?}{note}, score {}",
            outcome.player_id, outcome.mv.action, outcome.score
        );
    }

    println!("\nfinal board:\n{}", game.board);
    for (player, score) in game.players.iter().zip(&game.scores) {
        println!("player {}: {score}", player.id);
    }
    println!("leaders: {:?}", game.leaders());
    Ok(())
}

fn run_demo(seed: Option<u64>) -> anyhow::Result<()> {
    println!("Blocky-Rust: quad-tree colour game\n");

    let mut rng = make_rng(seed);
    let mut board = generate_board(2, 16, &mut rng);
    println!("=== Random board ===");
    println!("{board}");

    println!("=== One smart move ===");
    let mut players = create_players(0, 0, &[20], &mut rng);
    let player = &mut players[0];
    println!("goal: {}", player.goal.description());
    println!("score before: {}", player.goal.score(&board));

    player.process_event(InputEvent::Proceed);
    if let Some(mv) = player.generate_move(&board, &mut rng) {
        if mv.action == Action::Pass {
            println!("player passes");
        } else {
            println!(
                "playing {:?} at {:?} level {}",
                mv.action, mv.position, mv.level
            );
            apply_move(&mut board, &mv, &mut rng);
        }
    }
    println!("{board}");
    println!("score after: {}", player.goal.score(&board));
    Ok(())
}
