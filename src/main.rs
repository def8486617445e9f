//! Quadgame command-line front end.
//!
//! ## Usage
//!
//! - `quadgame` - Show a demo
//! - `quadgame console` - Start the text console on stdin/stdout
//! - `quadgame random` - Play a random game on one quad

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use quadgame::board::Board;
use quadgame::console::Console;
use quadgame::constants::{DEFAULT_MAX_MOVES, DEFAULT_NUM_QUADS};
use quadgame::marker::{MoveKind, Player};
use quadgame::playout::{dump_record, random_game};
use quadgame::quad::Quad;
use quadgame::rules::RuleSet;
use quadgame::square::Square;

/// Quadgame: rules engine for a board game on 4x4 quads
#[derive(Parser)]
#[command(name = "quadgame")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Rule set: standard or strict
    #[arg(long, global = true, default_value = "standard")]
    rules: RuleSet,

    /// Print diagnostics to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted demo on a single quad
    Demo,
    /// Read commands from stdin and answer on stdout
    Console {
        /// Number of quads on the board (must be even)
        #[arg(long, default_value_t = DEFAULT_NUM_QUADS)]
        quads: usize,
    },
    /// Play random moves on a single quad
    Random {
        /// Seed for the move picker; random if omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many moves
        #[arg(long, default_value_t = DEFAULT_MAX_MOVES)]
        moves: usize,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Console { quads }) => {
            let board = Board::with_rules(quads, cli.rules)
                .with_context(|| format!("creating a board with {quads} quads"))?;
            let mut console = Console::new(board).verbose(cli.verbose);
            let stdin = io::stdin();
            console
                .run(stdin.lock(), io::stdout())
                .context("console I/O failed")?;
        }
        Some(Commands::Random { seed, moves }) => {
            check_move_cap(moves)?;
            let seed = seed.unwrap_or_else(|| fastrand::u64(..));
            if cli.verbose {
                eprintln!("seed {seed}, rules {}", cli.rules);
            }
            let mut rng = fastrand::Rng::with_seed(seed);
            let mut quad = Quad::with_rules(cli.rules);
            let record = random_game(&mut quad, moves, &mut rng);
            if cli.verbose {
                dump_record(&record);
            }
            println!("Played {} moves (seed {seed})", record.len());
            println!("{quad}");
        }
        Some(Commands::Demo) | None => run_demo(cli.rules),
    }

    Ok(())
}

fn check_move_cap(moves: usize) -> Result<()> {
    if moves == 0 {
        bail!("--moves must be at least 1");
    }
    Ok(())
}

fn run_demo(rules: RuleSet) {
    println!("Quadgame: single quad demo ({rules} rules)\n");

    let mut quad = Quad::with_rules(rules);
    println!("{quad}");

    let script: &[((usize, usize), (usize, usize), Player)] = &[
        ((3, 0), (2, 1), Player::One),
        ((0, 0), (2, 0), Player::Two),
        // The piece has already left (0, 0)
        ((0, 0), (2, 0), Player::Two),
        ((3, 1), (1, 3), Player::One),
        ((0, 0), (5, 0), Player::Two),
        // Three squares along the diagonal
        ((3, 3), (0, 0), Player::One),
    ];

    for &(start, end, player) in script {
        let (start, end) = (Square::from(start), Square::from(end));
        match quad.move_piece(start, end, player, MoveKind::Passive) {
            Ok(()) => println!("{}: {start} -> {end}\n{quad}", player.name()),
            Err(e) => println!("{}: {e}\n", player.name()),
        }
    }

    quad.reset();
    println!("After reset:\n{quad}");
}
