//! Random-vs-random self-play driver.
//!
//! Plays complete games on the engine with both sides choosing uniformly
//! random legal moves, reporting each result. A ply cap keeps dead-end
//! games (no legal moves, no checkmate) from running forever, and an
//! optional per-move delay slows a run down to a watchable pace.

use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_bot::select_random_move;
use reactive_engine::Game;

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(about = "Random-vs-random games on the reactive-chess engine")]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// RNG seed for a reproducible run (entropy-seeded when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop a game after this many plies
    #[arg(long, default_value = "300")]
    max_plies: u32,

    /// Pause between moves, in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,

    /// Only print results, not moves and boards
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new();
    for number in 1..=cli.games {
        game.restart();
        let mut plies = 0;

        while !game.is_game_over() && plies < cli.max_plies {
            let (from, to) = match select_random_move(&game, &mut rng) {
                Some(pair) => pair,
                None => {
                    // No legal moves but no checkmate either; the rules
                    // leave such a game unfinished, so stop driving it.
                    println!(
                        "game {}: {} has no legal moves, abandoning",
                        number,
                        game.turn()
                    );
                    break;
                }
            };
            let mover = game.turn();
            if let Err(err) = game.make_move(from, to) {
                eprintln!("game {}: engine refused {} to {}: {}", number, from, to, err);
                break;
            }
            plies += 1;
            if !cli.quiet {
                println!("game {} ply {}: {} plays {} to {}", number, plies, mover, from, to);
            }
            if cli.delay_ms > 0 {
                thread::sleep(Duration::from_millis(cli.delay_ms));
            }
        }

        if !cli.quiet {
            println!("{}", game.board());
        }
        match game.winner() {
            Some(color) => println!(
                "game {}: {} wins by checkmate after {} plies",
                number, color, plies
            ),
            None => println!("game {}: unfinished after {} plies", number, plies),
        }
    }
}
