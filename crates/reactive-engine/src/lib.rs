//! Rules engine for reactive-chess.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 mailbox grid of piece values
//! - [`Game`] - turn tracking, move execution, and checkmate detection
//! - [`RuleSet`] - trait seam for the rules, implemented by [`CasualChess`]
//! - Move generation and legality filtering in [`movegen`]
//!
//! # Architecture
//!
//! The board is a plain grid of `Option<Piece>` with value semantics: the
//! grid cell is the only place a piece lives, and cloning the board
//! snapshots everything. Hypothetical positions ("would this move leave my
//! king in check?") are therefore just cheap clones, and nothing read from
//! a snapshot can be stale.
//!
//! Move generation is layered: [`movegen::possible_moves`] enumerates a
//! piece's geometric pattern, and [`movegen::legal_moves`] keeps the
//! candidates whose simulated execution does not leave the mover's own
//! king attacked. Check detection works on the unfiltered layer, so the
//! two never recurse into each other.
//!
//! # Example
//!
//! ```
//! use reactive_engine::Game;
//!
//! let mut game = Game::new();
//! let from = "e2".parse().unwrap();
//! let to = "e4".parse().unwrap();
//! game.make_move(from, to).unwrap();
//! assert!(!game.is_game_over());
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError};
pub use movegen::{is_checkmate, is_in_check, legal_moves, possible_moves, simulate_move};
pub use rules::{CasualChess, GameResult, RuleSet};
