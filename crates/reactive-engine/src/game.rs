//! Game state machine: turn tracking, move execution, and termination.

use reactive_core::{Color, Square};
use thiserror::Error;

use crate::rules::{CasualChess, GameResult, RuleSet};
use crate::{movegen, Board};

/// Errors returned when a move request violates the game contract.
///
/// Rule-degenerate situations (a piece with nowhere to go, a side with no
/// candidates) are not errors; they surface as empty move lists. Errors
/// are reserved for requests the state machine must refuse outright.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// There is no piece on the requested source square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the source square belongs to the side not on move.
    #[error("piece on {from} belongs to {mover}, but it is {turn}'s turn")]
    OutOfTurn {
        /// Requested source square.
        from: Square,
        /// Color of the piece on the source square.
        mover: Color,
        /// The side actually on move.
        turn: Color,
    },
    /// The destination is not a legal move for the piece.
    #[error("illegal move: {from} to {to}")]
    IllegalMove {
        /// Requested source square.
        from: Square,
        /// Requested destination square.
        to: Square,
    },
}

/// A chess game: the board, whose turn it is, and the result once the
/// game has ended.
///
/// `Game` is an owned value that callers thread explicitly; there is no
/// shared or global state. The board is mutated only by [`make_move`]
/// (and reset by [`restart`]); generation, simulation, and check
/// detection all work on snapshots.
///
/// [`make_move`]: Game::make_move
/// [`restart`]: Game::restart
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to
    /// move.
    pub fn new() -> Self {
        Game {
            board: CasualChess.initial_board(),
            turn: Color::White,
            result: None,
        }
    }

    /// Creates a game from an arbitrary board with `turn` to move.
    ///
    /// If `turn` is already checkmated, the game starts out finished.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = Game {
            board,
            turn,
            result: None,
        };
        game.check_game_end();
        game
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the result if the game has ended.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the winning color if the game has ended.
    pub fn winner(&self) -> Option<Color> {
        self.result.map(GameResult::winner)
    }

    /// Returns the legal destinations for the piece on `from`, suitable
    /// for highlighting a selected piece.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        movegen::legal_moves(&self.board, from)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        movegen::is_in_check(&self.board, self.turn)
    }

    /// Executes a move: the source square is cleared, the piece lands on
    /// `to` with its moved flag set, the turn flips, and the side now to
    /// move is tested for checkmate.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let mut piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare(from))?;
        if piece.color() != self.turn {
            return Err(GameError::OutOfTurn {
                from,
                mover: piece.color(),
                turn: self.turn,
            });
        }
        if !movegen::legal_moves(&self.board, from).contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        self.board.take(from);
        piece.mark_moved();
        self.board.place(to, piece);
        self.turn = self.turn.opposite();
        self.check_game_end();
        Ok(())
    }

    /// Resets to the standard starting position with White to move.
    pub fn restart(&mut self) {
        *self = Game::new();
    }

    /// Tests the side now to move for checkmate and records the result.
    fn check_game_end(&mut self) {
        if movegen::is_checkmate(&self.board, self.turn) {
            self.result = Some(GameResult::win_for(self.turn.opposite()));
        }
    }
}
