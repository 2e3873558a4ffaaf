//! The rule flavor the engine ships with.

use reactive_core::{Color, Square};

use super::RuleSet;
use crate::{movegen, Board};

/// Casual chess: full geometric piece movement with a handful of
/// deliberately loose special rules.
///
/// - Castling asks only that the king and the corner rook are unmoved and
///   the squares between them empty; attacked squares are never
///   consulted, the corner piece's color is not checked, and executing
///   the candidate relocates the king alone.
/// - A pawn on row 3 or 4 beside an enemy pawn is offered the forward
///   diagonal as an en-passant style candidate, with no double-step
///   bookkeeping behind it.
/// - The pawn double-step is gated on the piece's never-moved flag, not
///   on its starting row.
/// - No promotion and no draw rules; checkmate is the only terminal
///   state.
#[derive(Debug, Clone, Copy, Default)]
pub struct CasualChess;

impl RuleSet for CasualChess {
    fn initial_board(&self) -> Board {
        Board::standard()
    }

    fn possible_moves(&self, board: &Board, from: Square) -> Vec<Square> {
        movegen::possible_moves(board, from)
    }

    fn legal_moves(&self, board: &Board, from: Square) -> Vec<Square> {
        movegen::legal_moves(board, from)
    }

    fn is_in_check(&self, board: &Board, color: Color) -> bool {
        movegen::is_in_check(board, color)
    }

    fn is_checkmate(&self, board: &Board, color: Color) -> bool {
        movegen::is_checkmate(board, color)
    }
}
