//! Move generation, check detection, and legality filtering.
//!
//! Generation is layered. [`possible_moves`] enumerates a piece's
//! geometric movement pattern and nothing else; [`legal_moves`] replays
//! each candidate on a scratch board via [`simulate_move`] and keeps it
//! only if [`is_in_check`] says the mover's own king is safe afterwards.
//! Check detection scans the unfiltered layer, so the two layers never
//! recurse into each other.

use reactive_core::{Color, Piece, PieceKind, Square};

use crate::Board;

/// Orthogonal ray directions as (row delta, column delta).
const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal ray directions.
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// The eight king steps.
const KING_STEPS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Enumerates the geometric movement pattern of the piece on `from`,
/// ignoring whether a move would leave the mover's king in check.
///
/// An empty source square yields an empty list. Candidates appear in a
/// fixed per-kind generation order; callers must not rely on any other
/// ordering property.
pub fn possible_moves(board: &Board, from: Square) -> Vec<Square> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, from, piece, &mut moves),
        PieceKind::Rook => ray_moves(board, from, piece.color(), &ORTHOGONAL, &mut moves),
        PieceKind::Knight => step_moves(board, from, piece.color(), &KNIGHT_JUMPS, &mut moves),
        PieceKind::Bishop => ray_moves(board, from, piece.color(), &DIAGONAL, &mut moves),
        PieceKind::Queen => {
            ray_moves(board, from, piece.color(), &ORTHOGONAL, &mut moves);
            ray_moves(board, from, piece.color(), &DIAGONAL, &mut moves);
        }
        PieceKind::King => king_moves(board, from, piece, &mut moves),
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Square>) {
    let dir = piece.color().pawn_direction();

    // One step forward onto an empty square.
    if let Some(dest) = from.offset(dir, 0) {
        if board.piece_at(dest).is_none() {
            moves.push(dest);
        }
    }

    // Double step, gated on the never-moved flag rather than the row: a
    // pawn placed by hand with the flag clear may double-step from
    // anywhere, and a pawn that has moved never can.
    if !piece.has_moved() {
        if let (Some(mid), Some(dest)) = (from.offset(dir, 0), from.offset(2 * dir, 0)) {
            if board.piece_at(mid).is_none() && board.piece_at(dest).is_none() {
                moves.push(dest);
            }
        }
    }

    // Diagonal captures.
    for dc in [-1, 1] {
        if let Some(dest) = from.offset(dir, dc) {
            if let Some(target) = board.piece_at(dest) {
                if target.color() != piece.color() {
                    moves.push(dest);
                }
            }
        }
    }

    // En passant, loosely: a pawn on row 3 or 4 with an enemy pawn right
    // beside it is offered the forward diagonal over that pawn. Whether
    // the neighbour actually just double-stepped is not tracked, and the
    // diagonal square is offered occupied or not, so this can duplicate a
    // capture candidate.
    if from.row() == 3 || from.row() == 4 {
        for dc in [-1, 1] {
            let beside = match from.offset(0, dc) {
                Some(sq) => sq,
                None => continue,
            };
            if let Some(neighbor) = board.piece_at(beside) {
                if neighbor.kind() == PieceKind::Pawn && neighbor.color() != piece.color() {
                    if let Some(dest) = from.offset(dir, dc) {
                        moves.push(dest);
                    }
                }
            }
        }
    }
}

/// Walks each ray until the board edge or the first occupied square,
/// which is included only when it holds an enemy piece.
fn ray_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(target) => {
                    if target.color() != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Fixed-offset destinations, kept when empty or enemy-occupied.
fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(dr, dc) in offsets {
        if let Some(dest) = from.offset(dr, dc) {
            match board.piece_at(dest) {
                None => moves.push(dest),
                Some(target) => {
                    if target.color() != color {
                        moves.push(dest);
                    }
                }
            }
        }
    }
}

fn king_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Square>) {
    step_moves(board, from, piece.color(), &KING_STEPS, moves);

    // Castling candidates check only that the king and the corner rook
    // are unmoved and the squares between the corner and the king's
    // column are empty. The corner piece's color is not inspected, and
    // neither is any attacked-square condition: the king may castle out
    // of or through check (the legality filter still rejects landing in
    // check). Executing the candidate moves the king alone.
    if !piece.has_moved() {
        let row = from.row();
        if let Some(dest) = castle_candidate(board, row, 7, &[5, 6], 6) {
            moves.push(dest);
        }
        if let Some(dest) = castle_candidate(board, row, 0, &[1, 2, 3], 2) {
            moves.push(dest);
        }
    }
}

/// Returns the king's castling destination on `row` if the corner rook is
/// present and unmoved and every column in `between` is empty.
fn castle_candidate(
    board: &Board,
    row: u8,
    rook_col: u8,
    between: &[u8],
    dest_col: u8,
) -> Option<Square> {
    let rook = board.piece_at(Square::new(row, rook_col)?)?;
    if rook.kind() != PieceKind::Rook || rook.has_moved() {
        return None;
    }
    for &col in between {
        if board.piece_at(Square::new(row, col)?).is_some() {
            return None;
        }
    }
    Square::new(row, dest_col)
}

/// Returns a new board with the piece on `from` relocated to `to`.
///
/// The source square is cleared and the destination overwritten; whatever
/// stood on the destination is discarded. The input board is untouched,
/// no move flags change, and the copy shares nothing mutable with the
/// original, so the result answers what-if questions safely.
pub fn simulate_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = board.clone();
    if let Some(piece) = next.take(from) {
        next.place(to, piece);
    }
    next
}

/// Returns true if `color`'s king is attacked by any enemy piece.
///
/// The scan uses [`possible_moves`] directly, so check detection never
/// feeds back into legality filtering. A board with no king of the given
/// color reports not-in-check rather than failing.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king_sq = match board.king_square(color) {
        Some(sq) => sq,
        None => return false,
    };
    board
        .pieces_of(color.opposite())
        .any(|(sq, _)| possible_moves(board, sq).contains(&king_sq))
}

/// Returns the candidates from [`possible_moves`] whose execution would
/// not leave the mover's own king in check, in generation order.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let color = match board.piece_at(from) {
        Some(piece) => piece.color(),
        None => return Vec::new(),
    };
    possible_moves(board, from)
        .into_iter()
        .filter(|&to| !is_in_check(&simulate_move(board, from, to), color))
        .collect()
}

/// Returns true if `color` is in check and no piece of that color has any
/// legal move.
///
/// A side with no legal moves that is *not* in check is not a terminal
/// condition here; it simply keeps producing empty move lists.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    board
        .pieces_of(color)
        .all(|(sq, _)| legal_moves(board, sq).is_empty())
}
