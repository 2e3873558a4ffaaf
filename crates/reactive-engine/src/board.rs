//! Mailbox board representation.

use std::fmt;

use reactive_core::{Color, Piece, PieceKind, Square};

/// Piece kinds on each back row, from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The grid cell is the sole storage of a piece, so "at most one piece per
/// square" and "a piece is where its cell says it is" hold by construction.
/// `Board` has value semantics: cloning it snapshots the whole position,
/// which is what move simulation relies on.
///
/// Row 0 is Black's back row and row 7 is White's; see
/// [`Square`](reactive_core::Square) for the coordinate conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position, all pieces unmoved.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for sq in Square::all() {
            let color = match sq.row() {
                0 | 1 => Color::Black,
                6 | 7 => Color::White,
                _ => continue,
            };
            let kind = match sq.row() {
                1 | 6 => PieceKind::Pawn,
                _ => BACK_ROW[sq.col() as usize],
            };
            board.place(sq, Piece::new(kind, color));
        }
        board
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Puts `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Removes and returns the piece on `sq`, if any.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize].take()
    }

    /// Iterates over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over every occupied square holding a piece of `color`,
    /// in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Returns the square of the first king of `color` found in a
    /// row-major scan, or `None` if that color has no king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind() == PieceKind::King && piece.color() == color)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    /// Renders an ASCII diagram with rank and file legends, White at the
    /// bottom, uppercase letters for White's pieces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let cell = self.grid[row as usize][col as usize];
                let c = cell.map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
