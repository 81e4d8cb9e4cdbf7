//! The 8x8 board grid.

use crate::{Color, Piece, PieceKind, Position};
use std::fmt;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid where each cell holds at most one piece.
///
/// `Board` is `Copy`: every operation that changes a position works on its
/// own copy, so a board handed out to a caller is never modified behind its
/// back.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Returns a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Returns the standard starting position.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(*kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    /// Returns the piece on the given square.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Returns true if no piece stands on the given square.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Puts a piece on (or clears) the given square.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.cells[pos.row() as usize][pos.col() as usize] = piece;
    }

    /// Builder form of [`set`](Board::set) for setting up positions.
    #[must_use]
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, Some(piece));
        self
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Finds the king of the given color.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(pos, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = self.cells[row][col].map_or('.', Piece::to_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self)?;
        write!(f, ")")
    }
}
