//! Move representation.

use crate::{Piece, PieceKind, Position};
use std::fmt;

/// A move as recorded in game history.
///
/// `piece` and `captured` are value snapshots taken before the move was
/// applied, so a history entry never changes after it is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Source square.
    pub from: Position,
    /// Destination square.
    pub to: Position,
    /// The moving piece as it stood on `from`.
    pub piece: Piece,
    /// The piece removed by this move, if any. For en passant this is the
    /// passed pawn, which does not stand on `to`.
    pub captured: Option<Piece>,
    /// Pawn capture of a pawn that just advanced two squares.
    pub is_en_passant: bool,
    /// King move of two columns that also relocates a rook.
    pub is_castling: bool,
    /// Reserved: pawns are never promoted, so this is always `None`.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a plain move with no capture and no special flags.
    pub const fn quiet(from: Position, to: Position, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            is_en_passant: false,
            is_castling: false,
            promotion: None,
        }
    }

    /// Returns true if this move removes an enemy piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this is a pawn advancing two rows.
    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        matches!(self.piece.kind, PieceKind::Pawn) && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Returns the coordinate notation for this move (e.g. "e2e4").
    pub fn to_coordinate(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
