//! Chess piece representation.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this piece kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the board letter for this kind with the given color
    /// (uppercase for White).
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Returns true if this is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(
            self,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on the board.
///
/// Pieces are plain values: copying one out of the board or into a
/// [`Move`](crate::Move) takes a snapshot that later board changes cannot
/// touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Set once this piece has moved. Castling needs it for the king and rook.
    pub has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Returns a copy of this piece stamped as moved.
    #[inline]
    pub const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Returns the board letter for this piece.
    #[inline]
    pub const fn to_char(self) -> char {
        self.kind.to_char(self.color)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
