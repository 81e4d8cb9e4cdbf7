//! Attack detection.
//!
//! These predicates never call move generation. Castling availability needs
//! to know whether the king is in check, so check detection must not depend
//! on generating king moves.

use super::{KING_OFFSETS, KNIGHT_OFFSETS};
use chess_core::{Board, Color, Piece, PieceKind, Position};

/// Returns true if any piece of `by` attacks `target`.
///
/// Pawns attack diagonally forward regardless of what stands on the target
/// square; sliders need an unobstructed line.
pub fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == by)
        .any(|(from, piece)| attacks(board, piece, from, target))
}

/// Returns true if the king of `color` is attacked.
///
/// A board without a king of that color is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opposite()))
}

fn attacks(board: &Board, piece: Piece, from: Position, target: Position) -> bool {
    match piece.kind {
        PieceKind::Pawn => {
            let forward = from.row() as i8 + piece.color.pawn_direction();
            forward == target.row() as i8 && from.col().abs_diff(target.col()) == 1
        }
        PieceKind::Knight => jumps_to(from, target, &KNIGHT_OFFSETS),
        PieceKind::Bishop => on_diagonal(from, target) && clear_path(board, from, target),
        PieceKind::Rook => on_line(from, target) && clear_path(board, from, target),
        PieceKind::Queen => {
            (on_line(from, target) || on_diagonal(from, target)) && clear_path(board, from, target)
        }
        PieceKind::King => jumps_to(from, target, &KING_OFFSETS),
    }
}

fn jumps_to(from: Position, target: Position, offsets: &[(i8, i8)]) -> bool {
    offsets
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col) == Some(target))
}

fn on_line(from: Position, target: Position) -> bool {
    from != target && (from.row() == target.row() || from.col() == target.col())
}

fn on_diagonal(from: Position, target: Position) -> bool {
    from != target && from.row().abs_diff(target.row()) == from.col().abs_diff(target.col())
}

/// Walks from `from` towards `to` (exclusive on both ends) and reports
/// whether every square in between is empty. The two squares must share a
/// line or diagonal.
fn clear_path(board: &Board, from: Position, to: Position) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).signum();
    let d_col = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from.offset(d_row, d_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(d_row, d_col);
    }
    false
}
