//! Static evaluation: material values, piece-square tables and the one-ply
//! move heuristic.

use chess_core::{Board, Color, Move, PieceKind, Position};

/// Material value by piece kind. The king's value only keeps the tables
/// total; legal play never captures a king.
const PIECE_VALUES: [i32; 6] = [1, 3, 3, 5, 9, 1000];

/// Extra score for landing on one of the four center squares.
const CENTER_BONUS: i32 = 20;

/// Piece-square tables authored from White's side: row 0 is the far rank.
type Table = [[i32; 8]; 8];

const PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_TABLE: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

const TABLES: [&Table; 6] = [
    &PAWN_TABLE,
    &KNIGHT_TABLE,
    &BISHOP_TABLE,
    &ROOK_TABLE,
    &QUEEN_TABLE,
    &KING_TABLE,
];

/// Material value of a piece kind (pawn = 1).
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.index()]
}

/// Positional bonus for a piece of `color` standing on `pos`.
///
/// Black reads the tables mirrored vertically.
#[inline]
pub fn positional_bonus(kind: PieceKind, color: Color, pos: Position) -> i32 {
    let row = match color {
        Color::White => pos.row(),
        Color::Black => 7 - pos.row(),
    };
    TABLES[kind.index()][row as usize][pos.col() as usize]
}

fn is_center(pos: Position) -> bool {
    matches!((pos.row(), pos.col()), (3 | 4, 3 | 4))
}

/// Scores a single move without looking ahead.
///
/// Ten times the captured piece's value, plus the moved piece's table bonus
/// on the destination, plus [`CENTER_BONUS`] for the four center squares.
pub fn evaluate_move(m: &Move) -> i32 {
    let capture = m.captured.map_or(0, |victim| piece_value(victim.kind) * 10);
    let position = positional_bonus(m.piece.kind, m.piece.color, m.to);
    let center = if is_center(m.to) { CENTER_BONUS } else { 0 };
    capture + position + center
}

/// Material plus scaled positional score of `board`, from `perspective`'s
/// side: positive when `perspective` is ahead.
pub fn evaluate_board(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .map(|(pos, piece)| {
            let value = f64::from(piece_value(piece.kind))
                + f64::from(positional_bonus(piece.kind, piece.color, pos)) / 100.0;
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn tables_are_mirrored_for_black() {
        // White pawn on the 7th rank, black pawn on the 2nd: both one step
        // from promotion.
        assert_eq!(positional_bonus(PieceKind::Pawn, Color::White, pos("a7")), 50);
        assert_eq!(positional_bonus(PieceKind::Pawn, Color::Black, pos("a2")), 50);
        assert_eq!(positional_bonus(PieceKind::King, Color::White, pos("g1")), 30);
        assert_eq!(positional_bonus(PieceKind::King, Color::Black, pos("g8")), 30);
    }

    #[test]
    fn central_pawn_push_scores_table_plus_center() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        let m = Move::quiet(pos("e2"), pos("e4"), pawn);
        assert_eq!(evaluate_move(&m), 20 + CENTER_BONUS);

        let m = Move::quiet(pos("e2"), pos("e3"), pawn);
        assert_eq!(evaluate_move(&m), 0);
    }

    #[test]
    fn captures_weigh_ten_times_the_victim() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let mut m = Move::quiet(pos("a1"), pos("a5"), rook);
        m.captured = Some(Piece::new(PieceKind::Queen, Color::Black));
        assert_eq!(evaluate_move(&m), 90 - 5);
    }

    #[test]
    fn initial_position_is_balanced() {
        let board = Board::initial();
        assert!(evaluate_board(&board, Color::White).abs() < 1e-9);
        assert!(evaluate_board(&board, Color::Black).abs() < 1e-9);
    }

    #[test]
    fn missing_queen_costs_about_nine() {
        let mut board = Board::initial();
        board.set(pos("d8"), None);
        let score = evaluate_board(&board, Color::White);
        assert!(score > 8.5 && score < 9.5, "score was {score}");
        assert!((evaluate_board(&board, Color::Black) + score).abs() < 1e-9);
    }

    #[test]
    fn center_squares() {
        for s in ["d4", "e4", "d5", "e5"] {
            assert!(is_center(pos(s)), "{s}");
        }
        assert!(!is_center(pos("c4")));
        assert!(!is_center(pos("e3")));
    }
}
