//! Move generation.
//!
//! Generation happens in two stages. [`possible_moves`] produces the
//! pseudo-legal destinations of one piece: squares it can reach by its
//! movement pattern, honouring blockers and captures, but ignoring whether
//! its own king is left attacked. [`would_be_valid_after_move`] is the only
//! legality filter applied on top of that.
//!
//! Move history is only consulted through its last entry, which decides
//! whether an en passant capture is available.

mod attacks;
pub mod perft;

use chess_core::{Board, Color, Move, Piece, PieceKind, Position};

pub use attacks::{is_in_check, is_square_attacked};

/// Rook ray directions as `(row, col)` deltas.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Bishop ray directions as `(row, col)` deltas.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen rays: rook directions first, then bishop directions.
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns the pseudo-legal destinations of the piece on `from`.
///
/// An empty square yields no destinations. The order is stable (it follows
/// the fixed direction tables), which the search relies on for tie-breaking.
pub fn possible_moves(board: &Board, from: Position, history: &[Move]) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, history.last()),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => sliding_moves(board, from, piece.color, &BISHOP_DIRECTIONS),
        PieceKind::Rook => sliding_moves(board, from, piece.color, &ROOK_DIRECTIONS),
        PieceKind::Queen => sliding_moves(board, from, piece.color, &QUEEN_DIRECTIONS),
        PieceKind::King => king_moves(board, from, piece),
    }
}

fn pawn_moves(
    board: &Board,
    from: Position,
    color: Color,
    last_move: Option<&Move>,
) -> Vec<Position> {
    let mut moves = Vec::new();
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            moves.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.is_empty(two_step) {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(direction, d_col) {
            if board
                .piece_at(target)
                .is_some_and(|victim| victim.color != color)
            {
                moves.push(target);
            }
        }
    }

    if let Some(last) = last_move {
        if allows_en_passant(last, from, color) {
            let d_col = last.to.col() as i8 - from.col() as i8;
            if let Some(target) = from.offset(direction, d_col) {
                moves.push(target);
            }
        }
    }

    moves
}

/// True when `last` was an enemy double pawn push that landed beside `from`.
fn allows_en_passant(last: &Move, from: Position, color: Color) -> bool {
    last.is_double_pawn_push()
        && last.piece.color != color
        && last.to.row() == from.row()
        && last.to.col().abs_diff(from.col()) == 1
}

fn sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Position> {
    let mut moves = Vec::new();

    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(blocker) => {
                    if blocker.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    moves
}

fn step_moves(board: &Board, from: Position, color: Color, offsets: &[(i8, i8)]) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&target| board.piece_at(target).map_or(true, |p| p.color != color))
        .collect()
}

fn king_moves(board: &Board, from: Position, king: Piece) -> Vec<Position> {
    let mut moves = step_moves(board, from, king.color, &KING_OFFSETS);

    // Only the king's current square is tested for attacks; the squares it
    // crosses and lands on are left to the legality filter.
    if king.has_moved || is_in_check(board, king.color) {
        return moves;
    }

    for (rook_col, d_col) in [(7u8, 2i8), (0u8, -2i8)] {
        if can_castle_with(board, from, king.color, rook_col) {
            if let Some(target) = from.offset(0, d_col) {
                moves.push(target);
            }
        }
    }

    moves
}

/// Checks the rook in the corner at `rook_col` and the squares between it
/// and the king.
fn can_castle_with(board: &Board, king_at: Position, color: Color, rook_col: u8) -> bool {
    let Some(rook_at) = Position::new(king_at.row(), rook_col) else {
        return false;
    };
    let rook_ready = board.piece_at(rook_at).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
    });
    if !rook_ready {
        return false;
    }

    let (low, high) = if rook_col > king_at.col() {
        (king_at.col() + 1, rook_col)
    } else {
        (rook_col + 1, king_at.col())
    };
    (low..high)
        .filter_map(|col| Position::new(king_at.row(), col))
        .all(|square| board.is_empty(square))
}

/// Returns true if `to` is a pseudo-legal destination of the piece on `from`.
pub fn is_valid_move(board: &Board, from: Position, to: Position, history: &[Move]) -> bool {
    possible_moves(board, from, history).contains(&to)
}

/// Reports whether the king of `color` is safe after moving `from` to `to`.
///
/// The move is simulated on a scratch copy as a plain relocation: the en
/// passant victim stays on the board and a castling rook stays in its corner.
pub fn would_be_valid_after_move(board: &Board, from: Position, to: Position, color: Color) -> bool {
    let mut scratch = *board;
    scratch.set(to, board.piece_at(from));
    scratch.set(from, None);
    !is_in_check(&scratch, color)
}

/// Returns the legal destinations of the piece on `from`.
///
/// This is what a user interface highlights after a piece is selected.
pub fn legal_destinations(board: &Board, from: Position, history: &[Move]) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    possible_moves(board, from, history)
        .into_iter()
        .filter(|&to| would_be_valid_after_move(board, from, to, piece.color))
        .collect()
}

/// Builds the history record for moving the piece on `from` to `to`.
///
/// Detects en passant (a pawn changing column onto an empty square) and
/// castling (a king moving two columns). Returns `None` if `from` is empty.
/// Legality is not checked.
pub fn describe_move(board: &Board, from: Position, to: Position) -> Option<Move> {
    let piece = board.piece_at(from)?;
    let mut captured = board.piece_at(to);

    let is_en_passant =
        piece.kind == PieceKind::Pawn && captured.is_none() && from.col() != to.col();
    if is_en_passant {
        captured = Position::new(from.row(), to.col()).and_then(|passed| board.piece_at(passed));
    }

    let is_castling = piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2;

    Some(Move {
        from,
        to,
        piece,
        captured,
        is_en_passant,
        is_castling,
        promotion: None,
    })
}

/// Applies a move to a copy of the board.
///
/// Handles the special moves: the passed pawn is removed for en passant,
/// and for castling the rook jumps from its corner to the square next to
/// the king's destination. Both the moving piece and a castled rook come
/// out stamped as moved.
#[must_use]
pub fn apply_move(board: &Board, m: &Move) -> Board {
    let mut next = *board;

    if m.is_en_passant {
        if let Some(passed) = Position::new(m.from.row(), m.to.col()) {
            next.set(passed, None);
        }
    }

    if m.is_castling {
        let (rook_from_col, rook_to_col) = if m.to.col() > m.from.col() {
            (7, m.to.col() - 1)
        } else {
            (0, m.to.col() + 1)
        };
        let rook_from = Position::new(m.from.row(), rook_from_col);
        let rook_to = Position::new(m.from.row(), rook_to_col);
        if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
            let rook = next.piece_at(rook_from);
            next.set(rook_from, None);
            next.set(rook_to, rook.map(Piece::moved));
        }
    }

    next.set(m.to, Some(m.piece.moved()));
    next.set(m.from, None);
    next
}

/// Generates every legal move for `color`.
///
/// Squares are visited in row-major order and each piece's destinations in
/// generation order, so the result order is deterministic.
pub fn all_valid_moves(board: &Board, color: Color, history: &[Move]) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, _) in board.pieces().filter(|(_, p)| p.color == color) {
        for to in possible_moves(board, from, history) {
            if would_be_valid_after_move(board, from, to, color) {
                moves.extend(describe_move(board, from, to));
            }
        }
    }

    moves
}

/// Returns true if `color` has at least one legal move.
pub fn has_valid_moves(board: &Board, color: Color, history: &[Move]) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(from, _)| {
            possible_moves(board, from, history)
                .into_iter()
                .any(|to| would_be_valid_after_move(board, from, to, color))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn squares(list: &[&str]) -> Vec<Position> {
        list.iter().map(|s| pos(s)).collect()
    }

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::Black)
    }

    fn kings() -> Board {
        Board::empty()
            .with_piece(pos("e1"), white(PieceKind::King))
            .with_piece(pos("e8"), black(PieceKind::King))
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let moves = all_valid_moves(&Board::initial(), Color::White, &[]);
        assert_eq!(moves.len(), 20);
        let moves = all_valid_moves(&Board::initial(), Color::Black, &[]);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(possible_moves(&Board::initial(), pos("e4"), &[]).is_empty());
        assert!(legal_destinations(&Board::initial(), pos("e4"), &[]).is_empty());
    }

    #[test]
    fn pawn_single_and_double_step() {
        let board = Board::initial();
        assert_eq!(possible_moves(&board, pos("e2"), &[]), squares(&["e3", "e4"]));
        assert_eq!(possible_moves(&board, pos("d7"), &[]), squares(&["d6", "d5"]));
    }

    #[test]
    fn pawn_double_step_needs_both_squares_empty() {
        let board = Board::initial().with_piece(pos("e3"), black(PieceKind::Knight));
        assert!(possible_moves(&board, pos("e2"), &[]).is_empty());

        let board = Board::initial().with_piece(pos("e4"), black(PieceKind::Knight));
        assert_eq!(possible_moves(&board, pos("e2"), &[]), squares(&["e3"]));
    }

    #[test]
    fn pawn_off_start_row_steps_once() {
        let board = kings().with_piece(pos("c3"), white(PieceKind::Pawn).moved());
        assert_eq!(possible_moves(&board, pos("c3"), &[]), squares(&["c4"]));
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let board = kings()
            .with_piece(pos("d4"), white(PieceKind::Pawn))
            .with_piece(pos("c5"), black(PieceKind::Rook))
            .with_piece(pos("e5"), white(PieceKind::Knight))
            .with_piece(pos("d5"), black(PieceKind::Pawn));
        assert_eq!(possible_moves(&board, pos("d4"), &[]), squares(&["c5"]));
    }

    #[test]
    fn en_passant_after_double_push() {
        let black_pawn = black(PieceKind::Pawn);
        let board = kings()
            .with_piece(pos("e5"), white(PieceKind::Pawn).moved())
            .with_piece(pos("d5"), black_pawn.moved());
        let history = [Move::quiet(pos("d7"), pos("d5"), black_pawn)];

        let moves = possible_moves(&board, pos("e5"), &history);
        assert_eq!(moves, squares(&["e6", "d6"]));

        let record = describe_move(&board, pos("e5"), pos("d6")).unwrap();
        assert!(record.is_en_passant);
        assert_eq!(record.captured, Some(black_pawn.moved()));
    }

    #[test]
    fn en_passant_requires_the_immediately_preceding_move() {
        let black_pawn = black(PieceKind::Pawn);
        let board = kings()
            .with_piece(pos("e5"), white(PieceKind::Pawn).moved())
            .with_piece(pos("d5"), black_pawn.moved());
        let history = [
            Move::quiet(pos("d7"), pos("d5"), black_pawn),
            Move::quiet(pos("e1"), pos("f1"), white(PieceKind::King)),
        ];
        assert_eq!(possible_moves(&board, pos("e5"), &history), squares(&["e6"]));

        let single_step = [Move::quiet(pos("d6"), pos("d5"), black_pawn.moved())];
        assert_eq!(
            possible_moves(&board, pos("e5"), &single_step),
            squares(&["e6"])
        );
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let board = kings()
            .with_piece(pos("d4"), white(PieceKind::Rook))
            .with_piece(pos("d6"), black(PieceKind::Pawn))
            .with_piece(pos("f4"), white(PieceKind::Pawn));
        let moves = possible_moves(&board, pos("d4"), &[]);
        assert_eq!(
            moves,
            squares(&["e4", "c4", "b4", "a4", "d3", "d2", "d1", "d5", "d6"])
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let board = Board::empty().with_piece(pos("d4"), white(PieceKind::Queen));
        assert_eq!(possible_moves(&board, pos("d4"), &[]).len(), 27);
        let board = Board::empty().with_piece(pos("d4"), white(PieceKind::Bishop));
        assert_eq!(possible_moves(&board, pos("d4"), &[]).len(), 13);
    }

    #[test]
    fn knight_jumps_stay_on_board_and_skip_own_pieces() {
        let board = Board::initial();
        assert_eq!(possible_moves(&board, pos("b1"), &[]), squares(&["a3", "c3"]));
        let corner = Board::empty().with_piece(pos("h8"), black(PieceKind::Knight));
        assert_eq!(possible_moves(&corner, pos("h8"), &[]), squares(&["f7", "g6"]));
    }

    #[test]
    fn castling_offered_both_ways() {
        let board = Board::empty()
            .with_piece(pos("e1"), white(PieceKind::King))
            .with_piece(pos("a1"), white(PieceKind::Rook))
            .with_piece(pos("h1"), white(PieceKind::Rook))
            .with_piece(pos("e8"), black(PieceKind::King));
        let moves = possible_moves(&board, pos("e1"), &[]);
        assert!(moves.contains(&pos("g1")));
        assert!(moves.contains(&pos("c1")));
    }

    #[test]
    fn castling_blocked_by_moved_pieces_occupancy_or_check() {
        let base = Board::empty()
            .with_piece(pos("e1"), white(PieceKind::King))
            .with_piece(pos("h1"), white(PieceKind::Rook))
            .with_piece(pos("a8"), black(PieceKind::King));
        assert!(possible_moves(&base, pos("e1"), &[]).contains(&pos("g1")));

        let king_moved = base.with_piece(pos("e1"), white(PieceKind::King).moved());
        assert!(!possible_moves(&king_moved, pos("e1"), &[]).contains(&pos("g1")));

        let rook_moved = base.with_piece(pos("h1"), white(PieceKind::Rook).moved());
        assert!(!possible_moves(&rook_moved, pos("e1"), &[]).contains(&pos("g1")));

        let blocked = base.with_piece(pos("f1"), white(PieceKind::Bishop));
        assert!(!possible_moves(&blocked, pos("e1"), &[]).contains(&pos("g1")));

        let checked = base.with_piece(pos("e5"), black(PieceKind::Rook));
        assert!(!possible_moves(&checked, pos("e1"), &[]).contains(&pos("g1")));
    }

    #[test]
    fn castling_through_an_attacked_square_is_offered() {
        // f1 is attacked but the king does not stand on it; only the
        // current square is checked.
        let board = Board::empty()
            .with_piece(pos("e1"), white(PieceKind::King))
            .with_piece(pos("h1"), white(PieceKind::Rook))
            .with_piece(pos("f8"), black(PieceKind::Rook))
            .with_piece(pos("a8"), black(PieceKind::King));
        assert!(legal_destinations(&board, pos("e1"), &[]).contains(&pos("g1")));
    }

    #[test]
    fn legality_filter_rejects_exposing_the_king() {
        // The e2 knight is pinned by the rook on e8.
        let board = Board::empty()
            .with_piece(pos("e1"), white(PieceKind::King))
            .with_piece(pos("e2"), white(PieceKind::Knight))
            .with_piece(pos("e8"), black(PieceKind::Rook))
            .with_piece(pos("a8"), black(PieceKind::King));
        assert!(!possible_moves(&board, pos("e2"), &[]).is_empty());
        assert!(legal_destinations(&board, pos("e2"), &[]).is_empty());
        assert!(!would_be_valid_after_move(&board, pos("e2"), pos("c3"), Color::White));
    }

    #[test]
    fn is_valid_move_checks_pseudo_legal_destinations() {
        let board = Board::initial();
        assert!(is_valid_move(&board, pos("g1"), pos("f3"), &[]));
        assert!(!is_valid_move(&board, pos("g1"), pos("g3"), &[]));
        assert!(!is_valid_move(&board, pos("e4"), pos("e5"), &[]));
    }

    #[test]
    fn describe_move_snapshots_pieces() {
        let board = kings().with_piece(pos("d4"), black(PieceKind::Queen));
        let mut rook_board = board.with_piece(pos("d1"), white(PieceKind::Rook));
        let record = describe_move(&rook_board, pos("d1"), pos("d4")).unwrap();
        assert_eq!(record.piece, white(PieceKind::Rook));
        assert_eq!(record.captured, Some(black(PieceKind::Queen)));

        rook_board.set(pos("d4"), None);
        assert_eq!(record.captured, Some(black(PieceKind::Queen)));
        assert!(describe_move(&rook_board, pos("c4"), pos("c5")).is_none());
    }

    #[test]
    fn apply_move_castles_kingside() {
        let board = Board::empty()
            .with_piece(pos("e1"), white(PieceKind::King))
            .with_piece(pos("h1"), white(PieceKind::Rook))
            .with_piece(pos("e8"), black(PieceKind::King));
        let record = describe_move(&board, pos("e1"), pos("g1")).unwrap();
        assert!(record.is_castling);

        let after = apply_move(&board, &record);
        assert_eq!(after.piece_at(pos("g1")), Some(white(PieceKind::King).moved()));
        assert_eq!(after.piece_at(pos("f1")), Some(white(PieceKind::Rook).moved()));
        assert!(after.is_empty(pos("e1")));
        assert!(after.is_empty(pos("h1")));
    }

    #[test]
    fn apply_move_castles_queenside() {
        let board = Board::empty()
            .with_piece(pos("e8"), black(PieceKind::King))
            .with_piece(pos("a8"), black(PieceKind::Rook))
            .with_piece(pos("e1"), white(PieceKind::King));
        let record = describe_move(&board, pos("e8"), pos("c8")).unwrap();
        let after = apply_move(&board, &record);
        assert_eq!(after.piece_at(pos("c8")), Some(black(PieceKind::King).moved()));
        assert_eq!(after.piece_at(pos("d8")), Some(black(PieceKind::Rook).moved()));
        assert!(after.is_empty(pos("a8")));
    }

    #[test]
    fn apply_move_removes_passed_pawn() {
        let black_pawn = black(PieceKind::Pawn).moved();
        let board = kings()
            .with_piece(pos("e5"), white(PieceKind::Pawn).moved())
            .with_piece(pos("d5"), black_pawn);
        let record = describe_move(&board, pos("e5"), pos("d6")).unwrap();
        let after = apply_move(&board, &record);
        assert!(after.is_empty(pos("d5")));
        assert!(after.is_empty(pos("e5")));
        assert_eq!(after.piece_at(pos("d6")), Some(white(PieceKind::Pawn).moved()));
    }

    #[test]
    fn has_valid_moves_matches_enumeration() {
        let board = Board::initial();
        assert!(has_valid_moves(&board, Color::White, &[]));

        // Black king in the corner, stalemated by the queen.
        let stalemate = Board::empty()
            .with_piece(pos("h8"), black(PieceKind::King))
            .with_piece(pos("f7"), white(PieceKind::Queen))
            .with_piece(pos("g6"), white(PieceKind::King));
        assert!(!has_valid_moves(&stalemate, Color::Black, &[]));
        assert!(all_valid_moves(&stalemate, Color::Black, &[]).is_empty());
    }

    #[test]
    fn relocation_filter_misses_en_passant_discovered_check() {
        // The pawn that passes is the last piece between the rook and the
        // king. The filter only relocates the capturing pawn, so the capture
        // is accepted even though it exposes the king on the rank.
        let board = Board::empty()
            .with_piece(pos("a5"), white(PieceKind::King).moved())
            .with_piece(pos("b5"), white(PieceKind::Pawn).moved())
            .with_piece(pos("c5"), black(PieceKind::Pawn).moved())
            .with_piece(pos("h5"), black(PieceKind::Rook))
            .with_piece(pos("e8"), black(PieceKind::King));
        let history = [Move::quiet(pos("c7"), pos("c5"), black(PieceKind::Pawn))];

        let capture = all_valid_moves(&board, Color::White, &history)
            .into_iter()
            .find(|m| m.is_en_passant)
            .unwrap();
        assert_eq!(capture.to_coordinate(), "b5c6");

        let after = apply_move(&board, &capture);
        assert!(after.is_empty(pos("c5")));
        assert!(is_in_check(&after, Color::White));
    }
}
