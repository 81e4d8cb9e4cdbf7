//! Move selection for a computer opponent.
//!
//! [`best_move`] picks a legal move at one of five [`AiLevel`]s:
//!
//! 1. a uniformly random move
//! 2. the capture of the most valuable piece, else random
//! 3. the best move under a one-ply static heuristic
//! 4. two-ply alpha-beta minimax
//! 5. three-ply alpha-beta minimax
//!
//! All candidate positions are private copies produced by
//! [`chess_engine::apply_move`]; the caller's board is never touched.
//! Randomness comes from the caller, so seeded generators make games
//! reproducible.

pub mod eval;
mod level;
pub mod search;

use chess_core::{Board, Color, Move};
use chess_engine::all_valid_moves;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

pub use eval::{evaluate_board, evaluate_move, piece_value};
pub use level::{AiLevel, InvalidLevel};
pub use search::Searcher;

/// Chooses a move for `color` at the given strength.
///
/// Returns `None` only when `color` has no legal move.
pub fn best_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    history: &[Move],
    level: AiLevel,
    rng: &mut R,
) -> Option<Move> {
    let moves = all_valid_moves(board, color, history);
    if moves.is_empty() {
        return None;
    }

    let chosen = match level {
        AiLevel::Random => moves.choose(rng).copied(),
        AiLevel::Greedy => greedy_capture(&moves).or_else(|| moves.choose(rng).copied()),
        AiLevel::Heuristic => highest_scoring(&moves),
        AiLevel::Minimax2 | AiLevel::Minimax3 => {
            let depth = level.depth().unwrap_or(2);
            let mut searcher = Searcher::new(color);
            let result = searcher.search(board, history, depth);
            if let Some((mv, score)) = result {
                debug!(
                    %level,
                    %color,
                    chosen = %mv,
                    score,
                    nodes = searcher.nodes(),
                    "search finished"
                );
            }
            return result.map(|(mv, _)| mv);
        }
    };

    if let Some(mv) = chosen {
        debug!(%level, %color, chosen = %mv, candidates = moves.len(), "move selected");
    }
    chosen
}

/// The capture taking the most valuable piece; the first one on ties.
fn greedy_capture(moves: &[Move]) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let Some(victim) = mv.captured else { continue };
        let value = piece_value(victim.kind);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((*mv, value));
        }
    }
    best.map(|(mv, _)| mv)
}

/// The move with the highest [`evaluate_move`] score; the first one on ties.
fn highest_scoring(moves: &[Move]) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let score = evaluate_move(mv);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}
