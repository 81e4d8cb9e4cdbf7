//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from the searching side's point of view: that side
//! maximizes, the opponent minimizes. Every node works on its own copy of
//! the board.

use std::slice;

use chess_core::{Board, Color, Move};
use chess_engine::{all_valid_moves, apply_move, is_in_check};

use crate::eval::evaluate_board;

/// Score of a checkmate, from the winner's side.
pub const MATE_SCORE: f64 = 10_000.0;

/// Search state
#[derive(Debug)]
pub struct Searcher {
    color: Color,
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher that plays for `color`.
    pub fn new(color: Color) -> Self {
        Searcher { color, nodes: 0 }
    }

    /// Number of nodes visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the root move with the best minimax score at `depth` plies.
    ///
    /// Ties keep the first move in generation order. Returns `None` when
    /// the searching side has no legal move.
    pub fn search(&mut self, board: &Board, history: &[Move], depth: u32) -> Option<(Move, f64)> {
        let mut best: Option<(Move, f64)> = None;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for mv in all_valid_moves(board, self.color, history) {
            let child = apply_move(board, &mv);
            let score = self.minimax(
                &child,
                slice::from_ref(&mv),
                depth.saturating_sub(1),
                alpha,
                beta,
                false,
            );

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }

        best
    }

    /// Minimax over `board`; the side to move is ours when `maximizing`.
    pub fn minimax(
        &mut self,
        board: &Board,
        history: &[Move],
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 {
            return evaluate_board(board, self.color);
        }

        let to_move = if maximizing {
            self.color
        } else {
            self.color.opposite()
        };
        let moves = all_valid_moves(board, to_move, history);

        if moves.is_empty() {
            return match (is_in_check(board, to_move), maximizing) {
                (true, true) => -MATE_SCORE,
                (true, false) => MATE_SCORE,
                (false, _) => 0.0,
            };
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in &moves {
                let child = apply_move(board, mv);
                let score = self.minimax(&child, slice::from_ref(mv), depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in &moves {
                let child = apply_move(board, mv);
                let score = self.minimax(&child, slice::from_ref(mv), depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
