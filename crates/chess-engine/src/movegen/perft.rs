//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use super::{all_valid_moves, apply_move};
use chess_core::{Board, Color, Move};

/// Counts the number of leaf nodes at the given depth.
///
/// Each child only sees the move that produced it as history, which is all
/// en passant detection needs.
pub fn perft(board: &Board, color: Color, history: &[Move], depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_valid_moves(board, color, history);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|m| {
            let child = apply_move(board, m);
            perft(&child, color.opposite(), std::slice::from_ref(m), depth - 1)
        })
        .sum()
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, color: Color, depth: u32) -> Vec<(String, u64)> {
    let moves = all_valid_moves(board, color, &[]);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let child = apply_move(board, m);
        let nodes = if depth > 1 {
            perft(&child, color.opposite(), std::slice::from_ref(m), depth - 1)
        } else {
            1
        };
        results.push((m.to_coordinate(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
