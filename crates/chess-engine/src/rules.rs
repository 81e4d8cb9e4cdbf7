//! Game status classification.

use crate::movegen::{has_valid_moves, is_in_check};
use chess_core::{Board, Color, Move};
use std::fmt;

/// Status of a game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Normal play.
    #[default]
    Playing,
    /// The side to move is in check but has a legal reply.
    Check,
    /// The side to move is in check with no legal reply.
    Checkmate,
    /// The side to move is not in check and has no legal move.
    Stalemate,
    /// Reserved: no rule in the engine declares a draw.
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves can be played.
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        write!(f, "{}", name)
    }
}

/// Classifies the position for `color`, the side to move.
pub fn classify(board: &Board, color: Color, history: &[Move]) -> GameStatus {
    let in_check = is_in_check(board, color);
    let can_move = has_valid_moves(board, color, history);

    match (in_check, can_move) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Playing,
    }
}
