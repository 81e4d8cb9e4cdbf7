//! Game state with branching move history.
//!
//! A [`GameState`] is an immutable snapshot: every move and every history
//! navigation returns a new state. The displayed board is always derived by
//! replaying the move list from the starting board, so history and board
//! can never disagree.

use crate::movegen::{all_valid_moves, apply_move, describe_move, legal_destinations};
use crate::rules::{classify, GameStatus};
use chess_core::{Board, Color, Move, Position};
use thiserror::Error;

/// Error type for checked move entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    NoPiece(Position),
    /// The piece on the source square belongs to the side not to move.
    #[error("it is {to_move}'s turn, the piece on {square} is {owner}'s")]
    NotYourTurn {
        square: Position,
        owner: Color,
        to_move: Color,
    },
    /// The destination is not a legal move for the piece.
    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Position, to: Position },
    /// The displayed position is already decided.
    #[error("game is over: {0}")]
    GameOver(GameStatus),
}

/// A chess game: board, side to move, move list and the index of the
/// displayed position within that list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Board the move list is replayed from.
    start: Board,
    /// Side to move on the starting board.
    start_player: Color,
    /// Board at `move_index`.
    board: Board,
    /// Side to move at `move_index`.
    current_player: Color,
    /// Every recorded move, including those after `move_index`.
    moves: Vec<Move>,
    /// Status of the displayed position.
    status: GameStatus,
    /// Index of the last applied move; `None` shows the starting board.
    move_index: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_position(Board::initial(), Color::White)
    }

    /// Creates a game from a custom starting board.
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        GameState {
            start: board,
            start_player: side_to_move,
            board,
            current_player: side_to_move,
            moves: Vec::new(),
            status: classify(&board, side_to_move, &[]),
            move_index: None,
        }
    }

    /// Returns the displayed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board the game started from.
    pub fn start_board(&self) -> &Board {
        &self.start
    }

    /// Returns the side to move in the displayed position.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns every recorded move, including moves past the displayed one.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the status of the displayed position.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the index of the displayed position's last move.
    pub fn move_index(&self) -> Option<usize> {
        self.move_index
    }

    /// Returns the moves leading to the displayed position.
    pub fn history(&self) -> &[Move] {
        &self.moves[..self.move_index.map_or(0, |i| i + 1)]
    }

    /// Returns true if the displayed position is not the latest one.
    pub fn is_viewing_history(&self) -> bool {
        self.move_index != self.moves.len().checked_sub(1)
    }

    /// Returns the legal destinations of the piece on `from`.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        legal_destinations(&self.board, from, self.history())
    }

    /// Returns every legal move for the side to move.
    pub fn valid_moves(&self) -> Vec<Move> {
        all_valid_moves(&self.board, self.current_player, self.history())
    }

    /// Plays `from` to `to` on the displayed board and returns the new state.
    ///
    /// No legality check is made: callers validate first (see
    /// [`try_move`](GameState::try_move)). An empty source square returns the
    /// state unchanged. Moves after the displayed position are discarded
    /// before the new move is appended.
    #[must_use]
    pub fn make_move(&self, from: Position, to: Position) -> GameState {
        let Some(record) = describe_move(&self.board, from, to) else {
            return self.clone();
        };

        let board = apply_move(&self.board, &record);
        let mut moves = self.history().to_vec();
        moves.push(record);
        let move_index = Some(moves.len() - 1);
        let current_player = self.current_player.opposite();
        let status = classify(&board, current_player, &moves);

        GameState {
            start: self.start,
            start_player: self.start_player,
            board,
            current_player,
            moves,
            status,
            move_index,
        }
    }

    /// Validates and plays a move.
    ///
    /// # Errors
    ///
    /// Returns an error if the displayed position is decided, the source
    /// square is empty or holds a piece of the side not to move, or the
    /// destination is not legal.
    pub fn try_move(&self, from: Position, to: Position) -> Result<GameState, GameError> {
        if self.status.is_game_over() {
            return Err(GameError::GameOver(self.status));
        }

        let piece = self.board.piece_at(from).ok_or(GameError::NoPiece(from))?;
        if piece.color != self.current_player {
            return Err(GameError::NotYourTurn {
                square: from,
                owner: piece.color,
                to_move: self.current_player,
            });
        }

        if !self.legal_destinations(from).contains(&to) {
            return Err(GameError::IllegalMove { from, to });
        }

        Ok(self.make_move(from, to))
    }

    /// Rebuilds the board and side to move after the moves up to `index`.
    ///
    /// Returns `None` if `index` is past the end of the move list.
    pub fn board_at(&self, index: Option<usize>) -> Option<(Board, Color)> {
        let count = match index {
            None => 0,
            Some(i) if i < self.moves.len() => i + 1,
            Some(_) => return None,
        };

        let mut board = self.start;
        let mut player = self.start_player;
        for m in &self.moves[..count] {
            board = apply_move(&board, m);
            player = player.opposite();
        }
        Some((board, player))
    }

    /// Shows the position after the move at `index` (`None` for the start).
    ///
    /// The move list is kept intact. Out-of-range targets return the state
    /// unchanged. Earlier positions report [`GameStatus::Playing`]; the
    /// latest position is classified again.
    #[must_use]
    pub fn navigate_to(&self, index: Option<usize>) -> GameState {
        let Some((board, current_player)) = self.board_at(index) else {
            return self.clone();
        };

        let status = if index == self.moves.len().checked_sub(1) {
            let history = &self.moves[..index.map_or(0, |i| i + 1)];
            classify(&board, current_player, history)
        } else {
            GameStatus::Playing
        };

        GameState {
            board,
            current_player,
            status,
            move_index: index,
            ..self.clone()
        }
    }

    /// Steps one move back in history.
    #[must_use]
    pub fn step_back(&self) -> GameState {
        match self.move_index {
            None => self.clone(),
            Some(i) => self.navigate_to(i.checked_sub(1)),
        }
    }

    /// Steps one move forward in history.
    #[must_use]
    pub fn step_forward(&self) -> GameState {
        self.navigate_to(Some(self.move_index.map_or(0, |i| i + 1)))
    }
}
