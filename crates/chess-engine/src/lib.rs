//! Chess rules engine.
//!
//! This crate provides:
//! - Pseudo-legal move generation per piece ([`possible_moves`])
//! - Attack and check detection ([`is_square_attacked`], [`is_in_check`])
//! - The king-safety filter and legal move enumeration ([`all_valid_moves`])
//! - Special-move aware move application ([`apply_move`])
//! - [`GameState`] - immutable game snapshots with branching history
//! - Status classification ([`GameStatus`]) and [`perft`]
//!
//! # Architecture
//!
//! Boards are small `Copy` values, so every operation is a pure function
//! from an input board to a new board. Nothing in this crate holds hidden
//! state, which makes it safe to drive independent games from independent
//! threads.
//!
//! # Example
//!
//! ```
//! use chess_engine::{GameState, GameStatus};
//!
//! let game = GameState::new();
//! println!("Legal moves from starting position: {}", game.valid_moves().len());
//!
//! let game = game
//!     .try_move("e2".parse().unwrap(), "e4".parse().unwrap())
//!     .unwrap();
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.moves().len(), 1);
//! ```

mod game;
pub mod movegen;
pub mod rules;

pub use game::{GameError, GameState};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    all_valid_moves, apply_move, describe_move, has_valid_moves, is_in_check, is_square_attacked,
    is_valid_move, legal_destinations, possible_moves, would_be_valid_after_move,
};
pub use rules::{classify, GameStatus};
