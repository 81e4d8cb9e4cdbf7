//! Core types for chess.
//!
//! This crate provides the fundamental types used across the workspace:
//! - [`PieceKind`], [`Piece`] and [`Color`] for piece representation
//! - [`Position`] for board coordinates
//! - [`Move`] for recorded moves
//! - [`Board`] for the 8x8 grid
//!
//! Rows run top to bottom: row 0 is Black's back rank, row 7 is White's.

mod board;
mod color;
mod mov;
mod piece;
mod position;

pub use board::Board;
pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::{ParsePositionError, Position};
