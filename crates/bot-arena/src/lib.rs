//! Bot Arena - plays the chess AI levels against each other.
//!
//! # Modules
//!
//! - [`config`] - `arena.toml` loading and match presets
//! - [`game_runner`] - Plays a single game between two levels
//! - [`arena`] - Resolves match settings, runs matches, keeps score
//! - [`json_output`] - JSON export of match results

pub mod arena;
pub mod config;
pub mod game_runner;
pub mod json_output;
