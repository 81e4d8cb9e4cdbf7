//! Game execution logic for running games between two AI levels.
//!
//! [`GameRunner`] plays one game from the initial position, asking
//! [`chess_ai::best_move`] for each side and applying the answer through
//! [`GameState::make_move`].

use chess_ai::{best_move, AiLevel};
use chess_core::Color;
use chess_engine::{GameState, GameStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// The outcome of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    /// White won the game by checkmate.
    #[serde(rename = "white")]
    WhiteWins,
    /// Black won the game by checkmate.
    #[serde(rename = "black")]
    BlackWins,
    /// Stalemate, or the ply limit was reached.
    Draw,
}

impl MatchResult {
    /// The result of a game that ended in `status` with `to_move` on move.
    fn from_final(status: GameStatus, to_move: Color) -> Self {
        match (status, to_move) {
            (GameStatus::Checkmate, Color::White) => MatchResult::BlackWins,
            (GameStatus::Checkmate, Color::Black) => MatchResult::WhiteWins,
            _ => MatchResult::Draw,
        }
    }
}

/// Record of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    /// 1-based number of the game within its match.
    pub game: u32,
    /// Seed the game's random source was created from.
    pub seed: u64,
    /// Moves in coordinate notation (e.g. "e2e4").
    pub moves: Vec<String>,
    /// The outcome of the game.
    pub result: MatchResult,
    /// Status of the final position ("checkmate", "stalemate", "playing", ...).
    pub final_status: String,
}

impl GameRecord {
    /// Number of plies played.
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Plays games between two AI levels.
#[derive(Debug, Clone, Copy)]
pub struct GameRunner {
    white: AiLevel,
    black: AiLevel,
    max_plies: u32,
}

impl GameRunner {
    /// Creates a runner; games stop as drawn after `max_plies` plies.
    pub fn new(white: AiLevel, black: AiLevel, max_plies: u32) -> Self {
        GameRunner {
            white,
            black,
            max_plies,
        }
    }

    fn level_for(&self, color: Color) -> AiLevel {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Plays a complete game with a random source seeded from `seed`.
    ///
    /// The same seed always produces the same game.
    pub fn play_game(&self, game: u32, seed: u64) -> GameRecord {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();
        let mut plies = 0;

        while !state.status().is_game_over() && plies < self.max_plies {
            let color = state.current_player();
            let level = self.level_for(color);
            let Some(mv) = best_move(state.board(), color, state.history(), level, &mut rng)
            else {
                break;
            };
            state = state.make_move(mv.from, mv.to);
            plies += 1;
        }

        let result = MatchResult::from_final(state.status(), state.current_player());
        tracing::debug!(
            game,
            seed,
            plies,
            status = %state.status(),
            ?result,
            "game finished"
        );

        GameRecord {
            game,
            seed,
            moves: state.moves().iter().map(|m| m.to_coordinate()).collect(),
            result,
            final_status: state.status().to_string(),
        }
    }
}
