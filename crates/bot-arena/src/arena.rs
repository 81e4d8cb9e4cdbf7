//! Match orchestration: settings resolution, running games and tallying.

use chess_ai::AiLevel;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ArenaConfig, ConfigError};
use crate::game_runner::{GameRecord, GameRunner, MatchResult};

/// Games per match when neither the command line nor a preset says.
pub const DEFAULT_GAMES: u32 = 10;

/// Errors that can stop a match from being set up or reported.
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

/// Values given on the command line; `None` defers to the preset or config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOverrides {
    pub games: Option<u32>,
    pub preset: Option<String>,
    pub seed: Option<u64>,
    pub max_plies: Option<u32>,
}

/// Fully resolved settings for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub white: AiLevel,
    pub black: AiLevel,
    pub games: u32,
    pub seed: u64,
    pub max_plies: u32,
}

impl MatchSettings {
    /// Combines command line values, the named preset and the config
    /// defaults, in that order of precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PresetNotFound`] for an unknown preset name.
    pub fn resolve(
        white: AiLevel,
        black: AiLevel,
        overrides: &MatchOverrides,
        config: &ArenaConfig,
    ) -> Result<Self, ArenaError> {
        let preset = overrides
            .preset
            .as_deref()
            .map(|name| config.get_preset(name))
            .transpose()?;

        Ok(MatchSettings {
            white,
            black,
            games: overrides
                .games
                .or(preset.map(|p| p.games))
                .unwrap_or(DEFAULT_GAMES),
            seed: overrides.seed.or(preset.and_then(|p| p.seed)).unwrap_or(0),
            max_plies: overrides
                .max_plies
                .or(preset.and_then(|p| p.max_plies))
                .unwrap_or(config.max_plies),
        })
    }

    /// Seed for the given 1-based game number.
    pub fn game_seed(&self, game: u32) -> u64 {
        self.seed.wrapping_add(u64::from(game))
    }
}

/// Tally of a finished match, scored from White's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub white_level: u8,
    pub black_level: u8,
    pub seed: u64,
    pub max_plies: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    fn new(settings: &MatchSettings) -> Self {
        MatchSummary {
            white_level: settings.white.number(),
            black_level: settings.black.number(),
            seed: settings.seed,
            max_plies: settings.max_plies,
            white_wins: 0,
            black_wins: 0,
            draws: 0,
            games: Vec::new(),
        }
    }

    fn record(&mut self, game: GameRecord) {
        match game.result {
            MatchResult::WhiteWins => self.white_wins += 1,
            MatchResult::BlackWins => self.black_wins += 1,
            MatchResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    /// White's score: one point per win, half per draw.
    pub fn white_score(&self) -> f64 {
        f64::from(self.white_wins) + f64::from(self.draws) / 2.0
    }

    /// Black's score: one point per win, half per draw.
    pub fn black_score(&self) -> f64 {
        f64::from(self.black_wins) + f64::from(self.draws) / 2.0
    }
}

/// Plays every game of a match, calling `on_game` after each one.
pub fn run_match(settings: &MatchSettings, mut on_game: impl FnMut(&GameRecord)) -> MatchSummary {
    let runner = GameRunner::new(settings.white, settings.black, settings.max_plies);
    let mut summary = MatchSummary::new(settings);

    tracing::info!(
        white = %settings.white,
        black = %settings.black,
        games = settings.games,
        seed = settings.seed,
        "starting match"
    );

    for game in 1..=settings.games {
        let record = runner.play_game(game, settings.game_seed(game));
        on_game(&record);
        summary.record(record);
    }

    tracing::info!(
        white_wins = summary.white_wins,
        black_wins = summary.black_wins,
        draws = summary.draws,
        "match finished"
    );
    summary
}
