//! Strength levels.

use std::fmt;
use thiserror::Error;

/// Error returned when converting a number outside 1..=5 into an [`AiLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid AI level {0}, expected 1-5")]
pub struct InvalidLevel(pub u8);

/// AI strength, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AiLevel {
    /// Uniformly random legal move.
    Random = 1,
    /// Takes the most valuable piece on offer, otherwise random.
    Greedy = 2,
    /// One-ply static heuristic.
    Heuristic = 3,
    /// Two-ply alpha-beta minimax.
    Minimax2 = 4,
    /// Three-ply alpha-beta minimax.
    Minimax3 = 5,
}

impl AiLevel {
    pub const ALL: [AiLevel; 5] = [
        AiLevel::Random,
        AiLevel::Greedy,
        AiLevel::Heuristic,
        AiLevel::Minimax2,
        AiLevel::Minimax3,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Search depth in plies, for the minimax levels.
    pub const fn depth(self) -> Option<u32> {
        match self {
            AiLevel::Minimax2 => Some(2),
            AiLevel::Minimax3 => Some(3),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AiLevel::Random => "Beginner",
            AiLevel::Greedy => "Novice",
            AiLevel::Heuristic => "Intermediate",
            AiLevel::Minimax2 => "Advanced",
            AiLevel::Minimax3 => "Expert",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            AiLevel::Random => "Random moves",
            AiLevel::Greedy => "Captures pieces",
            AiLevel::Heuristic => "Basic strategy",
            AiLevel::Minimax2 => "Deep thinking",
            AiLevel::Minimax3 => "Master level",
        }
    }
}

impl TryFrom<u8> for AiLevel {
    type Error = InvalidLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AiLevel::ALL
            .into_iter()
            .find(|level| level.number() == value)
            .ok_or(InvalidLevel(value))
    }
}

impl fmt::Display for AiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}
