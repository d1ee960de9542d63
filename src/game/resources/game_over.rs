//! Game outcome
//!
//! # Outcomes
//!
//! - **Won**: the side to move is in check with no legal moves; the other
//!   side wins. Two playing colors are assumed.
//! - **Stalemate**: the side to move has no legal moves and is not in check.
//! - **Variant**: decided by a configured game-state hook (e.g. a race or
//!   capture-the-king rule) once the above don't apply.

use crate::game::types::Color;
use serde::{Deserialize, Serialize};

/// Result of evaluating the current position
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Game is still in progress
    #[default]
    Active,
    /// The given color won
    Won(Color),
    /// Side to move has no legal moves but is not in check
    Stalemate,
    /// Draw declared by a variant rule
    Draw,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameState::Active)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameState::Won(color) => Some(*color),
            _ => None,
        }
    }

    /// Human-readable summary for UIs and logs
    pub fn message(&self) -> &'static str {
        match self {
            GameState::Active => "Game in progress",
            GameState::Won(Color::Light) => "Light wins",
            GameState::Won(Color::Dark) => "Dark wins",
            GameState::Won(Color::Neutral) => "Game over",
            GameState::Stalemate => "Draw by stalemate",
            GameState::Draw => "Draw",
        }
    }
}
