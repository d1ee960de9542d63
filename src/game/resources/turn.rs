//! Turn tracking
//!
//! Holds whose turn it is plus the half-move clock and full-move number.
//! Move numbers follow standard notation: the full-move number starts at 1
//! and increments only after Dark completes their turn.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: Light plays → switch() → Dark plays → switch() → Move 2: Light plays
//! ```

use crate::game::components::MoveSummary;
use crate::game::types::{Color, PieceKind};
use serde::{Deserialize, Serialize};

/// Whose turn it is and how many moves have been played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub color: Color,
    /// Half-moves since the last pawn move or capture
    pub half_move: u32,
    pub full_move: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            color: Color::Light,
            half_move: 0,
            full_move: 1,
        }
    }
}

impl TurnState {
    /// Hand the move to the other side
    pub fn switch(&mut self) {
        self.color = self.color.opponent();
    }

    /// Default counter rule, applied with the mover still recorded as `color`
    pub fn count(&mut self, summary: &MoveSummary) {
        if summary.mover_kind == PieceKind::Pawn || summary.captured {
            self.half_move = 0;
        } else {
            self.half_move += 1;
        }
        if self.color == Color::Dark {
            self.full_move += 1;
        }
    }
}
