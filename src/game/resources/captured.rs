//! Captured pieces tracking
//!
//! Tracks pieces captured by each side and calculates material advantage.
//!
//! # Material Values
//!
//! Pawn 1, Knight/Bishop 3, Rook 5, Queen 9. Kings and custom kinds count 0.
//! Positive advantage means Light is ahead.

use crate::game::types::{Color, PieceKind};
use serde::{Deserialize, Serialize};

/// Capture tallies for both sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Pieces captured by Light (Dark or neutral pieces taken)
    pub light_captured: Vec<PieceKind>,
    /// Pieces captured by Dark
    pub dark_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record that `captor` took a piece of `kind`
    ///
    /// Neutral pieces never hold the move, so a neutral captor is ignored.
    pub fn add_capture(&mut self, captor: Color, kind: PieceKind) {
        match captor {
            Color::Light => self.light_captured.push(kind),
            Color::Dark => self.dark_captured.push(kind),
            Color::Neutral => {}
        }
    }

    /// Number of pieces of `kind` captured by `captor`
    pub fn count(&self, captor: Color, kind: PieceKind) -> usize {
        self.by(captor).iter().filter(|k| **k == kind).count()
    }

    /// Everything `captor` has taken, in capture order
    pub fn by(&self, captor: Color) -> &[PieceKind] {
        match captor {
            Color::Light => &self.light_captured,
            Color::Dark => &self.dark_captured,
            Color::Neutral => &[],
        }
    }

    /// Material difference in pawn units, Light minus Dark
    pub fn material_advantage(&self) -> i32 {
        let light: i32 = self.light_captured.iter().map(|k| piece_value(*k)).sum();
        let dark: i32 = self.dark_captured.iter().map(|k| piece_value(*k)).sum();
        light - dark
    }
}

fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King | PieceKind::Custom(_) => 0,
    }
}
