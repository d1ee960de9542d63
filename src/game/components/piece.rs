//! Piece data stored in the board's arena

use crate::game::types::{Cell, Color, PieceId, PieceKind};
use serde::{Deserialize, Serialize};

/// A live piece
///
/// `row`/`column` duplicate the piece's grid position for O(1) lookup. The
/// board updates both together on every relocation, so they always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub row: usize,
    pub column: usize,
    /// Number of times this piece has been relocated
    pub move_count: u32,
    /// Set on pieces created by promoting a pawn
    pub promoted: bool,
}

impl Piece {
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.column)
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    /// Character used in ASCII boards: uppercase Light, lowercase Dark
    pub fn symbol(&self) -> char {
        match self.color {
            Color::Light => self.kind.to_char(),
            Color::Dark => self.kind.to_char().to_ascii_lowercase(),
            Color::Neutral => '?',
        }
    }
}

/// Placement request used by layouts: a piece that doesn't have an id yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSpec {
    pub color: Color,
    pub kind: PieceKind,
}

impl PieceSpec {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        PieceSpec { color, kind }
    }
}
