//! Candidate and resolved movements
//!
//! Piece rules emit [`RawMove`]s, one per proposed destination. They are
//! allowed to point off the board; the legality filter trims them. The
//! controller then groups the survivors by destination into [`Movement`]s,
//! which carry every relocation and capture the destination implies.

use crate::game::components::Piece;
use crate::game::types::{Cell, PieceId, PieceKind};
use serde::{Deserialize, Serialize};

/// One piece moving to one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    pub piece: PieceId,
    pub to: Cell,
}

/// Unfiltered destination proposed by a piece's rule function
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawMove {
    pub row: isize,
    pub column: isize,
    /// En-passant marker to set when this move is chosen
    pub en_passant: Option<PieceId>,
    /// Cells to clear that differ from the destination (en passant)
    pub captures: Vec<Cell>,
    /// Extra relocations, e.g. the rook during castling
    pub side_effects: Vec<Relocation>,
    pub forfeits_king_side: bool,
    pub forfeits_queen_side: bool,
}

impl RawMove {
    pub fn to(row: isize, column: isize) -> Self {
        RawMove {
            row,
            column,
            ..Default::default()
        }
    }

    pub fn to_cell(cell: Cell) -> Self {
        RawMove::to(cell.row as isize, cell.column as isize)
    }

    /// Destination as a cell, if it isn't off the negative edges
    pub fn cell(&self) -> Option<Cell> {
        Some(Cell::new(
            usize::try_from(self.row).ok()?,
            usize::try_from(self.column).ok()?,
        ))
    }

    pub fn with_en_passant(mut self, id: PieceId) -> Self {
        self.en_passant = Some(id);
        self
    }

    pub fn with_capture(mut self, cell: Cell) -> Self {
        self.captures.push(cell);
        self
    }

    pub fn with_side_effect(mut self, relocation: Relocation) -> Self {
        self.side_effects.push(relocation);
        self
    }

    pub fn forfeiting(mut self, king_side: bool, queen_side: bool) -> Self {
        self.forfeits_king_side |= king_side;
        self.forfeits_queen_side |= queen_side;
        self
    }
}

/// Legality-filtered, destination-grouped move ready for execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub to: Cell,
    /// Mover first, then side effects in the order they were proposed
    pub relocations: Vec<Relocation>,
    pub captures: Vec<Cell>,
    /// Marker the board takes after this move; `None` clears it
    pub en_passant: Option<PieceId>,
    pub forfeits_king_side: bool,
    pub forfeits_queen_side: bool,
}

impl Movement {
    /// Id of the piece that initiated the movement
    pub fn mover(&self) -> Option<PieceId> {
        self.relocations.first().map(|r| r.piece)
    }

    /// True when more than one piece relocates (castling)
    pub fn is_compound(&self) -> bool {
        self.relocations.len() > 1
    }
}

/// Group filtered candidates by destination, keeping first-seen order
///
/// Candidates that still point off the board are skipped; the legality
/// filter should have removed them already.
pub fn resolve_movements(piece: &Piece, raw: Vec<RawMove>) -> Vec<Movement> {
    let mut out: Vec<Movement> = Vec::new();

    for candidate in raw {
        let Some(to) = candidate.cell() else {
            continue;
        };

        let index = match out.iter().position(|m| m.to == to) {
            Some(index) => index,
            None => {
                out.push(Movement {
                    to,
                    relocations: vec![Relocation { piece: piece.id, to }],
                    captures: Vec::new(),
                    en_passant: None,
                    forfeits_king_side: false,
                    forfeits_queen_side: false,
                });
                out.len() - 1
            }
        };

        let movement = &mut out[index];
        for relocation in candidate.side_effects {
            if !movement.relocations.contains(&relocation) {
                movement.relocations.push(relocation);
            }
        }
        for cell in candidate.captures {
            if !movement.captures.contains(&cell) {
                movement.captures.push(cell);
            }
        }
        if movement.en_passant.is_none() {
            movement.en_passant = candidate.en_passant;
        }
        movement.forfeits_king_side |= candidate.forfeits_king_side;
        movement.forfeits_queen_side |= candidate.forfeits_queen_side;
    }

    out
}

/// What the move counters need to know about a committed movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSummary {
    pub mover_kind: PieceKind,
    pub captured: bool,
}
