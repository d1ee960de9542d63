//! Board state: the authoritative snapshot of one position
//!
//! Pieces live in an arena indexed by [`PieceId`]; the tile grid holds ids
//! into it. Every relocation updates the grid slot and the piece's stored
//! coordinates in the same call, so the two never disagree.

use crate::game::components::{MoveSummary, Movement, Piece, PieceSpec};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{CapturedPieces, CastlingRights, TurnState};
use crate::game::rules::Layout;
use crate::game::types::{Cell, Color, PieceId, PieceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid, side to move, en-passant marker, capture tallies and counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    rows: usize,
    columns: usize,
    tiles: Vec<Option<PieceId>>,
    /// Arena slot `n` holds piece `PieceId(n)` while it is live
    arena: Vec<Option<Piece>>,
    pub turn: TurnState,
    /// Pawn that double-stepped on the previous move, if any
    pub en_passant: Option<PieceId>,
    pub selected: Option<PieceId>,
    pub captured: CapturedPieces,
    pub castling: CastlingRights,
    pub last_movement: Option<Movement>,
}

impl BoardState {
    /// Empty board of the given shape
    pub fn new(rows: usize, columns: usize) -> GameResult<Self> {
        if rows < 2 || columns == 0 {
            return Err(GameError::InconsistentDimensions {
                rows,
                columns,
                message: "a board needs at least 2 rows and 1 column".to_string(),
            });
        }
        Ok(BoardState {
            rows,
            columns,
            tiles: vec![None; rows * columns],
            arena: Vec::new(),
            turn: TurnState::default(),
            en_passant: None,
            selected: None,
            captured: CapturedPieces::default(),
            castling: CastlingRights::default(),
            last_movement: None,
        })
    }

    /// Board populated from `layout`, which must match `rows` x `columns`
    pub fn from_layout(layout: &Layout, rows: usize, columns: usize) -> GameResult<Self> {
        if layout.rows() != rows || !layout.tiles().iter().all(|r| r.len() == columns) {
            return Err(GameError::InconsistentDimensions {
                rows,
                columns,
                message: format!(
                    "layout of {} row(s) with ragged or mismatched width",
                    layout.rows()
                ),
            });
        }
        let mut board = BoardState::new(rows, columns)?;
        for (row, tiles) in layout.tiles().iter().enumerate() {
            for (column, spec) in tiles.iter().enumerate() {
                if let Some(spec) = spec {
                    board.place(Cell::new(row, column), *spec)?;
                }
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn in_bounds(&self, row: isize, column: isize) -> bool {
        (0..self.rows as isize).contains(&row) && (0..self.columns as isize).contains(&column)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.columns + cell.column)
    }

    /// Put a new piece on `cell`, replacing any occupant. Returns its id.
    pub fn place(&mut self, cell: Cell, spec: PieceSpec) -> GameResult<PieceId> {
        let Some(index) = self.index(cell) else {
            return Err(GameError::InconsistentDimensions {
                rows: self.rows,
                columns: self.columns,
                message: format!("placement at {:?}", cell),
            });
        };
        if let Some(old) = self.tiles[index].take() {
            self.arena[old.0 as usize] = None;
        }
        let id = PieceId(self.arena.len() as u32);
        self.arena.push(Some(Piece {
            id,
            color: spec.color,
            kind: spec.kind,
            row: cell.row,
            column: cell.column,
            move_count: 0,
            promoted: false,
        }));
        self.tiles[index] = Some(id);
        Ok(id)
    }

    /// Piece on `cell`; `None` when empty or off the board
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        let id = (*self.tiles.get(self.index(cell)?)?)?;
        self.piece(id)
    }

    /// Like [`piece_at`](Self::piece_at) for signed coordinates
    pub fn piece_at_signed(&self, row: isize, column: isize) -> Option<&Piece> {
        if !self.in_bounds(row, column) {
            return None;
        }
        self.piece_at(Cell::new(row as usize, column as usize))
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.piece_at(cell).is_none()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.arena.get(id.0 as usize)?.as_ref()
    }

    /// Live pieces in id order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.arena.iter().flatten()
    }

    /// First king of `color`, if the variant has one
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces().find(|p| p.kind == PieceKind::King && p.color == color)
    }

    fn capture(&mut self, id: PieceId, captor: Color) {
        if let Some(piece) = self.arena.get_mut(id.0 as usize).and_then(Option::take) {
            if let Some(index) = self.index(piece.cell()) {
                if self.tiles[index] == Some(id) {
                    self.tiles[index] = None;
                }
            }
            self.captured.add_capture(captor, piece.kind);
        }
    }

    /// Swap the piece `id` for a fresh piece of `kind` on the same tile
    ///
    /// The replacement keeps color and move count and is flagged promoted.
    pub fn replace(&mut self, id: PieceId, kind: PieceKind) -> GameResult<PieceId> {
        let old = self
            .piece(id)
            .cloned()
            .ok_or(GameError::PieceNotFound { id })?;
        let new_id = self.place(old.cell(), PieceSpec::new(old.color, kind))?;
        if let Some(Some(piece)) = self.arena.get_mut(new_id.0 as usize) {
            piece.move_count = old.move_count;
            piece.promoted = true;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(new_id)
    }

    /// Apply the board-level effects of `movement`
    ///
    /// Capture cells are cleared first, then every relocating piece is lifted
    /// and set down. Pieces already sitting on a destination are captured by
    /// the mover. The en-passant marker takes the movement's value, castling
    /// forfeits are applied for the mover's color and the selection is
    /// cleared. Turn and counters are the controller's business.
    ///
    /// Nothing is touched when a relocation names a piece that isn't live or
    /// a destination off the board.
    pub fn apply(&mut self, movement: &Movement) -> GameResult<MoveSummary> {
        for relocation in &movement.relocations {
            let Some(piece) = self.piece(relocation.piece) else {
                return Err(GameError::PieceNotFound { id: relocation.piece });
            };
            let cell = piece.cell();
            if self.index(cell).and_then(|i| self.tiles[i]) != Some(piece.id) {
                return Err(GameError::PieceNotOnBoard {
                    id: piece.id,
                    row: cell.row,
                    column: cell.column,
                });
            }
            if !self.contains(relocation.to) {
                return Err(GameError::InconsistentDimensions {
                    rows: self.rows,
                    columns: self.columns,
                    message: format!("relocation of {} to {:?}", relocation.piece, relocation.to),
                });
            }
        }
        let Some(mover) = movement
            .mover()
            .and_then(|id| self.piece(id))
            .cloned()
        else {
            return Err(GameError::InconsistentDimensions {
                rows: self.rows,
                columns: self.columns,
                message: "movement without relocations".to_string(),
            });
        };

        let moving: Vec<PieceId> = movement.relocations.iter().map(|r| r.piece).collect();
        let mut captured = false;

        for cell in &movement.captures {
            if let Some(victim) = self.piece_at(*cell).map(|p| p.id) {
                if !moving.contains(&victim) {
                    self.capture(victim, mover.color);
                    captured = true;
                }
            }
        }

        for id in &moving {
            if let Some(cell) = self.piece(*id).map(Piece::cell) {
                if let Some(index) = self.index(cell) {
                    if self.tiles[index] == Some(*id) {
                        self.tiles[index] = None;
                    }
                }
            }
        }

        for relocation in &movement.relocations {
            let Some(index) = self.index(relocation.to) else {
                continue;
            };
            if let Some(occupant) = self.tiles[index] {
                if occupant != relocation.piece {
                    self.capture(occupant, mover.color);
                    captured = true;
                }
            }
            self.tiles[index] = Some(relocation.piece);
            if let Some(Some(piece)) = self.arena.get_mut(relocation.piece.0 as usize) {
                piece.row = relocation.to.row;
                piece.column = relocation.to.column;
                piece.move_count += 1;
            }
        }

        self.en_passant = movement.en_passant;
        self.castling.forfeit(
            mover.color,
            movement.forfeits_king_side,
            movement.forfeits_queen_side,
        );
        self.selected = None;
        self.last_movement = Some(movement.clone());

        Ok(MoveSummary {
            mover_kind: mover.kind,
            captured,
        })
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.columns)
                .map(|column| {
                    self.piece_at(Cell::new(row, column))
                        .map_or('.', Piece::symbol)
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
