//! Starting layouts
//!
//! A [`Layout`] is a rows x columns grid of optional [`PieceSpec`]s that the
//! controller turns into a board on `new_game`.

use crate::game::components::PieceSpec;
use crate::game::types::{Cell, Color, PieceKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    tiles: Vec<Vec<Option<PieceSpec>>>,
}

impl Layout {
    pub fn empty(rows: usize, columns: usize) -> Self {
        Layout {
            tiles: vec![vec![None; columns]; rows],
        }
    }

    /// Back rows, pawn rows and empty middle rows
    ///
    /// The back row has rooks in the corners, the king on `columns / 2`, the
    /// queen beside it on the queen side, and knights then bishops filling
    /// inward from both edges. On 8 columns this is `RNBQKBNR`.
    pub fn standard(rows: usize, columns: usize) -> Self {
        let mut layout = Layout::empty(rows, columns);
        if rows < 2 || columns == 0 {
            return layout;
        }
        let back = back_row(columns);
        for color in [Color::Light, Color::Dark] {
            let (Some(home), Some(pawns)) = (color.home_row(rows), color.pawn_row(rows)) else {
                continue;
            };
            for (column, kind) in back.iter().enumerate() {
                layout.set(Cell::new(home, column), Some(PieceSpec::new(color, *kind)));
                layout.set(Cell::new(pawns, column), Some(PieceSpec::new(color, PieceKind::Pawn)));
            }
        }
        layout
    }

    /// Parse one text line per row: `KQRBNP` Light, lowercase Dark, `.` empty
    ///
    /// ```
    /// use xfchess_rules::game::rules::Layout;
    ///
    /// let layout = Layout::parse("....k...\n........\n....K..R").unwrap();
    /// assert_eq!(layout.rows(), 3);
    /// assert_eq!(layout.columns(), 8);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut tiles = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut row = Vec::new();
            for c in line.chars() {
                if c == '.' {
                    row.push(None);
                    continue;
                }
                let kind = PieceKind::from_char(c)?;
                let color = if c.is_ascii_uppercase() {
                    Color::Light
                } else {
                    Color::Dark
                };
                row.push(Some(PieceSpec::new(color, kind)));
            }
            tiles.push(row);
        }
        Some(Layout { tiles })
    }

    pub fn set(&mut self, cell: Cell, spec: Option<PieceSpec>) {
        if let Some(slot) = self.tiles.get_mut(cell.row).and_then(|r| r.get_mut(cell.column)) {
            *slot = spec;
        }
    }

    pub fn with(mut self, cell: Cell, color: Color, kind: PieceKind) -> Self {
        self.set(cell, Some(PieceSpec::new(color, kind)));
        self
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn columns(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn tiles(&self) -> &[Vec<Option<PieceSpec>>] {
        &self.tiles
    }
}

fn back_row(columns: usize) -> Vec<PieceKind> {
    let mut row: Vec<Option<PieceKind>> = vec![None; columns];
    row[columns / 2] = Some(PieceKind::King);
    if columns >= 2 && row[columns / 2 - 1].is_none() {
        row[columns / 2 - 1] = Some(PieceKind::Queen);
    }
    for corner in [0, columns - 1] {
        if row[corner].is_none() {
            row[corner] = Some(PieceKind::Rook);
        }
    }
    for step in 1..columns.div_ceil(2) {
        let kind = if step % 2 == 1 {
            PieceKind::Knight
        } else {
            PieceKind::Bishop
        };
        for column in [step, columns - 1 - step] {
            if row[column].is_none() {
                row[column] = Some(kind);
            }
        }
    }
    row.into_iter()
        .map(|k| k.unwrap_or(PieceKind::Pawn))
        .collect()
}
