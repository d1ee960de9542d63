//! Type definitions for chess variant game logic
//!
//! Provides newtype patterns for board coordinates and piece identity so that
//! rows, columns and piece ids can't be mixed up.
//!
//! # Orientation
//!
//! Row 0 is the far edge from the Light side's point of view. Light starts on
//! the last rows and moves toward row 0, Dark starts on rows 0/1 and moves
//! toward the last row. Column 0 is the queen-side edge.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side a piece belongs to
///
/// `Neutral` marks non-playing pieces (walls, blockers in some variants). A
/// neutral piece never has a turn and is never the opponent of anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Color {
    #[default]
    Light,
    Dark,
    Neutral,
}

impl Color {
    /// The opposing playing side. Neutral has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
            Color::Neutral => Color::Neutral,
        }
    }

    /// Row step a pawn of this color takes when moving forward
    pub fn forward(self) -> isize {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
            Color::Neutral => 0,
        }
    }

    /// Row of this side's back rank on a board with `rows` rows
    pub fn home_row(self, rows: usize) -> Option<usize> {
        match self {
            Color::Light => Some(rows - 1),
            Color::Dark => Some(0),
            Color::Neutral => None,
        }
    }

    /// Row this side's pawns start on
    pub fn pawn_row(self, rows: usize) -> Option<usize> {
        match self {
            Color::Light => Some(rows - 2),
            Color::Dark => Some(1),
            Color::Neutral => None,
        }
    }

    /// Farthest row for this side, where its pawns promote
    pub fn last_row(self, rows: usize) -> Option<usize> {
        self.opponent()
            .home_row(rows)
            .filter(|_| self != Color::Neutral)
    }
}

/// Kind of a piece
///
/// `Custom` kinds carry a variant-defined number; their movement is supplied
/// by [`crate::game::config::ControllerConfig::custom_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Custom(u16),
}

impl PieceKind {
    /// Letter used in ASCII boards (uppercase, Light orientation)
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Custom(_) => '?',
        }
    }

    /// Parse a letter back into a standard kind, ignoring case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Unique identity of a piece within one game
///
/// Ids are handed out by the board when a piece is placed and are never
/// reused in the same game, so a stale id simply finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Board tile position (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Cell { row, column }
    }

    /// Offset this cell, returning `None` when it would leave the
    /// non-negative quadrant. Upper bounds are the board's business.
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            column: self.column.checked_add_signed(d_column)?,
        })
    }

    /// Algebraic name of this cell on a board with `rows` rows (e.g. "e4")
    ///
    /// Columns past 'z' have no letter and fall back to `(row,column)`.
    pub fn to_algebraic(self, rows: usize) -> String {
        if self.column < 26 && self.row < rows {
            format!("{}{}", (b'a' + self.column as u8) as char, rows - self.row)
        } else {
            format!("({},{})", self.row, self.column)
        }
    }

    /// Parse algebraic notation for a board with `rows` rows
    ///
    /// # Examples
    ///
    /// ```
    /// use xfchess_rules::game::types::Cell;
    ///
    /// assert_eq!(Cell::from_algebraic("e2", 8), Some(Cell::new(6, 4)));
    /// assert_eq!(Cell::from_algebraic("a8", 8), Some(Cell::new(0, 0)));
    /// ```
    pub fn from_algebraic(s: &str, rows: usize) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        if !file.is_ascii_lowercase() {
            return None;
        }
        let rank: usize = chars.as_str().parse().ok()?;
        if rank == 0 || rank > rows {
            return None;
        }
        Some(Cell::new(rows - rank, (file as u8 - b'a') as usize))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Cell::new(row, column)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Light.opponent(), Color::Dark);
        assert_eq!(Color::Dark.opponent(), Color::Light);
        assert_eq!(Color::Neutral.opponent(), Color::Neutral);
    }

    #[test]
    fn test_color_rows() {
        //! Light starts at the bottom, Dark at the top
        assert_eq!(Color::Light.home_row(8), Some(7));
        assert_eq!(Color::Light.pawn_row(8), Some(6));
        assert_eq!(Color::Light.last_row(8), Some(0));
        assert_eq!(Color::Dark.home_row(10), Some(0));
        assert_eq!(Color::Dark.pawn_row(10), Some(1));
        assert_eq!(Color::Dark.last_row(10), Some(9));
        assert_eq!(Color::Neutral.last_row(8), None);
    }

    #[test]
    fn test_cell_offset() {
        let cell = Cell::new(0, 3);
        assert_eq!(cell.offset(1, -1), Some(Cell::new(1, 2)));
        assert_eq!(cell.offset(-1, 0), None);
        assert_eq!(Cell::new(2, 0).offset(0, -1), None);
    }

    #[test]
    fn test_cell_algebraic() {
        assert_eq!(Cell::new(7, 0).to_algebraic(8), "a1");
        assert_eq!(Cell::new(4, 4).to_algebraic(8), "e4");
        assert_eq!(Cell::from_algebraic("h8", 8), Some(Cell::new(0, 7)));
        assert_eq!(Cell::from_algebraic("e10", 10), Some(Cell::new(0, 4)));
        assert_eq!(Cell::from_algebraic("e9", 8), None);
        assert_eq!(Cell::from_algebraic("E2", 8), None);
    }

    #[test]
    fn test_piece_kind_chars() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ] {
            assert_eq!(PieceKind::from_char(kind.to_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('n'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::Custom(3).to_char(), '?');
    }
}
