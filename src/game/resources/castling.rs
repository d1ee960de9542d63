//! Castling rights
//!
//! Rights start granted and are only ever removed: a king move forfeits both
//! sides for its color, a rook leaving its home corner forfeits that side.

use crate::game::types::Color;
use serde::{Deserialize, Serialize};

/// Castling rights of one color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl Default for SideRights {
    fn default() -> Self {
        Self {
            king_side: true,
            queen_side: true,
        }
    }
}

/// Castling rights of both playing colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub light: SideRights,
    pub dark: SideRights,
}

impl CastlingRights {
    /// Rights of `color`; neutral pieces never castle
    pub fn of(&self, color: Color) -> SideRights {
        match color {
            Color::Light => self.light,
            Color::Dark => self.dark,
            Color::Neutral => SideRights {
                king_side: false,
                queen_side: false,
            },
        }
    }

    pub fn forfeit(&mut self, color: Color, king_side: bool, queen_side: bool) {
        let rights = match color {
            Color::Light => &mut self.light,
            Color::Dark => &mut self.dark,
            Color::Neutral => return,
        };
        if king_side {
            rights.king_side = false;
        }
        if queen_side {
            rights.queen_side = false;
        }
    }
}

/// Columns the king travels when castling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingConfig {
    pub king_side_distance: usize,
    pub queen_side_distance: usize,
}

impl Default for CastlingConfig {
    fn default() -> Self {
        Self {
            king_side_distance: 2,
            queen_side_distance: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forfeit_is_per_color_and_side() {
        let mut rights = CastlingRights::default();
        rights.forfeit(Color::Light, true, false);

        assert!(!rights.of(Color::Light).king_side);
        assert!(rights.of(Color::Light).queen_side);
        assert_eq!(rights.of(Color::Dark), SideRights::default());

        rights.forfeit(Color::Neutral, true, true);
        assert!(rights.of(Color::Dark).king_side);
        assert!(!rights.of(Color::Neutral).queen_side);
    }
}
