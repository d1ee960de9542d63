//! Pawn promotion helpers

use crate::game::components::Piece;
use crate::game::types::{Color, PieceKind};

/// Kinds a pawn may promote to when no variant override is configured
pub fn default_promotion_choices(color: Color) -> Vec<PieceKind> {
    match color {
        Color::Neutral => Vec::new(),
        _ => vec![
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ],
    }
}

/// True when `piece` is a pawn standing on its farthest row
pub fn is_promotable(piece: &Piece, rows: usize) -> bool {
    piece.kind == PieceKind::Pawn && piece.color.last_row(rows) == Some(piece.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::PieceId;

    fn pawn(color: Color, row: usize) -> Piece {
        Piece {
            id: PieceId(1),
            color,
            kind: PieceKind::Pawn,
            row,
            column: 0,
            move_count: 5,
            promoted: false,
        }
    }

    #[test]
    fn test_is_promotable() {
        assert!(is_promotable(&pawn(Color::Light, 0), 8));
        assert!(!is_promotable(&pawn(Color::Light, 7), 8));
        assert!(is_promotable(&pawn(Color::Dark, 7), 8));
        assert!(is_promotable(&pawn(Color::Dark, 9), 10));
        assert!(!is_promotable(&pawn(Color::Neutral, 0), 8));
    }

    #[test]
    fn test_default_choices_exclude_king_and_pawn() {
        let choices = default_promotion_choices(Color::Dark);
        assert_eq!(choices.len(), 4);
        assert!(!choices.contains(&PieceKind::King));
        assert!(!choices.contains(&PieceKind::Pawn));
        assert!(default_promotion_choices(Color::Neutral).is_empty());
    }
}
