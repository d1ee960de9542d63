//! Attack scans and check detection
//!
//! Attacks are the attack-only candidates of every piece not of the defending
//! color: pawns report both forward diagonals, castling is skipped, and the
//! configured extra legality hook is not consulted.

use crate::game::components::Piece;
use crate::game::config::ControllerConfig;
use crate::game::rules::{candidate_moves, BoardState, MoveContext};
use crate::game::types::{Cell, Color, PieceId, PieceKind};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A tile threatened by a specific piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub attacker: PieceId,
    pub attacker_color: Color,
    pub cell: Cell,
}

/// All tiles threatened by pieces not of `color`
pub fn attacks_against(board: &BoardState, config: &ControllerConfig, color: Color) -> Vec<Attack> {
    let ctx = MoveContext::attacks(board, config);
    let attacks: Vec<Attack> = board
        .pieces()
        .filter(|p| p.color != color)
        .flat_map(|p| {
            candidate_moves(&ctx, p)
                .into_iter()
                .filter_map(|m| m.cell())
                .map(move |cell| Attack {
                    attacker: p.id,
                    attacker_color: p.color,
                    cell,
                })
        })
        .collect();
    trace!("[RULES] {} attack(s) against {:?}", attacks.len(), color);
    attacks
}

/// True when a piece not of `color` threatens `cell`
pub fn is_attacked(
    board: &BoardState,
    config: &ControllerConfig,
    cell: Cell,
    color: Color,
) -> bool {
    attacks_against(board, config, color)
        .iter()
        .any(|a| a.cell == cell)
}

/// King of `color` standing on a threatened tile, if any
pub fn checked_king<'b>(
    board: &'b BoardState,
    config: &ControllerConfig,
    color: Color,
) -> Option<&'b Piece> {
    let attacks = attacks_against(board, config, color);
    board.pieces().find(|p| {
        p.kind == PieceKind::King
            && p.color == color
            && attacks.iter().any(|a| a.cell == p.cell() && a.attacker_color != color)
    })
}
