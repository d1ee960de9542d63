//! Chess rules module - pure game logic
//!
//! Movement rules are pure functions from (board, piece, query) to candidate
//! moves. Nothing here mutates a board; the controller applies movements.
//!
//! # Module Structure
//!
//! - `sliding` - ray casting and fixed-offset jumps
//! - `pawn`, `knight`, `bishop`, `rook`, `queen`, `king` - one rule per kind
//! - `attack` - attack scans and check detection
//! - `legality` - bounds / self-capture filter and the king-safety hook
//! - `board_state` - the position snapshot
//! - `layout` - starting layouts

pub mod attack;
pub mod bishop;
pub mod board_state;
pub mod king;
pub mod knight;
pub mod layout;
pub mod legality;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

#[cfg(test)]
mod tests;

pub use attack::{attacks_against, checked_king, is_attacked, Attack};
pub use board_state::BoardState;
pub use layout::Layout;

use crate::game::components::{Piece, RawMove};
use crate::game::config::ControllerConfig;
use crate::game::types::PieceKind;

/// Everything a rule function may read
#[derive(Clone, Copy)]
pub struct MoveContext<'a> {
    pub board: &'a BoardState,
    pub config: &'a ControllerConfig,
    /// Report threatened squares instead of playable moves
    pub attacks_only: bool,
}

impl<'a> MoveContext<'a> {
    pub fn new(board: &'a BoardState, config: &'a ControllerConfig) -> Self {
        MoveContext {
            board,
            config,
            attacks_only: false,
        }
    }

    pub fn attacks(board: &'a BoardState, config: &'a ControllerConfig) -> Self {
        MoveContext {
            board,
            config,
            attacks_only: true,
        }
    }
}

/// Candidate moves of `piece`, already trimmed by the shared legality filter
///
/// Custom kinds without a configured rule have no moves.
pub fn candidate_moves(ctx: &MoveContext<'_>, piece: &Piece) -> Vec<RawMove> {
    match piece.kind {
        PieceKind::Pawn => pawn::pawn_moves(ctx, piece),
        PieceKind::Knight => knight::knight_moves(ctx, piece),
        PieceKind::Bishop => bishop::bishop_moves(ctx, piece),
        PieceKind::Rook => rook::rook_moves(ctx, piece),
        PieceKind::Queen => queen::queen_moves(ctx, piece),
        PieceKind::King => king::king_moves(ctx, piece),
        PieceKind::Custom(_) => match &ctx.config.custom_moves {
            Some(rule) => legality::remove_illegal_moves(ctx.board, piece, rule(ctx, piece)),
            None => Vec::new(),
        },
    }
}
