//! Knight move generation
//!
//! Knights jump to the eight (±1, ±2) / (±2, ±1) offsets. Off-board and
//! self-capture targets are removed by the shared filter.

use crate::game::components::{Piece, RawMove};
use crate::game::rules::sliding::{jumps, KNIGHT_JUMPS};
use crate::game::rules::{legality, MoveContext};

pub fn knight_moves(ctx: &MoveContext<'_>, piece: &Piece) -> Vec<RawMove> {
    legality::remove_illegal_moves(ctx.board, piece, jumps(piece.cell(), &KNIGHT_JUMPS))
}
