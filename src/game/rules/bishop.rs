//! Bishop move generation: four diagonal rays

use crate::game::components::{Piece, RawMove};
use crate::game::rules::sliding::diagonal;
use crate::game::rules::{legality, MoveContext};

pub fn bishop_moves(ctx: &MoveContext<'_>, piece: &Piece) -> Vec<RawMove> {
    let moves = diagonal(ctx.board, piece.cell(), ctx.config.slide_range);
    legality::remove_illegal_moves(ctx.board, piece, moves)
}
