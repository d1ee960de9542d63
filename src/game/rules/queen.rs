//! Queen move generation: rook rays plus bishop rays

use crate::game::components::{Piece, RawMove};
use crate::game::rules::sliding::{diagonal, horizontal};
use crate::game::rules::{legality, MoveContext};

pub fn queen_moves(ctx: &MoveContext<'_>, piece: &Piece) -> Vec<RawMove> {
    let range = ctx.config.slide_range;
    let mut moves = horizontal(ctx.board, piece.cell(), range);
    moves.extend(diagonal(ctx.board, piece.cell(), range));
    legality::remove_illegal_moves(ctx.board, piece, moves)
}
