//! Rook move generation
//!
//! Four orthogonal rays. A rook leaving its home corner forfeits castling on
//! that corner's side, so every candidate from a home corner carries the
//! matching forfeit flag.

use crate::game::components::{Piece, RawMove};
use crate::game::rules::sliding::horizontal;
use crate::game::rules::{legality, MoveContext};

pub fn rook_moves(ctx: &MoveContext<'_>, piece: &Piece) -> Vec<RawMove> {
    let board = ctx.board;
    let at_home = piece.color.home_row(board.rows()) == Some(piece.row);
    let king_side = at_home && piece.column == board.columns() - 1;
    let queen_side = at_home && piece.column == 0;

    let moves = horizontal(board, piece.cell(), ctx.config.slide_range)
        .into_iter()
        .map(|m| m.forfeiting(king_side, queen_side))
        .collect();
    legality::remove_illegal_moves(board, piece, moves)
}
