//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one tile forward onto an empty tile
//! - **Double push**: from the starting row, two tiles forward when both are
//!   empty; sets the en-passant marker to this pawn
//! - **Captures**: one tile diagonally forward onto an opposing piece. Attack
//!   queries report both diagonals regardless of occupancy and skip pushes
//! - **En passant**: diagonally forward onto the tile behind an opposing pawn
//!   that just double-stepped beside this one; the captured tile is that
//!   pawn's, not the destination

use crate::game::components::{Piece, RawMove};
use crate::game::rules::{legality, MoveContext};
use crate::game::types::Cell;

pub fn pawn_moves(ctx: &MoveContext<'_>, piece: &Piece) -> Vec<RawMove> {
    let board = ctx.board;
    let forward = piece.color.forward();
    if forward == 0 {
        return Vec::new();
    }

    let row = piece.row as isize;
    let column = piece.column as isize;
    let ahead = row + forward;
    let mut moves = Vec::new();

    if !ctx.attacks_only
        && board.in_bounds(ahead, column)
        && board.piece_at_signed(ahead, column).is_none()
    {
        moves.push(RawMove::to(ahead, column));

        let two_ahead = ahead + forward;
        let on_start = piece.color.pawn_row(board.rows()) == Some(piece.row);
        if on_start
            && board.in_bounds(two_ahead, column)
            && board.piece_at_signed(two_ahead, column).is_none()
        {
            moves.push(RawMove::to(two_ahead, column).with_en_passant(piece.id));
        }
    }

    for side in [-1, 1] {
        let target_column = column + side;
        if ctx.attacks_only {
            moves.push(RawMove::to(ahead, target_column));
            continue;
        }

        match board.piece_at_signed(ahead, target_column) {
            Some(target) if target.color == piece.color.opponent() => {
                moves.push(RawMove::to(ahead, target_column));
            }
            Some(_) => {}
            None => {
                if let Some(cell) = en_passant_victim(ctx, piece, target_column) {
                    moves.push(RawMove::to(ahead, target_column).with_capture(cell));
                }
            }
        }
    }

    legality::remove_illegal_moves(board, piece, moves)
}

/// Tile of the pawn this one may take en passant on `column`, if any
fn en_passant_victim(ctx: &MoveContext<'_>, piece: &Piece, column: isize) -> Option<Cell> {
    let marker = ctx.board.en_passant?;
    let opponent = piece.color.opponent();

    // the opponent's double step lands on this row
    let landing = opponent.pawn_row(ctx.board.rows())? as isize + 2 * opponent.forward();
    if piece.row as isize != landing {
        return None;
    }

    let victim = ctx.board.piece_at_signed(piece.row as isize, column)?;
    (victim.id == marker && victim.color == opponent).then_some(victim.cell())
}
