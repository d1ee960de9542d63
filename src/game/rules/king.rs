//! King move generation
//!
//! ## King Movement Rules
//!
//! - One tile in any direction; every king move forfeits both castling sides
//! - **Castling** (not part of attack queries) is offered per side when:
//!   - the color still holds the right for that side
//!   - an unmoved rook of the same color stands in that side's home corner
//!   - every tile strictly between king and rook is empty
//!   - none of the king's current, pass-through or landing tiles is attacked
//!
//! The king travels the configured distance toward the rook; the rook lands
//! on the tile next to the king's new position, on the inner side.

use crate::game::components::{Piece, RawMove, Relocation};
use crate::game::rules::sliding::{diagonal, horizontal};
use crate::game::rules::{attack, legality, MoveContext};
use crate::game::types::{Cell, PieceKind};

pub fn king_moves(ctx: &MoveContext<'_>, piece: &Piece) -> Vec<RawMove> {
    let mut moves: Vec<RawMove> = horizontal(ctx.board, piece.cell(), 1)
        .into_iter()
        .chain(diagonal(ctx.board, piece.cell(), 1))
        .map(|m| m.forfeiting(true, true))
        .collect();

    if !ctx.attacks_only {
        moves.extend(castling_moves(ctx, piece));
    }

    legality::remove_illegal_moves(ctx.board, piece, moves)
}

fn castling_moves(ctx: &MoveContext<'_>, king: &Piece) -> Vec<RawMove> {
    let board = ctx.board;
    let rights = board.castling.of(king.color);
    if !rights.king_side && !rights.queen_side {
        return Vec::new();
    }
    let Some(home) = king.color.home_row(board.rows()) else {
        return Vec::new();
    };
    if king.row != home {
        return Vec::new();
    }

    let threatened: Vec<Cell> = attack::attacks_against(board, ctx.config, king.color)
        .into_iter()
        .map(|a| a.cell)
        .collect();

    let castling = ctx.config.castling;
    let sides = [
        (rights.king_side, board.columns() - 1, castling.king_side_distance, 1),
        (rights.queen_side, 0, castling.queen_side_distance, -1),
    ];

    let mut moves = Vec::new();
    for (allowed, rook_column, distance, direction) in sides {
        if !allowed || rook_column == king.column {
            continue;
        }
        let Some(rook) = board.piece_at(Cell::new(home, rook_column)) else {
            continue;
        };
        if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved() {
            continue;
        }

        let (low, high) = (king.column.min(rook_column), king.column.max(rook_column));
        if (low + 1..high).any(|column| !board.is_empty(Cell::new(home, column))) {
            continue;
        }

        let target = king.column as isize + direction * distance as isize;
        if !board.in_bounds(home as isize, target) {
            continue;
        }
        let target = target as usize;
        if board.piece_at(Cell::new(home, target)).is_some_and(|p| p.id != rook.id) {
            continue;
        }

        let path_low = king.column.min(target);
        let path_high = king.column.max(target);
        if (path_low..=path_high).any(|column| threatened.contains(&Cell::new(home, column))) {
            continue;
        }

        let rook_target = (target as isize - direction) as usize;
        moves.push(
            RawMove::to_cell(Cell::new(home, target))
                .with_side_effect(Relocation {
                    piece: rook.id,
                    to: Cell::new(home, rook_target),
                })
                .forfeiting(true, true),
        );
    }

    moves
}
