//! Legality filtering
//!
//! [`remove_illegal_moves`] is the shared filter every rule function routes
//! its output through: it drops off-board destinations and self-captures.
//! It does not look at king safety. [`remove_self_check`] adds that as a
//! pluggable hook; standard configurations install it, base ones don't.

use crate::game::components::{resolve_movements, Piece, RawMove};
use crate::game::controller::Controller;
use crate::game::rules::BoardState;

/// Drop candidates that leave the grid or land on a piece of the mover's color
pub fn remove_illegal_moves(
    board: &BoardState,
    piece: &Piece,
    moves: Vec<RawMove>,
) -> Vec<RawMove> {
    moves
        .into_iter()
        .filter(|m| board.in_bounds(m.row, m.column))
        .filter(|m| {
            board
                .piece_at_signed(m.row, m.column)
                .map_or(true, |target| target.color != piece.color)
        })
        .collect()
}

/// Drop candidates after which the mover's own king would be attacked
///
/// Each candidate is played on a sandbox clone of `controller`, so the real
/// game's board, history and listeners are never touched.
pub fn remove_self_check(
    controller: &Controller,
    piece: &Piece,
    moves: Vec<RawMove>,
) -> Vec<RawMove> {
    moves
        .into_iter()
        .filter(|raw| {
            let Some(movement) = resolve_movements(piece, vec![raw.clone()]).pop() else {
                return false;
            };
            let mut sandbox = controller.clone_sandbox();
            if sandbox.execute_movement(&movement).is_err() {
                return false;
            }
            sandbox.get_checked_king(piece.color).is_none()
        })
        .collect()
}
