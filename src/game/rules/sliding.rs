//! Ray casting shared by sliding pieces and the king
//!
//! ## Algorithm
//!
//! Walk from the origin along a direction vector, one tile per step, for at
//! most `max` steps. The first occupied tile is included and ends the ray;
//! whether it is a capture or a self-block is decided later by the legality
//! filter. Leaving the board also ends the ray.

use crate::game::components::RawMove;
use crate::game::rules::BoardState;
use crate::game::types::Cell;

/// (row, column) steps along ranks and files
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// (row, column) steps along diagonals
pub const DIAGONAL: [(isize, isize); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// Knight jumps, unfiltered by occupancy
pub const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Candidates along one ray, nearest first
pub fn long_movement(
    board: &BoardState,
    origin: Cell,
    d_row: isize,
    d_column: isize,
    max: usize,
) -> Vec<RawMove> {
    let mut moves = Vec::new();
    let (mut row, mut column) = (origin.row as isize, origin.column as isize);

    for _ in 0..max {
        row += d_row;
        column += d_column;
        if !board.in_bounds(row, column) {
            break;
        }
        moves.push(RawMove::to(row, column));
        if board.piece_at_signed(row, column).is_some() {
            break;
        }
    }

    moves
}

/// Four orthogonal rays
pub fn horizontal(board: &BoardState, origin: Cell, max: usize) -> Vec<RawMove> {
    rays(board, origin, &ORTHOGONAL, max)
}

/// Four diagonal rays
pub fn diagonal(board: &BoardState, origin: Cell, max: usize) -> Vec<RawMove> {
    rays(board, origin, &DIAGONAL, max)
}

fn rays(
    board: &BoardState,
    origin: Cell,
    directions: &[(isize, isize)],
    max: usize,
) -> Vec<RawMove> {
    directions
        .iter()
        .flat_map(|(d_row, d_column)| long_movement(board, origin, *d_row, *d_column, max))
        .collect()
}

/// Fixed-offset destinations, which may point off the board
pub fn jumps(origin: Cell, offsets: &[(isize, isize)]) -> Vec<RawMove> {
    offsets
        .iter()
        .map(|(d_row, d_column)| {
            RawMove::to(
                origin.row as isize + d_row,
                origin.column as isize + d_column,
            )
        })
        .collect()
}
