//! Error types for game module
//!
//! Only programming-contract violations surface as errors. User-facing
//! invalid actions (selecting an opponent's piece, undo at the start of the
//! game, unknown ids) are silent no-ops on the controller instead.

use crate::game::types::PieceId;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A movement relocation references a piece that isn't on the board
    #[error("Piece {id} is not on the board")]
    PieceNotFound { id: PieceId },

    /// Piece is live but its stored coordinates disagree with the grid
    #[error("Piece {id} is not at ({row}, {column})")]
    PieceNotOnBoard { id: PieceId, row: usize, column: usize },

    /// Layout or configured board shape can't form a playable grid
    #[error("Inconsistent board dimensions: expected {rows}x{columns}, got {message}")]
    InconsistentDimensions {
        rows: usize,
        columns: usize,
        message: String,
    },

    /// Promotion requested for a piece that is not a pawn on its last row
    #[error("Piece {id} is not eligible for promotion")]
    NotPromotable { id: PieceId },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
