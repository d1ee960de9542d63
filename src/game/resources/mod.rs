//! Game resources module
//!
//! Per-game state held by the board snapshot and the controller:
//!
//! - `turn` - side to move and move counters
//! - `captured` - capture tallies
//! - `castling` - castling rights and distances
//! - `promotion` - promotion eligibility and default choices
//! - `game_over` - game outcome
//! - `history` - snapshot history with undo/redo cursor

pub mod captured;
pub mod castling;
pub mod game_over;
pub mod history;
pub mod promotion;
pub mod turn;


pub use captured::CapturedPieces;
pub use castling::{CastlingConfig, CastlingRights, SideRights};
pub use game_over::GameState;
pub use history::History;
pub use promotion::{default_promotion_choices, is_promotable};
pub use turn::TurnState;
