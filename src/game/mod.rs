//! Chess variant game logic
//!
//! Pure rules plus the controller that drives a game. Nothing here renders
//! or reads input; a front end queries the controller and feeds it clicks or
//! resolved movements.
//!
//! # Module Organization
//!
//! - `types` - colors, piece kinds, ids and cells
//! - `components` - pieces and movements (raw candidates and resolved moves)
//! - `resources` - turn counters, capture tallies, castling rights,
//!   promotion, outcome and history
//! - `rules` - per-kind movement, attack scans, legality, the board snapshot
//! - `config` - variant parameters and hooks
//! - `events` - `AfterMove` / `Promote` listeners
//! - `controller` - turn flow, undo/redo, sandbox clones
//!
//! # Data Flow
//!
//! 1. `rules::candidate_moves` proposes `RawMove`s for a piece
//! 2. The shared legality filter and the configured hook trim them
//! 3. `resolve_movements` groups survivors by destination
//! 4. `Controller::execute_movement` applies one and records a snapshot

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod resources;
pub mod rules;
pub mod types;

pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::{GameError, GameResult};
