//! Rules and game-state core for chess variants
//!
//! See [`game::Controller`] for the entry point and [`game::ControllerConfig`]
//! for the variant hooks.

pub mod core;
pub mod game;

pub use game::{Controller, ControllerConfig, GameError, GameResult};
