//! Chess game components module
//!
//! Components are pure data structures with no logic beyond small helpers.
//! Organized by domain: pieces and movements.

pub mod movement;
pub mod piece;


// Re-export all components for convenience
pub use movement::*;
pub use piece::*;
