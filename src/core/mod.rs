//! Core module - application infrastructure around the rules
//!
//! Holds the variant settings file support used by the command-line tool.
//! The rules themselves live in [`crate::game`].

pub mod error;
pub mod settings_persistence;

pub use error::{SettingsError, SettingsResult};
pub use settings_persistence::{load_settings, save_settings, try_load_settings, VariantSettings};
