//! Error types for core module
//!
//! Covers reading and writing variant settings files.

use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
