//! Error types for Lantern
//!
//! Provides standardized error handling across the application.

use thiserror::Error;

/// Errors that can occur in Lantern
#[derive(Debug, Error)]
pub enum LanternError {
    /// Indexed access outside the option collection
    #[error("entry index {index} out of range (collection holds {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Launch errors (failed to start an application or editor)
    #[error("Launch error: {0}")]
    Launch(String),

    /// Window manager query errors
    #[error("Window query error: {0}")]
    WindowQuery(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Lantern operations
pub type LanternResult<T> = Result<T, LanternError>;
