//! Error types for theme state management.

use thiserror::Error;

/// Errors that can occur while managing theme state.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Accent color input does not match `#RRGGBB`.
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    /// Palette index outside the configured palette.
    #[error("palette option {0} does not exist")]
    UnknownPaletteOption(usize),

    /// The storage backend refused the operation (disabled storage, exhausted
    /// quota) without an underlying I/O or serialization error.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// I/O error from a file-backed store or config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values are out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using [`ThemeError`].
pub type Result<T> = std::result::Result<T, ThemeError>;
