//! Error types for theme configuration.

use thiserror::Error;

/// Errors that can occur while loading a theme configuration.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// The theme JSON could not be deserialized.
    #[error("invalid theme configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A theme name that cannot be used inside a `[data-theme]` selector.
    #[error("invalid theme name: {0:?}")]
    InvalidName(String),
}
