use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtomError {
    #[error("Theme error: {0}")]
    Theme(#[from] palette::PaletteError),

    #[error("Chain error: {0}")]
    Chain(#[from] fluent::ChainError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, AtomError>;
