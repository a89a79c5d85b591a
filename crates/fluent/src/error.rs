//! Errors from parsing textual chain expressions.

use thiserror::Error;

/// A chain expression that could not be parsed.
///
/// # Examples
///
/// ```rust
/// use fluent::{ChainError, parse_chain};
///
/// let err = parse_chain("tw.p(4").unwrap_err();
/// assert!(matches!(err, ChainError::Syntax { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The expression is malformed. `remainder` is the input from the point
    /// where parsing failed.
    #[error("chain syntax error at {remainder:?}")]
    Syntax { remainder: String },

    /// A complete expression was followed by more input.
    #[error("unexpected input after chain expression: {remainder:?}")]
    TrailingInput { remainder: String },
}

pub type Result<T> = std::result::Result<T, ChainError>;
