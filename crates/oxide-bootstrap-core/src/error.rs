//! Error types for parsing style options.

use thiserror::Error;

/// Errors raised when a style token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The string is not a known color variant.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// The string is not a known size.
    #[error("unknown size: {0}")]
    UnknownSize(String),

    /// The string is not a known margin.
    #[error("unknown margin: {0}")]
    UnknownMargin(String),

    /// The string is not a known validation state.
    #[error("unknown validation state: {0}")]
    UnknownValidationState(String),
}

/// Result type alias for style parsing.
pub type Result<T> = std::result::Result<T, StyleError>;
