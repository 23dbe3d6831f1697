//! Error types for markup construction.

use thiserror::Error;

/// Markup-specific errors.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// A class attribute value could not be interpreted as class names.
    #[error("invalid class value: {0}")]
    InvalidClassValue(String),
}

/// Result type alias for markup operations.
pub type Result<T> = std::result::Result<T, MarkupError>;
