//! Error types for form rendering.

use thiserror::Error;

use labelled_markup::MarkupError;

/// Form rendering errors.
///
/// These are usage errors and surface immediately; missing optional
/// data (captions, element ids, error collaborators) never errors and
/// is resolved through defaults instead.
#[derive(Debug, Error)]
pub enum FormsError {
    /// A field was rendered with neither literal content nor a render
    /// callback.
    #[error("a field needs either literal content or a render callback")]
    MissingContent,

    /// A markup-level usage error, such as a class value of an
    /// unsupported shape.
    #[error(transparent)]
    Markup(#[from] MarkupError),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormsError>;
