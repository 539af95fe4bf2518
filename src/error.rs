//! Error types for the highlight pipeline

use thiserror::Error;

/// Errors a highlight render can fail with
///
/// None of these are fatal to the widget: the editable surface stays
/// authoritative and the overlay falls back to unhighlighted text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The engine has no grammar for this language identifier
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The engine has no theme with this identifier
    #[error("unsupported theme: {0}")]
    UnsupportedTheme(String),

    /// Any other engine-level failure
    #[error("render failed: {0}")]
    RenderFailure(String),
}

/// Result type for highlight operations
pub type Result<T> = std::result::Result<T, RenderError>;
