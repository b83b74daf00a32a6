//! Cross-cutting error types for Galley.
//!
//! Domain-specific errors (`DatabaseError`, `ReportError`, `ConfigError`) are
//! defined in their respective crates; `CoreError` covers validation that
//! happens on shared payload types before they reach a specific layer.

use thiserror::Error;

/// Errors raised by core-level validation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required payload field is missing or empty.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
