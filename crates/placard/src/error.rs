//! Error types for Placard operations.
//!
//! This module provides the main error type [`PlacardError`] which wraps
//! the error conditions that can occur while loading, validating, and
//! rendering a diagram.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::validate::ValidationError;

/// The main error type for Placard operations.
///
/// # Diagnostic Variants
///
/// `Schema` and `Validation` carry the document source so callers can point
/// at the offending location when reporting.
#[derive(Debug, Error)]
pub enum PlacardError {
    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to load `{}`: {source}", path.display())]
    Load { path: PathBuf, source: io::Error },

    #[error("{err}")]
    Schema { err: serde_json::Error, src: String },

    #[error("diagram has {} validation error(s)", errors.len())]
    Validation {
        errors: Vec<ValidationError>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// The scene could not be exported, e.g. a canvas without area.
    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for PlacardError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::Io(err) => Self::Io(err),
            error => Self::Export(Box::new(error)),
        }
    }
}

impl PlacardError {
    /// Create a new `Schema` error with the associated source text.
    pub fn new_schema_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Schema {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Validation` error with the associated source text.
    pub fn new_validation_error(errors: Vec<ValidationError>, src: impl Into<String>) -> Self {
        Self::Validation {
            errors,
            src: src.into(),
        }
    }

    /// Returns `true` for failures to read the document at all.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export;

    #[test]
    fn test_export_io_becomes_io_error() {
        let err: PlacardError =
            export::Error::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")).into();
        assert!(matches!(err, PlacardError::Io(_)));
        assert!(!err.is_load_failure());
    }

    #[test]
    fn test_render_failure_stays_export_error() {
        let err: PlacardError = export::Error::Render("no area".to_string()).into();
        assert!(matches!(err, PlacardError::Export(_)));
        assert!(err.to_string().contains("no area"));
    }
}
