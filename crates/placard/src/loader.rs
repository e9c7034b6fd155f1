//! Reading diagram documents.
//!
//! A document that cannot be read at all is a load failure
//! ([`PlacardError::Load`]). A document that reads but does not match the
//! schema is a [`PlacardError::Schema`] error carrying the source text.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{PlacardError, config::StyleConfig, model::Diagram, schema::DiagramDocument, validate};

/// A parsed document together with the text it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    document: DiagramDocument,
    source: String,
}

impl LoadedDocument {
    pub fn document(&self) -> &DiagramDocument {
        &self.document
    }

    /// The original JSON text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Validates the document into a [`Diagram`], filling a missing
    /// background from `style`.
    ///
    /// # Errors
    ///
    /// [`PlacardError::Validation`] with every problem found in the document.
    pub fn validate(&self, style: &StyleConfig) -> Result<Diagram, PlacardError> {
        validate::validate(&self.document, style.background_color())
            .map_err(|errors| PlacardError::new_validation_error(errors, self.source.clone()))
    }
}

/// Reads and parses the document at `path`.
///
/// # Errors
///
/// [`PlacardError::Load`] when the file cannot be read, and
/// [`PlacardError::Schema`] when its content is not a valid document.
pub fn load_path(path: impl AsRef<Path>) -> Result<LoadedDocument, PlacardError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading diagram document");

    let source = fs::read_to_string(path).map_err(|source| PlacardError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    load_str(source)
}

/// Parses a document from JSON text.
///
/// # Errors
///
/// [`PlacardError::Schema`] when the text is not a valid document.
pub fn load_str(source: impl Into<String>) -> Result<LoadedDocument, PlacardError> {
    let source = source.into();
    match serde_json::from_str::<DiagramDocument>(&source) {
        Ok(document) => {
            debug!(kind = document.diagram.name(); "Document parsed");
            Ok(LoadedDocument { document, source })
        }
        Err(err) => Err(PlacardError::new_schema_error(err, source)),
    }
}

#[cfg(test)]
mod tests {
    use placard_core::color::Color;

    use super::*;
    use crate::schema::DiagramKind;

    #[test]
    fn test_load_str_keeps_source() {
        let src = r#"{ "diagram": "funnel", "taskStages": [] }"#;
        let loaded = load_str(src).unwrap();
        assert_eq!(loaded.source(), src);
        assert_eq!(loaded.document().diagram, DiagramKind::Funnel);
    }

    #[test]
    fn test_syntax_error_is_schema_error() {
        let err = load_str("{ \"diagram\": ").unwrap_err();
        match err {
            PlacardError::Schema { err, src } => {
                assert_eq!(err.line(), 1);
                assert_eq!(src, "{ \"diagram\": ");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_uses_configured_background() {
        let loaded = load_str(r#"{ "diagram": "funnel", "taskStages": [] }"#).unwrap();
        let style = StyleConfig::new(Color::new("ivory").ok(), "Arial");
        let diagram = loaded.validate(&style).unwrap();
        assert_eq!(diagram.header().background, Color::new("ivory").unwrap());
    }

    #[test]
    fn test_validate_keeps_source_on_error() {
        let src = r#"{ "diagram": "funnel", "taskStages": [ { "name": "", "color": "nope" } ] }"#;
        let err = load_str(src).unwrap().validate(&StyleConfig::default()).unwrap_err();
        match err {
            PlacardError::Validation { errors, src: kept } => {
                assert_eq!(errors.len(), 2);
                assert_eq!(kept, src);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_load_failure() {
        let err = load_path("definitely/not/here.json").unwrap_err();
        assert!(err.is_load_failure());
    }
}
