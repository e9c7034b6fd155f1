//! Error adapter for converting PlacardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A [`PlacardError::Validation`] carries every problem found in the document;
//! each one is rendered independently and labelled at its JSON path when that
//! path can be found in the source.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use placard::{PlacardError, validate::ValidationError};

/// Adapter for a single validation problem.
pub struct ValidationAdapter<'a> {
    error: &'a ValidationError,
    src: &'a str,
    span: Option<SourceSpan>,
}

impl<'a> ValidationAdapter<'a> {
    pub fn new(error: &'a ValidationError, src: &'a str) -> Self {
        Self {
            error,
            src,
            span: locate_path(src, error.path()),
        }
    }

    /// Location of the offending value in the source, if it could be found.
    pub fn span(&self) -> Option<SourceSpan> {
        self.span
    }
}

impl fmt::Debug for ValidationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationAdapter")
            .field("error", &self.error)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for ValidationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error, f)
    }
}

impl std::error::Error for ValidationAdapter<'_> {}

impl MietteDiagnostic for ValidationAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("placard::validation"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let field = self.error.field();
        if field == "color" || field == "background" || field.ends_with("Color") {
            Some(Box::new("colors are CSS color names or hex values such as `#3498db`"))
        } else {
            None
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.span.map(|_| &self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(self.error.message().to_string()),
            span,
        ))))
    }
}

/// Adapter for a document that is not valid JSON or does not match the schema.
pub struct SchemaAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> SchemaAdapter<'a> {
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Byte span of the position serde_json reported.
    pub fn span(&self) -> SourceSpan {
        let offset = line_column_offset(self.src, self.err.line(), self.err.column());
        let len = self.src[offset..].chars().next().map_or(0, char::len_utf8);
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for SchemaAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SchemaAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid diagram document")
    }
}

impl std::error::Error for SchemaAdapter<'_> {}

impl MietteDiagnostic for SchemaAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("placard::schema"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.err.is_data() {
            Some(Box::new(
                "`diagram` must be \"framework\" or \"funnel\" and fields must match that kind",
            ))
        } else {
            None
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(self.err.to_string()),
            self.span(),
        ))))
    }
}

/// Adapter for [`PlacardError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a PlacardError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PlacardError::Io(_) => "placard::io",
            PlacardError::Load { .. } => "placard::load",
            PlacardError::Schema { .. } => "placard::schema",
            PlacardError::Validation { .. } => "placard::validation",
            PlacardError::Config(_) => "placard::config",
            PlacardError::Export(_) => "placard::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One validation problem, located in the source when possible.
    Validation(ValidationAdapter<'a>),
    /// A JSON syntax or schema error.
    Schema(SchemaAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Validation(v) => v,
            Reportable::Schema(s) => s,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Error(e) => e.source(),
            _ => None,
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

/// Convert a [`PlacardError`] into a list of reportable errors.
///
/// For [`PlacardError::Validation`], this returns one [`Reportable`] for
/// each problem. For other error variants, this returns a single [`Reportable`].
pub fn to_reportables(err: &PlacardError) -> Vec<Reportable<'_>> {
    match err {
        PlacardError::Validation { errors, src } => errors
            .iter()
            .map(|e| Reportable::Validation(ValidationAdapter::new(e, src)))
            .collect(),
        PlacardError::Schema { err, src } => vec![Reportable::Schema(SchemaAdapter::new(err, src))],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Finds the key of a JSON path such as `columns[1].processes[0].color` in `src`.
///
/// Keys are matched in order; an index `[n]` skips to the `n`-th following
/// occurrence of the next key. Good enough for documents where sibling array
/// items share their keys.
fn locate_path(src: &str, path: &str) -> Option<SourceSpan> {
    let mut cursor = 0;
    let mut skip = 0;
    let mut found = None;

    for segment in path.split('.') {
        let (key, index) = match segment.split_once('[') {
            Some((key, rest)) => (key, rest.trim_end_matches(']').parse::<usize>().ok()),
            None => (segment, None),
        };
        let needle = format!("\"{key}\"");
        for _ in 0..=skip {
            let start = cursor + src.get(cursor..)?.find(&needle)?;
            found = Some(SourceSpan::new(start.into(), needle.len()));
            cursor = start + needle.len();
        }
        skip = index.unwrap_or(0);
    }

    found
}

/// Byte offset of a 1-based line and column, clamped to the source.
fn line_column_offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(src.len());
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
