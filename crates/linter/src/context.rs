//! Lint context for rule execution

use std::path::Path;

use oxc_span::SourceType;

use crate::Diagnostic;

/// Context passed to rules during linting
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/JSX etc)
    source_type: SourceType,
    /// Path of the file being linted, when known
    file_path: Option<&'a Path>,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            file_path: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_file_path(mut self, file_path: &'a Path) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Check if the source is JSX
    pub fn is_jsx(&self) -> bool {
        self.source_type.is_jsx()
    }

    /// Get the path of the file being linted
    pub fn file_path(&self) -> Option<&'a Path> {
        self.file_path
    }

    /// Base name of the file being linted
    pub fn file_name(&self) -> Option<&'a str> {
        self.file_path?.file_name()?.to_str()
    }

    /// Base name of the directory containing the file being linted
    pub fn dir_name(&self) -> Option<&'a str> {
        self.file_path?.parent()?.file_name()?.to_str()
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Report a batch of diagnostics
    pub fn report_all(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: oxc_span::Span) -> &'a str {
        &self.source_text[span.start as usize..span.end as usize]
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Get reference to diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
