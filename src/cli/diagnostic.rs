//! Syntax error rendering using miette.
//!
//! Batch mode shows each syntax error against the source file: the offending line, a pointer at the token, and a
//! short label saying what was wrong there.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use lot_syntax::diagnostics::{ParseErrors, SyntaxError, SyntaxErrorKind};
use miette::{Diagnostic, GraphicalReportHandler, SourceSpan};

/// A syntax error with source context.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(lot::syntax))]
pub struct SyntaxDiagnostic {
    pub message: String,
    #[source_code]
    pub src: miette::NamedSource<String>,
    #[label("{label}")]
    pub span: SourceSpan,
    pub label: String,
}

impl SyntaxDiagnostic {
    pub fn from_syntax_error(error: &SyntaxError, source_path: &str, source: &str) -> Self {
        let label = match error.kind {
            SyntaxErrorKind::Expected(kind) => format!("expected {kind} here"),
            SyntaxErrorKind::UnexpectedToken => "not a statement keyword".to_string(),
            SyntaxErrorKind::InvalidNumber => "does not fit in a 64-bit integer".to_string(),
        };

        Self {
            message: error.message.clone(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: (error.span.start, error.span.len()).into(),
            label,
        }
    }
}

/// Render every error in `errors` for the terminal.
pub fn render(errors: &ParseErrors, source_path: &str, source: &str) -> String {
    render_with(&GraphicalReportHandler::new(), errors, source_path, source)
}

fn render_with(handler: &GraphicalReportHandler, errors: &ParseErrors, source_path: &str, source: &str) -> String {
    let mut out = String::new();
    for error in errors {
        let diagnostic = SyntaxDiagnostic::from_syntax_error(error, source_path, source);
        if handler.render_report(&mut out, &diagnostic).is_err() {
            out.push_str(&diagnostic.message);
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}
