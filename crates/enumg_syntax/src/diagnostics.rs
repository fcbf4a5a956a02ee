//! Diagnostics for malformed description lines.

use miette::Diagnostic;
use thiserror::Error;

/// A description line the reader skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxDiagnostic {
    #[error("line {line}: section header is missing its closing `]`")]
    #[diagnostic(code(enumg::syntax::unclosed_section), help("write section headers as `[Name]`"))]
    UnclosedSection { line: usize },

    #[error("line {line}: expected `key=value` or `key: value`")]
    #[diagnostic(code(enumg::syntax::missing_separator))]
    MissingSeparator { line: usize },
}
