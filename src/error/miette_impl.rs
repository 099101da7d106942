//! Miette integration for pretty error reporting.

use std::fmt::Display;

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ErrorKind, LineSourceError};

/// A line source error rendered for miette, with a code and help text
/// chosen by its [`ErrorKind`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LineDiagnostic {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<std::io::Error>,
}

impl LineDiagnostic {
    fn code_str(&self) -> &'static str {
        match self.kind {
            ErrorKind::UnsupportedEncoding => "linesource::unsupported_encoding",
            ErrorKind::IoFailure => "linesource::io_failure",
            ErrorKind::InvalidArgument => "linesource::invalid_argument",
        }
    }

    fn help_text(&self) -> &'static str {
        match self.kind {
            ErrorKind::UnsupportedEncoding => {
                "Use an ASCII-compatible WHATWG label such as \"utf-8\", \"windows-1252\" or \"shift_jis\""
            }
            ErrorKind::IoFailure => {
                "Check that the input exists, is readable and matches the encoding"
            }
            ErrorKind::InvalidArgument => "Line counts must be non-negative",
        }
    }
}

impl Diagnostic for LineDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.help_text()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }
}

impl From<LineSourceError> for LineDiagnostic {
    fn from(e: LineSourceError) -> Self {
        let kind = e.kind();
        let message = e.to_string();
        let source = match e {
            LineSourceError::Io { source, .. } => Some(source),
            _ => None,
        };
        LineDiagnostic {
            kind,
            message,
            source,
        }
    }
}

impl From<LineSourceError> for miette::Report {
    fn from(e: LineSourceError) -> Self {
        miette::Report::new(LineDiagnostic::from(e))
    }
}
