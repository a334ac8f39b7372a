use std::fmt;

use miette::Severity as MietteSeverity;
use thiserror::Error;

/// Receives problems found while scanning and parsing.
///
/// Lines are 0-based, the same numbering tokens and AST nodes carry.
pub trait Reporter {
    fn report_error(&mut self, line: usize, message: &str);
    fn report_warning(&mut self, line: usize, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single reported problem.
///
/// Displays with a 1-based line, since that is what people expect to see in
/// an editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {severity}: {message}.", .line + 1)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

impl miette::Diagnostic for Diagnostic {
    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.severity {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }
}

/// Collects diagnostics in the order they were reported.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    had_error: bool,
}

impl DiagnosticCollector {
    pub fn new() -> DiagnosticCollector {
        DiagnosticCollector::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Clears the error flag. Diagnostics already collected are kept until
    /// they are taken.
    pub fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == severity)
            .count()
    }

    fn push(&mut self, severity: Severity, line: usize, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity,
            line,
            message: message.to_string(),
        });
    }
}

impl Reporter for DiagnosticCollector {
    fn report_error(&mut self, line: usize, message: &str) {
        self.push(Severity::Error, line, message);
        self.had_error = true;
    }

    fn report_warning(&mut self, line: usize, message: &str) {
        self.push(Severity::Warning, line, message);
    }
}
