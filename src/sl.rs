use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::{
    diagnostics::{Diagnostic, DiagnosticCollector, Reporter},
    environment::Environment,
    interpreter::{Interpreter, RuntimeError},
    parser::Parser,
    scanner::Scanner,
    value::RuntimeValue,
};

#[derive(Debug, Error, MietteDiagnostic)]
pub enum SlError {
    #[error("could not read '{path}'")]
    #[diagnostic(code(sl::io))]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("found {count} error(s) in the source")]
    #[diagnostic(code(sl::syntax))]
    Static { count: usize },

    #[error("runtime error: {0}")]
    #[diagnostic(code(sl::runtime))]
    Runtime(#[from] RuntimeError),
}

/// A session: one interpreter plus the diagnostics reported while feeding
/// it source text. Top-level bindings live as long as the session.
pub struct Sl<'g, W: Write> {
    collector: DiagnosticCollector,
    interpreter: Interpreter<'g, W>,
}

impl<'g, W: Write> Sl<'g, W> {
    pub fn new(globals: &'g Environment<'g>, out: W) -> Sl<'g, W> {
        Sl {
            collector: DiagnosticCollector::new(),
            interpreter: Interpreter::new(globals, out),
        }
    }

    pub fn run_file(&mut self, path: &Path) -> Result<(), SlError> {
        let content = fs::read_to_string(path).map_err(|source| SlError::Io {
            path: path.display().to_string(),
            source,
        })?;

        self.run(&content)
    }

    /// Scans, parses and evaluates `source`. Evaluation is skipped when
    /// scanning or parsing reported an error for this input. Earlier errors
    /// in the session do not block it; `had_error` stays set until `reset`.
    pub fn run(&mut self, source: &str) -> Result<(), SlError> {
        let errors_before = self.collector.error_count();

        let tokens = Scanner::new(&mut self.collector, source).scan_tokens();
        if self.collector.error_count() > errors_before {
            return Err(self.static_error(errors_before));
        }

        let statements = Parser::new(&mut self.collector, tokens).parse();
        if self.collector.error_count() > errors_before {
            return Err(self.static_error(errors_before));
        }

        self.interpreter.interpret(&statements).map_err(|err| {
            self.collector.report_error(err.line, &err.message);
            SlError::Runtime(err)
        })
    }

    pub fn define(&mut self, name: &str, value: RuntimeValue) -> bool {
        self.interpreter.define(name, value)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.collector.diagnostics()
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.collector.take()
    }

    pub fn had_error(&self) -> bool {
        self.collector.had_error()
    }

    /// Clears the error flag so the next input is evaluated again.
    pub fn reset(&mut self) {
        self.collector.reset();
    }

    pub fn output(&self) -> &W {
        self.interpreter.output()
    }

    fn static_error(&self, errors_before: usize) -> SlError {
        SlError::Static {
            count: self.collector.error_count() - errors_before,
        }
    }
}
