pub mod ast;
pub mod builtins;
pub mod diagnostics;
pub mod environment;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod sl;
pub mod token;
pub mod value;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Reporter, Severity};
pub use sl::{Sl, SlError};
