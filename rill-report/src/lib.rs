//! Output and diagnostic reporting.

use console::style;
use std::cell::RefCell;

/// The sink every observable effect of a rill program flows through.
///
/// The core interpreter performs no I/O of its own; program output and
/// diagnostics both exit through this trait, so substituting an
/// implementation makes whole runs deterministic under test.
pub trait Reporter {
    /// Emit one line of program output.
    fn output(&self, message: &str);

    /// Emit one diagnostic line.
    fn error(&self, message: &str);

    /// Emit a diagnostic annotated with a source location.
    /// `location` is the offending lexeme, or `"end"` at end of input.
    fn error_at(&self, line: usize, location: &str, message: &str) {
        self.error(&format!(
            "[Line {}] Error at '{}': {}",
            line, location, message
        ));
    }
}

/// Writes program output to stdout and diagnostics, in red, to stderr.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn output(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", style(message).red());
    }
}

/// Accumulates everything it receives. For testing purposes only.
///
/// This uses the interior mutability pattern so that call sites keep the
/// same shared-reference ergonomics as [`ConsoleReporter`].
#[derive(Default)]
pub struct CapturingReporter {
    outputs: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl CapturingReporter {
    /// Create an empty `CapturingReporter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every output line received so far, in order.
    pub fn outputs(&self) -> Vec<String> {
        self.outputs.borrow().clone()
    }

    /// Every diagnostic line received so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Reporter for CapturingReporter {
    fn output(&self, message: &str) {
        self.outputs.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
