//! Front end tying the parser and the evaluator together.

use log::debug;
use rill_interp::Interpreter;
use rill_parser::parser::Parser;
use rill_report::Reporter;
use std::fs;
use std::path::Path;

/// File extension source files must carry.
pub const SOURCE_EXTENSION: &str = "rill";

/// Runs sources against one long-lived interpreter, so successive REPL
/// lines share their global variables.
pub struct Driver<'a> {
    reporter: &'a dyn Reporter,
    interpreter: Interpreter<'a>,
}

impl<'a> Driver<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self {
            reporter,
            interpreter: Interpreter::new(reporter),
        }
    }

    /// Parses and evaluates `source`. Nothing is evaluated if any lexical
    /// or parse error was reported. Returns `true` if the source ran to
    /// completion.
    pub fn run(&mut self, source: &str) -> bool {
        let mut parser = Parser::new(source, self.reporter);
        let stmts = parser.parse_program();
        if parser.had_error() {
            debug!("skipping evaluation after parse errors");
            return false;
        }
        self.interpreter.interpret(&stmts)
    }

    /// Runs the program in the file at `path`, which must end in `.rill`.
    pub fn run_file(&mut self, path: &str) -> bool {
        if Path::new(path).extension().map(|ext| ext.to_str()) != Some(Some(SOURCE_EXTENSION)) {
            self.reporter
                .error(&format!("Not a .{} file.", SOURCE_EXTENSION));
            return false;
        }
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(_) => {
                self.reporter.error(&format!("File '{}' not found.", path));
                return false;
            }
        };
        self.run(&source)
    }
}
