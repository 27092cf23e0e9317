//! Tree-walking evaluator.

pub mod env;
pub mod error;
pub mod interpreter;

pub use interpreter::Interpreter;
