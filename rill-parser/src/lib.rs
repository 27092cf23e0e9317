//! Lexical analysis and parsing for the rill language.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;
