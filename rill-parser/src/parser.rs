//! Recursive-descent parser with statement-boundary error recovery.

mod expr;
mod stmt;

use crate::ast::{Expr, FnDecl, Stmt};
use crate::lexer::Lexer;
use crate::token::{self, Token, TokenKind};
use rill_report::Reporter;
use std::mem;
use std::rc::Rc;

/// Internal, non-fatal signal raised on a grammar violation. It is caught
/// only by the whole-program loop, which synchronizes and keeps parsing, or
/// surfaces as `None` from the single-item entry points.
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Cached token for one-token lookahead.
    current: Token,
    /// The most recently consumed token.
    previous: Token,
    reporter: &'a dyn Reporter,
    had_error: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, reporter: &'a dyn Reporter) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source),
            current: Token::eof(1),
            previous: Token::eof(1),
            reporter,
            had_error: false,
        };
        parser.advance();
        parser
    }

    /// True once any lexical or grammar error has been reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Parses a whole program: a sequence of top-level declarations.
    ///
    /// A statement that fails to parse is reported and skipped by
    /// synchronizing to the next statement boundary, so one pass can surface
    /// several independent errors. The returned list holds only the
    /// statements that parsed successfully; callers must consult
    /// [`Self::had_error`] before evaluating them.
    pub fn parse_program(&mut self) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        while !self.check(TokenKind::Eof) {
            match self.parse_declaration() {
                Ok(stmt) => stmts.push(stmt),
                Err(ParseError) => self.synchronize(),
            }
        }
        stmts
    }

    /// Parses a single expression spanning the whole input.
    pub fn parse_expression(&mut self) -> Option<Expr> {
        let expr = self.parse_expr().ok()?;
        self.consume(TokenKind::Eof, "Expected end of input.").ok()?;
        Some(expr)
    }

    /// Parses a single statement spanning the whole input.
    pub fn parse_statement(&mut self) -> Option<Stmt> {
        let stmt = self.parse_declaration().ok()?;
        self.consume(TokenKind::Eof, "Expected end of input.").ok()?;
        Some(stmt)
    }
}

/// Parse utilities.
impl<'a> Parser<'a> {
    /// Moves to the next token, transparently reporting and skipping any
    /// error tokens produced by the lexer.
    fn advance(&mut self) {
        loop {
            let token = self.lexer.next_token();
            if token.kind == TokenKind::Error {
                self.had_error = true;
                self.reporter
                    .error(&format!("[Line {}] Error: {}", token.line, token.lexeme));
                continue;
            }
            self.previous = mem::replace(&mut self.current, token);
            return;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the next token, which must have the given kind, and returns
    /// it; otherwise reports `message` and raises a parse error.
    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.eat(kind) {
            Ok(self.previous.clone())
        } else {
            Err(self.error_at_current(message))
        }
    }

    fn consume_statement_semicolon(&mut self) -> ParseResult<()> {
        self.consume(TokenKind::Semicolon, "Expected ';' at end of statement.")?;
        Ok(())
    }

    fn error_at_current(&mut self, message: &str) -> ParseError {
        let token = self.current.clone();
        self.error_at(&token, message)
    }

    /// Reports a parse error against `token` and returns the signal for the
    /// caller to raise.
    fn error_at(&mut self, token: &Token, message: &str) -> ParseError {
        self.had_error = true;
        let location = if token.kind == TokenKind::Eof {
            "end"
        } else {
            token.lexeme.as_str()
        };
        self.reporter.error_at(token.line, location, message);
        ParseError
    }

    /// Discards tokens until just past a `;` or until the next token starts
    /// a statement. Lexical errors encountered here were either already
    /// reported or belong to discarded text, so this bypasses `advance`.
    fn synchronize(&mut self) {
        while !self.check(TokenKind::Eof) {
            self.previous = mem::replace(&mut self.current, self.lexer.next_token());

            if self.previous.kind == TokenKind::Semicolon {
                return;
            }
            if token::starts_statement(self.current.kind) {
                return;
            }
        }
    }
}
