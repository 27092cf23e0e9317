//! Converts raw source text into a sequence of [`Token`]s.

use crate::token::{self, Token, TokenKind};

/// A cursor over source text; call [`Lexer::next_token`] repeatedly until it
/// returns the [`TokenKind::Eof`] sentinel.
///
/// The lexer never fails: malformed input produces [`TokenKind::Error`]
/// tokens whose lexeme is the diagnostic message, which the parser reports
/// when it advances over them.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the first character of the token being scanned.
    start: usize,
    /// Byte offset of the next character to scan.
    current: usize,
    /// Line the lexer is currently on.
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the next token in the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.current;

        let c = match self.peek() {
            Some(c) => c,
            None => return Token::eof(self.line),
        };
        self.advance();

        if c.is_ascii_digit() {
            return self.number();
        }
        if c.is_ascii_alphabetic() || c == '_' {
            return self.identifier();
        }

        match c {
            '+' => self.symbol(TokenKind::Plus),
            '-' => self.symbol(TokenKind::Minus),
            '*' => self.symbol(TokenKind::Star),
            '/' => self.symbol(TokenKind::Slash),
            '(' => self.symbol(TokenKind::LeftParen),
            ')' => self.symbol(TokenKind::RightParen),
            '{' => self.symbol(TokenKind::LeftBrace),
            '}' => self.symbol(TokenKind::RightBrace),
            ',' => self.symbol(TokenKind::Comma),
            ';' => self.symbol(TokenKind::Semicolon),

            '!' => {
                if self.eat('=') {
                    self.symbol(TokenKind::BangEqual)
                } else {
                    self.symbol(TokenKind::Bang)
                }
            }
            '=' => {
                if self.eat('=') {
                    self.symbol(TokenKind::EqualEqual)
                } else {
                    self.symbol(TokenKind::Equal)
                }
            }
            '<' => {
                if self.eat('=') {
                    self.symbol(TokenKind::LessEqual)
                } else {
                    self.symbol(TokenKind::Less)
                }
            }
            '>' => {
                if self.eat('=') {
                    self.symbol(TokenKind::GreaterEqual)
                } else {
                    self.symbol(TokenKind::Greater)
                }
            }
            '&' => {
                if self.eat('&') {
                    self.symbol(TokenKind::AmpAmp)
                } else {
                    self.error("Unexpected character '&'.")
                }
            }
            '|' => {
                if self.eat('|') {
                    self.symbol(TokenKind::PipePipe)
                } else {
                    self.error("Unexpected character '|'.")
                }
            }

            '"' => self.string(),

            _ => self.error(format!("Unexpected character '{}'.", c)),
        }
    }

    fn number(&mut self) -> Token {
        self.consume_digits();

        // Fractional part, if present. A '.' must be followed by digits.
        if self.peek() == Some('.') {
            self.advance();
            if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                return self.error("Digits are expected after '.' for numbers.");
            }
            self.consume_digits();
        }

        let lexeme = &self.source[self.start..self.current];
        // A run of digits with at most one interior '.' parses; a literal
        // too long for the decimal mantissa falls back to zero.
        let value = lexeme.parse().unwrap_or_default();
        Token::number(lexeme, value, self.line)
    }

    fn consume_digits(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scans a string, which may span multiple lines. Content between the
    /// quotes is taken verbatim; there is no escape processing.
    fn string(&mut self) -> Token {
        let opening_line = self.line;
        loop {
            match self.peek() {
                None => return self.error("Unterminated string."),
                Some('"') => break,
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }
        self.advance(); // closing quote

        let value = &self.source[self.start + 1..self.current - 1];
        Token::string(value, opening_line)
    }

    fn identifier(&mut self) -> Token {
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic() || c == '_') {
            self.advance();
        }

        let lexeme = &self.source[self.start..self.current];
        match token::keyword(lexeme) {
            Some(kind) => Token::new(kind, lexeme, self.line),
            None => Token::identifier(lexeme, self.line),
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') => self.advance(),
                Some('\n') => {
                    self.advance();
                    self.line += 1;
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// Step past the character `peek` returned.
    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.current += c.len_utf8();
        }
    }

    /// Consume `expected` if it is the next character.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn symbol(&self, kind: TokenKind) -> Token {
        Token::symbol(kind, self.line)
    }

    fn error(&self, message: impl Into<String>) -> Token {
        Token::error(message, self.line)
    }
}
