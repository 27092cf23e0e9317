//! The token representation and construction helpers.

use rust_decimal::Decimal;

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // single-character operators
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Equal,
    Less,
    Greater,

    // double-character operators
    LessEqual,
    GreaterEqual,
    EqualEqual,
    BangEqual,
    AmpAmp,
    PipePipe,

    // structural punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Semicolon,

    // literals and identifiers
    Number,
    Str,
    Identifier,

    // keywords
    True,
    False,
    Var,
    Print,
    If,
    Else,
    While,
    For,
    Fn,
    Return,

    // sentinels
    Error,
    Eof,
}

impl TokenKind {
    /// Returns the left/right binding power for infix operators, or `None`
    /// if the token cannot start an infix position. Assignment is
    /// right-associative and binds loosest.
    pub(crate) fn binop_bp(self) -> Option<(u8, u8)> {
        match self {
            TokenKind::Equal => Some((3, 2)),
            TokenKind::PipePipe => Some((4, 5)),
            TokenKind::AmpAmp => Some((6, 7)),
            TokenKind::EqualEqual | TokenKind::BangEqual => Some((8, 9)),
            TokenKind::Less | TokenKind::Greater | TokenKind::LessEqual | TokenKind::GreaterEqual => {
                Some((10, 11))
            }
            TokenKind::Plus | TokenKind::Minus => Some((12, 13)),
            TokenKind::Star | TokenKind::Slash => Some((14, 15)),
            _ => None,
        }
    }
}

/// Classifies an identifier lexeme against the fixed keyword table.
pub fn keyword(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "var" => TokenKind::Var,
        "print" => TokenKind::Print,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "fn" => TokenKind::Fn,
        "return" => TokenKind::Return,
        _ => return None,
    };
    Some(kind)
}

/// True for the keywords that begin a new statement; the parser resumes at
/// one of these after an error.
pub fn starts_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Var
            | TokenKind::Print
            | TokenKind::If
            | TokenKind::While
            | TokenKind::For
            | TokenKind::Fn
            | TokenKind::Return
    )
}

/// The literal payload carried by number and string tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(Decimal),
    Str(String),
}

/// One lexed token. Immutable once produced.
///
/// For [`TokenKind::Error`] tokens the `lexeme` holds the diagnostic message
/// rather than source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            literal: None,
            line,
        }
    }

    /// A token whose lexeme is fixed by its kind: operators, punctuation and
    /// keywords.
    pub fn symbol(kind: TokenKind, line: usize) -> Self {
        Self::new(kind, symbol_lexeme(kind), line)
    }

    pub fn identifier(name: impl Into<String>, line: usize) -> Self {
        Self::new(TokenKind::Identifier, name, line)
    }

    pub fn number(lexeme: impl Into<String>, value: Decimal, line: usize) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind: TokenKind::Number,
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    /// A string token; the lexeme keeps the surrounding quotes, the literal
    /// holds the verbatim content between them.
    pub fn string(value: impl Into<String>, line: usize) -> Self {
        let value = value.into();
        Self {
            lexeme: format!("\"{}\"", value),
            kind: TokenKind::Str,
            literal: Some(Literal::Str(value.clone())),
            line,
        }
    }

    pub fn error(message: impl Into<String>, line: usize) -> Self {
        Self::new(TokenKind::Error, message, line)
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// The numeric value carried by a `Number` token.
    pub fn number_value(&self) -> Option<Decimal> {
        match self.literal {
            Some(Literal::Number(value)) => Some(value),
            _ => None,
        }
    }

    /// The unquoted content carried by a `Str` token.
    pub fn string_value(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Str(value)) => Some(value),
            _ => None,
        }
    }
}

fn symbol_lexeme(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Bang => "!",
        TokenKind::Equal => "=",
        TokenKind::Less => "<",
        TokenKind::Greater => ">",
        TokenKind::LessEqual => "<=",
        TokenKind::GreaterEqual => ">=",
        TokenKind::EqualEqual => "==",
        TokenKind::BangEqual => "!=",
        TokenKind::AmpAmp => "&&",
        TokenKind::PipePipe => "||",
        TokenKind::LeftParen => "(",
        TokenKind::RightParen => ")",
        TokenKind::LeftBrace => "{",
        TokenKind::RightBrace => "}",
        TokenKind::Comma => ",",
        TokenKind::Semicolon => ";",
        TokenKind::True => "true",
        TokenKind::False => "false",
        TokenKind::Var => "var",
        TokenKind::Print => "print",
        TokenKind::If => "if",
        TokenKind::Else => "else",
        TokenKind::While => "while",
        TokenKind::For => "for",
        TokenKind::Fn => "fn",
        TokenKind::Return => "return",
        // Literal and sentinel tokens carry their own lexemes.
        TokenKind::Number
        | TokenKind::Str
        | TokenKind::Identifier
        | TokenKind::Error
        | TokenKind::Eof => "",
    }
}
