//! Runtime values.

use rill_parser::ast::FnDecl;
use rust_decimal::Decimal;
use std::fmt;
use std::rc::Rc;

/// A user-defined function. Just a shared handle on its declaration; two
/// `Function` values compare equal only when they are the same declaration.
#[derive(Clone)]
pub struct Function {
    declaration: Rc<FnDecl>,
}

impl Function {
    pub fn new(declaration: Rc<FnDecl>) -> Self {
        Self { declaration }
    }

    pub fn name(&self) -> &str {
        &self.declaration.ident.lexeme
    }

    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    pub fn declaration(&self) -> &Rc<FnDecl> {
        &self.declaration
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.declaration, &other.declaration)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}

#[derive(Clone, PartialEq)]
pub enum Value {
    Number(Decimal),
    Str(Rc<str>),
    Bool(bool),
    Function(Function),
    Null,
}

impl Value {
    /// Attempts to cast the `Value` into a `&str` or `None` if wrong type.
    pub fn cast_to_str(&self) -> Option<&str> {
        match self {
            Self::Str(string) => Some(string),
            _ => None,
        }
    }

    pub fn cast_to_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(val) => Some(*val),
            _ => None,
        }
    }

    pub fn cast_to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(val) => Some(*val),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(val) => write!(f, "{}", val),
            Value::Str(val) => write!(f, "{}", val),
            Value::Bool(val) => write!(f, "{}", val),
            Value::Function(val) => write!(f, "{}", val),
            Value::Null => write!(f, "null"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
