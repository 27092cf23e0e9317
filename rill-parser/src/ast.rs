//! Syntax tree definitions.
//!
//! Nodes are immutable once parsed and compare structurally, which the
//! parser tests rely on.

use crate::token::Token;
use rust_decimal::Decimal;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    NumberLit(Decimal),
    StringLit(String),
    BoolLit(bool),
    /// An explicitly parenthesized expression. Evaluation simply unwraps it;
    /// the node exists so tooling can reproduce the source shape.
    Group(Box<Expr>),
    Unary {
        op: Token,
        arg: Box<Expr>,
    },
    Binary {
        lhs: Box<Expr>,
        op: Token,
        rhs: Box<Expr>,
    },
    /// A variable reference (e.g. `foo`).
    Variable(Token),
    Assign {
        ident: Token,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    ExprStmt(Expr),
    PrintStmt(Expr),
    VarDeclaration {
        ident: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    /// Declarations are shared with the function values created from them.
    FnDeclaration(Rc<FnDecl>),
    Return {
        keyword: Token,
        expr: Option<Expr>,
    },
}

/// A function declaration: name, parameters and body statements.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub ident: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}
