//! Statement execution and expression evaluation.

use crate::env::{ScopeChain, ScopeId};
use crate::error::{RuntimeError, Unwind};
use log::debug;
use rill_parser::ast::{Expr, Stmt};
use rill_parser::token::{Token, TokenKind};
use rill_report::Reporter;
use rill_value::{Function, Value};
use rust_decimal::Decimal;

pub struct Interpreter<'a> {
    scopes: ScopeChain,
    /// Scope new variables are defined in and lookups start from.
    current: ScopeId,
    /// 0 outside any call; a top-level `return` is a runtime error.
    call_depth: usize,
    reporter: &'a dyn Reporter,
    had_runtime_error: bool,
}

impl<'a> Interpreter<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        let scopes = ScopeChain::new();
        let current = scopes.global();
        Self {
            scopes,
            current,
            call_depth: 0,
            reporter,
            had_runtime_error: false,
        }
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Executes the statements in order, stopping at the first runtime
    /// error. Returns `false` if one occurred.
    pub fn interpret(&mut self, stmts: &[Stmt]) -> bool {
        for stmt in stmts {
            if let Err(unwind) = self.execute(stmt) {
                let error = match unwind {
                    Unwind::Error(error) => error,
                    // `return` only unwinds this far when there is no
                    // enclosing call to catch it, which `execute` already
                    // rejects.
                    Unwind::Return(_) => unreachable!("return caught at call boundary"),
                };
                self.had_runtime_error = true;
                self.reporter.error(&format!("Runtime Error: {}", error));
                return false;
            }
        }
        true
    }

    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        match stmt {
            Stmt::ExprStmt(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::PrintStmt(expr) => {
                let value = self.evaluate(expr)?;
                self.reporter.output(&value.to_string());
            }
            Stmt::VarDeclaration { ident, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                debug!("define '{}' = {:?}", ident.lexeme, value);
                self.scopes.define(self.current, &ident.lexeme, value)?;
            }
            Stmt::Block(body) => self.execute_block(body)?,
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate_condition(condition)? {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate_condition(condition)? {
                    self.execute(body)?;
                }
            }
            Stmt::FnDeclaration(declaration) => {
                let function = Function::new(declaration.clone());
                self.scopes.define(
                    self.current,
                    &declaration.ident.lexeme,
                    Value::Function(function),
                )?;
            }
            Stmt::Return { expr, .. } => {
                if self.call_depth == 0 {
                    return Err(RuntimeError::TopLevelReturn.into());
                }
                let value = match expr {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                return Err(Unwind::Return(value));
            }
        }
        Ok(())
    }

    /// Runs a block in a fresh scope nested in the current one. The scope is
    /// discarded however the block exits.
    fn execute_block(&mut self, body: &[Stmt]) -> Result<(), Unwind> {
        let mark = self.scopes.mark();
        let enclosing = self.current;
        self.current = self.scopes.push(enclosing);

        let result = body.iter().try_for_each(|stmt| self.execute(stmt));

        self.current = enclosing;
        self.scopes.truncate(mark);
        result
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, Unwind> {
        Ok(match expr {
            Expr::NumberLit(value) => Value::Number(*value),
            Expr::StringLit(value) => Value::Str(value.as_str().into()),
            Expr::BoolLit(value) => Value::Bool(*value),
            Expr::Group(inner) => self.evaluate(inner)?,
            Expr::Unary { op, arg } => self.evaluate_unary(op, arg)?,
            Expr::Binary { lhs, op, rhs } => self.evaluate_binary(lhs, op, rhs)?,
            Expr::Variable(ident) => self.scopes.get(self.current, &ident.lexeme)?,
            Expr::Assign { ident, value } => {
                let value = self.evaluate(value)?;
                self.scopes
                    .assign(self.current, &ident.lexeme, value.clone())?;
                value
            }
            Expr::Call { callee, args } => self.evaluate_call(callee, args)?,
        })
    }

    fn evaluate_unary(&mut self, op: &Token, arg: &Expr) -> Result<Value, Unwind> {
        let arg = self.evaluate(arg)?;
        let value = match op.kind {
            TokenKind::Minus => {
                let number = arg.cast_to_number().ok_or(RuntimeError::NegateNonNumber)?;
                Value::Number(-number)
            }
            TokenKind::Bang => {
                let bool = arg.cast_to_bool().ok_or(RuntimeError::NotNonBool)?;
                Value::Bool(!bool)
            }
            _ => unreachable!("not an unary operator"),
        };
        Ok(value)
    }

    fn evaluate_binary(&mut self, lhs: &Expr, op: &Token, rhs: &Expr) -> Result<Value, Unwind> {
        // The logical operators do not evaluate their right operand unless
        // the left one leaves the result open.
        match op.kind {
            TokenKind::AmpAmp => {
                if !self.evaluate_logical_operand(lhs)? {
                    return Ok(Value::Bool(false));
                }
                return Ok(Value::Bool(self.evaluate_logical_operand(rhs)?));
            }
            TokenKind::PipePipe => {
                if self.evaluate_logical_operand(lhs)? {
                    return Ok(Value::Bool(true));
                }
                return Ok(Value::Bool(self.evaluate_logical_operand(rhs)?));
            }
            _ => {}
        }

        let lhs = self.evaluate(lhs)?;
        let rhs = self.evaluate(rhs)?;
        Ok(apply_binary(op, lhs, rhs)?)
    }

    fn evaluate_logical_operand(&mut self, expr: &Expr) -> Result<bool, Unwind> {
        let value = self.evaluate(expr)?;
        Ok(value.cast_to_bool().ok_or(RuntimeError::BoolOperand)?)
    }

    /// Evaluates an `if`/`while` condition, which must be a `Bool`.
    fn evaluate_condition(&mut self, condition: &Expr) -> Result<bool, Unwind> {
        let value = self.evaluate(condition)?;
        Ok(value.cast_to_bool().ok_or(RuntimeError::BoolOperand)?)
    }

    fn evaluate_call(&mut self, callee: &Expr, args: &[Expr]) -> Result<Value, Unwind> {
        let callee = self.evaluate(callee)?;
        let function = match callee {
            Value::Function(function) => function,
            _ => return Err(RuntimeError::NotCallable.into()),
        };

        let mut arg_values = Vec::with_capacity(args.len());
        for arg in args {
            arg_values.push(self.evaluate(arg)?);
        }
        if arg_values.len() != function.arity() {
            return Err(RuntimeError::ArityMismatch {
                expected: function.arity(),
                got: arg_values.len(),
            }
            .into());
        }

        self.call(&function, arg_values)
    }

    /// Applies `function` to already-evaluated arguments. The call body runs
    /// in a fresh scope whose parent is the global scope, so the function
    /// sees its own parameters and locals, plus globals; names from the
    /// caller's scopes are not visible.
    fn call(&mut self, function: &Function, args: Vec<Value>) -> Result<Value, Unwind> {
        debug!("call {} with {:?}", function, args);

        let mark = self.scopes.mark();
        let enclosing = self.current;
        let global = self.scopes.global();
        self.current = self.scopes.push(global);
        self.call_depth += 1;

        let result = self.run_call_body(function, args);

        self.call_depth -= 1;
        self.current = enclosing;
        self.scopes.truncate(mark);

        match result {
            Ok(()) => Ok(Value::Null),
            Err(Unwind::Return(value)) => Ok(value),
            Err(unwind) => Err(unwind),
        }
    }

    fn run_call_body(&mut self, function: &Function, args: Vec<Value>) -> Result<(), Unwind> {
        let declaration = function.declaration();
        for (param, arg) in declaration.params.iter().zip(args) {
            self.scopes.define(self.current, &param.lexeme, arg)?;
        }
        declaration
            .body
            .iter()
            .try_for_each(|stmt| self.execute(stmt))
    }
}

fn apply_binary(op: &Token, lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
    // `+` is overloaded for concatenation; everything else works on numbers.
    if op.kind == TokenKind::Plus {
        return match (&lhs, &rhs) {
            (Value::Number(lhs), Value::Number(rhs)) => Ok(Value::Number(lhs + rhs)),
            (Value::Str(lhs), Value::Str(rhs)) => {
                Ok(Value::Str(format!("{}{}", lhs, rhs).into()))
            }
            _ => Err(RuntimeError::AddOperands),
        };
    }

    let lhs = lhs.cast_to_number().ok_or(RuntimeError::NumberOperands)?;
    let rhs = rhs.cast_to_number().ok_or(RuntimeError::NumberOperands)?;

    Ok(match op.kind {
        TokenKind::Minus => Value::Number(lhs - rhs),
        TokenKind::Star => Value::Number(lhs * rhs),
        TokenKind::Slash => {
            if rhs == Decimal::ZERO {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Number(lhs / rhs)
        }
        TokenKind::Less => Value::Bool(lhs < rhs),
        TokenKind::Greater => Value::Bool(lhs > rhs),
        TokenKind::LessEqual => Value::Bool(lhs <= rhs),
        TokenKind::GreaterEqual => Value::Bool(lhs >= rhs),
        TokenKind::EqualEqual => Value::Bool(lhs == rhs),
        TokenKind::BangEqual => Value::Bool(lhs != rhs),
        _ => unreachable!("not a binary operator"),
    })
}
