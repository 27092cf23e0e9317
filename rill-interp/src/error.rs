//! Runtime errors and the control-flow signal that carries them.

use rill_value::Value;
use thiserror::Error;

/// An error raised while evaluating. The message is exactly what the
/// reporter prints after the `Runtime Error: ` prefix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("Division by zero.")]
    DivisionByZero,
    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),
    #[error("Variable '{0}' is already defined.")]
    AlreadyDefined(String),
    #[error("Operand types must both be Numbers or both be Strings.")]
    AddOperands,
    #[error("Operands must both be Numbers.")]
    NumberOperands,
    #[error("Operand must be Bool.")]
    BoolOperand,
    #[error("Negation operand must be a Number.")]
    NegateNonNumber,
    #[error("Logical negation operand must be a Bool.")]
    NotNonBool,
    #[error("Can only call functions.")]
    NotCallable,
    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },
    #[error("Cannot return outside of a function.")]
    TopLevelReturn,
}

/// Why evaluation of a statement stopped early. `return` unwinds through
/// enclosing blocks the same way an error does; the function call boundary
/// catches the `Return` case and turns it back into a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    Return(Value),
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}
