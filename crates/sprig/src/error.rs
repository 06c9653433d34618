//! Error types for evaluation

use thiserror::Error;

use crate::ast::BinOp;
use crate::value::Value;

/// Errors raised while evaluating an expression.
///
/// Every variant is fatal: evaluation stops at the first error and no
/// partial result is produced.
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// Variable is not bound in the environment
    #[error("unbound variable `{name}`")]
    UnboundVariable {
        /// The missing name
        name: String,
    },

    /// Application target is neither a closure nor a builtin
    #[error("not a function: `{value}` ({})", .value.type_name())]
    NotAFunction {
        /// The value that was applied
        value: Value,
    },

    /// `if` condition did not evaluate to a boolean
    #[error("non-boolean condition: `{value}` ({})", .value.type_name())]
    NonBooleanCondition {
        /// The condition's value
        value: Value,
    },

    /// Operand tags are not accepted by the operator
    #[error(
        "incompatible operands for `{op}`: `{left}` ({}) and `{right}` ({})",
        .left.type_name(),
        .right.type_name()
    )]
    IncompatibleOperands {
        /// The operator
        op: BinOp,
        /// Left operand
        left: Value,
        /// Right operand
        right: Value,
    },

    /// Division or modulo by zero
    #[error("division by zero in `{op}`")]
    DivisionByZero {
        /// `/` or `%`
        op: BinOp,
    },

    /// Integer arithmetic overflowed 64 bits
    #[error("integer overflow in `{op}`")]
    IntegerOverflow {
        /// The operator
        op: BinOp,
    },

    /// Intrinsic received an argument of the wrong type
    #[error("`{intrinsic}` expects {expected}, found `{found}` ({})", .found.type_name())]
    InvalidArgument {
        /// Intrinsic name
        intrinsic: String,
        /// Expected argument type
        expected: &'static str,
        /// Actual argument
        found: Value,
    },

    /// Intrinsic that reads the first character received an empty string
    #[error("`{intrinsic}` applied to an empty string")]
    EmptyString {
        /// Intrinsic name
        intrinsic: String,
    },

    /// Integer is not a Unicode scalar value
    #[error("invalid character code {code}")]
    InvalidCharCode {
        /// The rejected code
        code: i64,
    },

    /// Call depth limit reached
    #[error("stack overflow: call depth {depth} exceeds maximum {max}")]
    StackOverflow {
        /// Depth at which the limit was hit
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// Evaluation was interrupted through the context
    #[error("evaluation interrupted")]
    Interrupted,
}

impl EvalError {
    /// Short, stable tag naming the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::UnboundVariable { .. } => "unbound-variable",
            EvalError::NotAFunction { .. } => "not-a-function",
            EvalError::NonBooleanCondition { .. } => "non-boolean-condition",
            EvalError::IncompatibleOperands { .. } => "incompatible-operands",
            EvalError::DivisionByZero { .. } => "division-by-zero",
            EvalError::IntegerOverflow { .. } => "integer-overflow",
            EvalError::InvalidArgument { .. } => "invalid-argument",
            EvalError::EmptyString { .. } => "empty-string",
            EvalError::InvalidCharCode { .. } => "invalid-char-code",
            EvalError::StackOverflow { .. } => "stack-overflow",
            EvalError::Interrupted => "interrupted",
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

/// Get the type name of a value for error messages.
pub fn type_name(value: &Value) -> &'static str {
    value.type_name()
}
