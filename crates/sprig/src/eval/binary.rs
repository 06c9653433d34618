//! Binary operation evaluation

use crate::ast::{BinOp, Expr};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

/// Evaluate a binary expression.
///
/// Both operands are evaluated, left first, before the operator is applied.
/// No operator short-circuits.
pub fn eval_binary(
    left: &Expr,
    op: BinOp,
    right: &Expr,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let left = left.eval(env, ctx)?;
    let right = right.eval(env, ctx)?;
    apply_binop(op, left, right)
}

/// Apply an operator to two evaluated operands.
///
/// # Errors
///
/// - `IncompatibleOperands` if the operand tags are not accepted by `op`
/// - `DivisionByZero` for `/` or `%` with a zero divisor
/// - `IntegerOverflow` if the result does not fit in an `i64`
pub fn apply_binop(op: BinOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match op {
        // Arithmetic
        BinOp::Add => eval_arith(op, left, right, i64::checked_add),
        BinOp::Subtract => eval_arith(op, left, right, i64::checked_sub),
        BinOp::Multiply => eval_arith(op, left, right, i64::checked_mul),
        BinOp::Divide => eval_div(op, left, right, i64::checked_div),
        BinOp::Mod => eval_div(op, left, right, i64::checked_rem),

        // Comparison
        BinOp::Higher => eval_compare(op, left, right, |a, b| a > b),
        BinOp::Lower => eval_compare(op, left, right, |a, b| a < b),

        BinOp::Equality => eval_eq(left, right),
        BinOp::Concat => eval_concat(left, right),
    }
}

fn incompatible(op: BinOp, left: Value, right: Value) -> EvalError {
    EvalError::IncompatibleOperands { op, left, right }
}

// ═══════════════════════════════════════════════════════════════════════
// Integer Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_arith(
    op: BinOp,
    left: Value,
    right: Value,
    f: fn(i64, i64) -> Option<i64>,
) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => f(a, b)
            .map(Value::Int)
            .ok_or(EvalError::IntegerOverflow { op }),
        (left, right) => Err(incompatible(op, left, right)),
    }
}

fn eval_div(
    op: BinOp,
    left: Value,
    right: Value,
    f: fn(i64, i64) -> Option<i64>,
) -> Result<Value, EvalError> {
    // Check for division by zero
    if let (Value::Int(_), Value::Int(0)) = (&left, &right) {
        return Err(EvalError::DivisionByZero { op });
    }
    // With a non-zero divisor the only failure left is i64::MIN / -1
    eval_arith(op, left, right, f)
}

fn eval_compare(
    op: BinOp,
    left: Value,
    right: Value,
    f: fn(i64, i64) -> bool,
) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(f(a, b))),
        (left, right) => Err(incompatible(op, left, right)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Polymorphic Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_eq(left: Value, right: Value) -> Result<Value, EvalError> {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a == b)),
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a == b)),
        (Value::String(a), Value::String(b)) => Ok(Value::Bool(a == b)),
        // Mixed tags and functions
        _ => Err(incompatible(BinOp::Equality, left, right)),
    }
}

fn eval_concat(left: Value, right: Value) -> Result<Value, EvalError> {
    match (&left, &right) {
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::from(joined))
        }
        _ => Err(incompatible(BinOp::Concat, left, right)),
    }
}
