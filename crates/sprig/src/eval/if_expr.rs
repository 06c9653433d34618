//! If expression evaluation

use super::Evaluate;
use crate::ast::Expr;
use crate::{Environment, EvalContext, EvalError, Value};

/// Evaluate a conditional. Only the selected branch is evaluated.
///
/// # Errors
///
/// Returns `NonBooleanCondition` if the condition is not a boolean.
pub fn eval_if(
    cond: &Expr,
    then_branch: &Expr,
    else_branch: &Expr,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    match cond.eval(env, ctx)? {
        Value::Bool(true) => then_branch.eval(env, ctx),
        Value::Bool(false) => else_branch.eval(env, ctx),
        other => Err(EvalError::NonBooleanCondition { value: other }),
    }
}
