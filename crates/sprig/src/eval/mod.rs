//! Expression evaluation

pub mod binary;
pub mod call;
pub mod function;
pub mod if_expr;
pub mod local;
pub mod path;

use crate::ast::Expr;
use crate::{Environment, EvalContext, EvalError, Value};

/// Remaining stack below which evaluation switches to a fresh segment.
const RED_ZONE: usize = 100 * 1024;

/// Size of each additional stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter. The
/// environment is passed by reference and never mutated; nodes that bind
/// names evaluate their children in an extended copy.
pub trait Evaluate {
    /// Evaluate this AST node in the given environment.
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, env: &Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        // Check for interruption before each expression
        if ctx.is_interrupted() {
            tracing::debug!(kind = self.kind_name(), "evaluation interrupted");
            return Err(EvalError::Interrupted);
        }

        stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || match self {
            Expr::Int { value } => Ok(Value::Int(*value)),
            Expr::Bool { value } => Ok(Value::Bool(*value)),
            Expr::Str { value } => Ok(Value::string(value)),
            Expr::Var { name } => path::eval_var(name, env),
            Expr::Lambda { param, body, .. } => Ok(function::eval_lambda(param, body, env)),
            Expr::App { func, arg } => call::eval_app(func, arg, env, ctx),
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => if_expr::eval_if(cond, then_branch, else_branch, env, ctx),
            Expr::Binary { left, op, right } => binary::eval_binary(left, *op, right, env, ctx),
            Expr::Let {
                recursive,
                name,
                value,
                body,
            } => local::eval_let(*recursive, name, value, body, env, ctx),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate `expr` in `env` with a default context.
///
/// # Example
///
/// ```
/// use sprig::ast::build::*;
/// use sprig::{eval, Environment, Value};
///
/// let program = app(var("charCode"), string("A"));
/// assert_eq!(eval(&Environment::with_prelude(), &program).unwrap(), Value::Int(65));
/// ```
pub fn eval(env: &Environment, expr: &Expr) -> Result<Value, EvalError> {
    eval_expr(expr, env, &EvalContext::default())
}

/// Evaluate an expression with an explicit context.
#[tracing::instrument(level = "debug", skip_all, fields(kind = expr.kind_name()))]
pub fn eval_expr(expr: &Expr, env: &Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
    let result = expr.eval(env, ctx);
    if let Err(err) = &result {
        tracing::debug!(kind = err.kind(), %err, "evaluation failed");
    }
    result
}

// Re-export for use by other modules
pub use binary::apply_binop;
pub use call::call_value;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build::*;
    use crate::ast::BinOp;

    #[test]
    fn test_eval_expr_deeply_nested_tree() {
        // 1 + (1 + (1 + ...))
        let depth = 5_000;
        let expr = (0..depth).fold(int(0), |acc, _| binary(int(1), BinOp::Add, acc));
        let result = eval_expr(&expr, &Environment::new(), &EvalContext::default());
        assert_eq!(result.unwrap(), Value::Int(depth));
    }

    #[test]
    fn test_eval_expr_reports_failure() {
        let err = eval_expr(&var("nope"), &Environment::new(), &EvalContext::default())
            .unwrap_err();
        assert_eq!(err.kind(), "unbound-variable");
    }
}
