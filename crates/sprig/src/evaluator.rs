//! Host-facing evaluator handle
//!
//! Bundles the initial environment and the evaluation context that a caller
//! would otherwise thread by hand.

use crate::ast::Expr;
use crate::eval::eval_expr;
use crate::{BuiltinFn, Environment, EvalContext, EvalError, Value};

/// An initial environment plus the context used to evaluate programs in it.
///
/// # Example
///
/// ```
/// use sprig::ast::build::*;
/// use sprig::ast::BinOp;
/// use sprig::{Evaluator, Value};
///
/// let evaluator = Evaluator::new();
/// let program = binary(app(var("firstChar"), string("abc")), BinOp::Concat, string("!"));
/// assert_eq!(evaluator.eval(&program).unwrap(), Value::string("a!"));
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    env: Environment,
    ctx: EvalContext,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Evaluator over the prelude with default limits.
    pub fn new() -> Self {
        Self::with_context(EvalContext::default())
    }

    /// Evaluator over the prelude with the given context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            env: Environment::with_prelude(),
            ctx,
        }
    }

    /// Evaluator over an arbitrary environment.
    pub fn with_environment(env: Environment, ctx: EvalContext) -> Self {
        Self { env, ctx }
    }

    /// Bind a value visible to every later evaluation.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.env.define(name, value);
    }

    /// Register an additional host function.
    pub fn define_builtin(&mut self, builtin: BuiltinFn) {
        self.env.define_builtin(builtin);
    }

    /// Evaluate a program.
    pub fn eval(&self, expr: &Expr) -> Result<Value, EvalError> {
        eval_expr(expr, &self.env, &self.ctx)
    }

    /// The environment programs are evaluated in.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// The evaluation context.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }
}
