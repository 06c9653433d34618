//! Local binding (`let` / `let rec`) evaluation

use std::sync::Arc;

use crate::ast::Expr;
use crate::{Closure, Environment, EvalContext, EvalError, Value};

use super::Evaluate;

/// Evaluate a `let` or `let rec` binding.
///
/// The bound expression is evaluated in the current environment. For
/// `let rec` whose value is a closure, a new closure is bound that sees
/// itself under `name` when applied. Any other value is bound as-is.
///
/// The closure produced by the bound expression is never modified: in
/// `let rec f = g in ...` only `f` gains the self binding, and applying `g`
/// still fails to resolve `f`.
pub fn eval_let(
    recursive: bool,
    name: &str,
    value: &Expr,
    body: &Expr,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let mut bound = value.eval(env, ctx)?;

    if recursive {
        if let Value::Closure(closure) = &bound {
            bound = tie_knot(name, closure);
        }
    }

    let body_env = env.extend(name, bound);
    body.eval(&body_env, ctx)
}

/// Build the self-referential version of `closure` under `name`.
///
/// The self binding is supplied at each application, so no reference cycle
/// is created. If `closure` was itself bound by `let rec`, its own self
/// binding is moved into the captured environment.
fn tie_knot(name: &str, closure: &Arc<Closure>) -> Value {
    let env = match &closure.self_name {
        Some(previous) => closure
            .env
            .extend(previous.as_str(), Value::Closure(Arc::clone(closure))),
        None => closure.env.clone(),
    };

    tracing::trace!(binder = name, param = %closure.param, "bound recursive closure");
    Value::Closure(Arc::new(Closure {
        env,
        param: closure.param.clone(),
        body: Arc::clone(&closure.body),
        self_name: Some(name.to_string()),
    }))
}
