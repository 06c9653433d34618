//! Function application evaluation

use std::sync::Arc;

use crate::ast::Expr;
use crate::{BuiltinFn, Closure, Environment, EvalContext, EvalError, Value};

use super::Evaluate;

/// Evaluate an application node.
///
/// The callee is evaluated first, then the argument, both in the caller's
/// environment.
pub fn eval_app(
    func: &Expr,
    arg: &Expr,
    env: &Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let func_value = func.eval(env, ctx)?;
    if !func_value.is_callable() {
        return Err(EvalError::NotAFunction { value: func_value });
    }
    let arg_value = arg.eval(env, ctx)?;
    call_value(func_value, arg_value, ctx)
}

/// Apply a Value to an argument.
///
/// # Errors
///
/// Returns `NotAFunction` if the value is not callable, `StackOverflow` if
/// the context's call depth limit is reached, and any error raised by the
/// callee.
pub fn call_value(func: Value, arg: Value, ctx: &EvalContext) -> Result<Value, EvalError> {
    match func {
        Value::Closure(c) => call_closure(&c, arg, ctx),
        Value::Builtin(b) => call_builtin(&b, arg),
        other => Err(EvalError::NotAFunction { value: other }),
    }
}

/// Call a closure.
///
/// The parameter is bound on top of the closure's captured environment, so
/// free variables in the body resolve where the lambda was written. A closure
/// bound by `let rec` also sees itself, beneath the parameter.
fn call_closure(
    closure: &Arc<Closure>,
    arg: Value,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    // Track call depth
    let _guard = ctx.enter_call()?;

    tracing::trace!(
        param = %closure.param,
        arg = %arg,
        depth = ctx.call_depth(),
        "apply closure"
    );

    let mut call_env = closure.env.clone();
    if let Some(name) = &closure.self_name {
        call_env.define(name.as_str(), Value::Closure(Arc::clone(closure)));
    }
    call_env.define(closure.param.as_str(), arg);
    closure.body.eval(&call_env, ctx)
}

/// Call a built-in function.
fn call_builtin(func: &BuiltinFn, arg: Value) -> Result<Value, EvalError> {
    tracing::trace!(builtin = %func.name, arg = %arg, "apply builtin");
    func.call(&arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build::*;

    #[test]
    fn test_call_closure_binds_param() {
        let closure = Value::closure(Environment::new(), "x", Arc::new(var("x")));
        let ctx = EvalContext::default();
        assert_eq!(
            call_value(closure, Value::Int(9), &ctx).unwrap(),
            Value::Int(9)
        );
        assert_eq!(ctx.call_depth(), 0);
    }

    #[test]
    fn test_call_non_function() {
        let ctx = EvalContext::default();
        let err = call_value(Value::Int(1), Value::Int(2), &ctx).unwrap_err();
        assert!(matches!(err, EvalError::NotAFunction { value: Value::Int(1) }));
    }

    #[test]
    fn test_argument_not_evaluated_for_non_function() {
        // The callee check happens before the (unbound) argument is touched
        let expr = app(int(1), var("missing"));
        let err = expr
            .eval(&Environment::new(), &EvalContext::default())
            .unwrap_err();
        assert!(matches!(err, EvalError::NotAFunction { .. }));
    }

    #[test]
    fn test_parameter_shadows_self_name() {
        // let rec f = \f => f in f 3
        let expr = let_rec("f", lambda("f", var("f")), app(var("f"), int(3)));
        let result = expr.eval(&Environment::new(), &EvalContext::default());
        assert_eq!(result.unwrap(), Value::Int(3));
    }

    #[test]
    fn test_depth_released_after_error() {
        let closure = Value::closure(Environment::new(), "x", Arc::new(var("missing")));
        let ctx = EvalContext::default();
        assert!(call_value(closure, Value::Int(0), &ctx).is_err());
        assert_eq!(ctx.call_depth(), 0);
    }
}
