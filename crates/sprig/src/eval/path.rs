//! Variable reference evaluation

use crate::{Environment, EvalError, Value};

/// Resolve a variable against the environment.
///
/// Intrinsics are ordinary prelude bindings, so they resolve here like any
/// other name and can be shadowed.
///
/// # Errors
///
/// Returns `UnboundVariable` if no binding exists.
pub fn eval_var(name: &str, env: &Environment) -> Result<Value, EvalError> {
    env.lookup(name)
        .cloned()
        .ok_or_else(|| EvalError::UnboundVariable {
            name: name.to_string(),
        })
}
