//! Lambda evaluation

use std::sync::Arc;

use crate::ast::Expr;
use crate::{Environment, Value};

/// Build a closure capturing the current environment.
///
/// The body is not evaluated until the closure is applied.
pub fn eval_lambda(param: &str, body: &Arc<Expr>, env: &Environment) -> Value {
    Value::closure(env.clone(), param, Arc::clone(body))
}
