//! Callable value types: closures and builtins

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::ast::Expr;
use crate::environment::Environment;
use crate::error::EvalError;

/// Signature of a host-native function. Every builtin takes exactly one
/// argument; multi-argument builtins are curried by returning another builtin
/// or closure.
pub type BuiltinFnPtr = Arc<dyn Fn(&Value) -> Result<Value, EvalError> + Send + Sync>;

/// A function value with its captured environment.
///
/// Application extends `env`, never the caller's environment, which is what
/// makes scoping lexical.
#[derive(Clone)]
pub struct Closure {
    /// Environment in effect where the lambda was evaluated
    pub env: Environment,

    /// Parameter name
    pub param: String,

    /// The closure body, shared with the lambda node it came from
    pub body: Arc<Expr>,

    /// Name the closure is bound to inside its own body, set by `let rec`.
    ///
    /// The binding is added when the closure is applied, so the captured
    /// environment never holds the closure itself.
    pub self_name: Option<String>,
}

impl Closure {
    /// Create a closure over `env`.
    pub fn new(env: Environment, param: impl Into<String>, body: Arc<Expr>) -> Self {
        Self {
            env,
            param: param.into(),
            body,
            self_name: None,
        }
    }

    /// Check if this closure sees itself under a name.
    pub fn is_recursive(&self) -> bool {
        self.self_name.is_some()
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Captured values are left out, only their names are shown
        f.debug_struct("Closure")
            .field("param", &self.param)
            .field("body", &self.body.to_string())
            .field("self_name", &self.self_name)
            .field("captures", &self.env.names())
            .finish()
    }
}

/// A built-in native function.
///
/// These are Rust functions exposed to the interpreter.
#[derive(Clone)]
pub struct BuiltinFn {
    /// Function name (for display/debugging)
    pub name: String,

    /// The actual function pointer
    pub func: BuiltinFnPtr,
}

impl BuiltinFn {
    /// Wrap a host function.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, EvalError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Apply the builtin to its argument.
    pub fn call(&self, arg: &Value) -> Result<Value, EvalError> {
        (self.func)(arg)
    }
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}
