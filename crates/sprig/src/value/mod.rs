//! Value representation for runtime values

mod callable;
mod display;
mod impls;

pub use callable::{BuiltinFn, BuiltinFnPtr, Closure};

use std::sync::Arc;

/// Runtime value produced by evaluation.
///
/// Every value carries its own tag, so operators dispatch on it at runtime.
/// There is no implicit coercion between variants.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Immutable string
    String(Arc<str>),

    /// Lambda with its captured environment
    Closure(Arc<Closure>),

    /// Host-native function
    Builtin(BuiltinFn),
}
