//! # Sprig
//!
//! Evaluator core for a small call-by-value functional language.
//!
//! Sprig walks an expression tree in an explicit, persistent environment and
//! produces a value. The language has single-parameter lambdas with lexical
//! closures, `let` and `let rec`, conditionals, integer/boolean/string
//! literals, a fixed set of binary operators, and a handful of host-native
//! string intrinsics.
//!
//! ## Architecture
//!
//! - **AST** ([`ast`]): immutable expression tree handed over by a front end
//! - **Values** ([`value`]): runtime values, tagged for dynamic dispatch
//! - **Environment** ([`environment`]): persistent name-to-value mapping and
//!   the intrinsic prelude
//! - **Evaluator** ([`eval`]): tree-walking dispatcher and operator semantics
//!
//! Parsing and type inference happen elsewhere; this crate neither parses nor
//! type-checks.
//!
//! ```
//! use sprig::ast::build::*;
//! use sprig::ast::BinOp;
//! use sprig::{eval, Environment, Value};
//!
//! // let rec f = \n => if n == 0 then 1 else n * f (n - 1) in f 5
//! let program = let_rec(
//!     "f",
//!     lambda(
//!         "n",
//!         if_(
//!             binary(var("n"), BinOp::Equality, int(0)),
//!             int(1),
//!             binary(
//!                 var("n"),
//!                 BinOp::Multiply,
//!                 app(var("f"), binary(var("n"), BinOp::Subtract, int(1))),
//!             ),
//!         ),
//!     ),
//!     app(var("f"), int(5)),
//! );
//! assert_eq!(eval(&Environment::new(), &program).unwrap(), Value::Int(120));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod value;

// Re-export main types
pub use ast::{BinOp, Expr, TypeAnnotation};
pub use context::{CallGuard, EvalContext};
pub use environment::{Environment, Intrinsic};
pub use error::{EvalError, Result};
pub use eval::{apply_binop, call_value, eval, eval_expr, Evaluate};
pub use evaluator::Evaluator;
pub use value::{BuiltinFn, BuiltinFnPtr, Closure, Value};

/// Sprig version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
