//! Constructor helpers for building expression trees in code
//!
//! ```
//! use sprig::ast::build::*;
//! use sprig::ast::BinOp;
//!
//! // let add = \a => \b => a + b in add 2 3
//! let program = let_(
//!     "add",
//!     lambda("a", lambda("b", binary(var("a"), BinOp::Add, var("b")))),
//!     apps(var("add"), [int(2), int(3)]),
//! );
//! assert_eq!(program.to_string(), "let add = \\a => \\b => a + b in add 2 3");
//! ```

use std::sync::Arc;

use super::{BinOp, Expr, TypeAnnotation};

/// Integer literal.
pub fn int(value: i64) -> Expr {
    Expr::Int { value }
}

/// Boolean literal.
pub fn boolean(value: bool) -> Expr {
    Expr::Bool { value }
}

/// String literal.
pub fn string(value: impl Into<String>) -> Expr {
    Expr::Str {
        value: value.into(),
    }
}

/// Variable reference.
pub fn var(name: impl Into<String>) -> Expr {
    Expr::Var { name: name.into() }
}

/// Unannotated lambda.
pub fn lambda(param: impl Into<String>, body: Expr) -> Expr {
    Expr::Lambda {
        param: param.into(),
        param_ty: None,
        body: Arc::new(body),
    }
}

/// Lambda with a parameter annotation.
pub fn lambda_typed(param: impl Into<String>, ty: TypeAnnotation, body: Expr) -> Expr {
    Expr::Lambda {
        param: param.into(),
        param_ty: Some(ty),
        body: Arc::new(body),
    }
}

/// Single application.
pub fn app(func: Expr, arg: Expr) -> Expr {
    Expr::App {
        func: Arc::new(func),
        arg: Arc::new(arg),
    }
}

/// Curried application of `func` to each argument in turn.
pub fn apps(func: Expr, args: impl IntoIterator<Item = Expr>) -> Expr {
    args.into_iter().fold(func, app)
}

/// Conditional.
pub fn if_(cond: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
    Expr::If {
        cond: Arc::new(cond),
        then_branch: Arc::new(then_branch),
        else_branch: Arc::new(else_branch),
    }
}

/// Binary operation.
pub fn binary(left: Expr, op: BinOp, right: Expr) -> Expr {
    Expr::Binary {
        left: Arc::new(left),
        op,
        right: Arc::new(right),
    }
}

/// Non-recursive `let`.
pub fn let_(name: impl Into<String>, value: Expr, body: Expr) -> Expr {
    Expr::Let {
        recursive: false,
        name: name.into(),
        value: Arc::new(value),
        body: Arc::new(body),
    }
}

/// Recursive `let rec`.
pub fn let_rec(name: impl Into<String>, value: Expr, body: Expr) -> Expr {
    Expr::Let {
        recursive: true,
        name: name.into(),
        value: Arc::new(value),
        body: Arc::new(body),
    }
}
