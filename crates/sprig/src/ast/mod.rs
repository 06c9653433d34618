//! Expression tree consumed by the evaluator
//!
//! The tree is produced once by a front end (a parser, the [`build`] helpers,
//! or a deserialized JSON document) and is never mutated afterwards. Child
//! nodes sit behind `Arc` so a closure can hold on to its body without
//! copying the subtree.

pub mod build;
mod display;

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Expr {
    /// Variable reference
    Var {
        /// Name being referenced
        name: String,
    },

    /// Single-parameter function: `\param => body`
    Lambda {
        /// Parameter name
        param: String,
        /// Optional annotation from the source; ignored at runtime
        #[cfg_attr(feature = "serde", serde(default))]
        param_ty: Option<TypeAnnotation>,
        /// Function body
        body: Arc<Expr>,
    },

    /// Function application: `func arg`
    App {
        /// Expression producing the callee
        func: Arc<Expr>,
        /// Argument expression
        arg: Arc<Expr>,
    },

    /// Conditional: `if cond then then_branch else else_branch`
    If {
        /// Condition, must evaluate to a boolean
        cond: Arc<Expr>,
        /// Taken when the condition is true
        then_branch: Arc<Expr>,
        /// Taken when the condition is false
        else_branch: Arc<Expr>,
    },

    /// Binary operation: `left op right`
    Binary {
        /// Left operand
        left: Arc<Expr>,
        /// Operator
        op: BinOp,
        /// Right operand
        right: Arc<Expr>,
    },

    /// Local binding: `let [rec] name = value in body`
    Let {
        /// Whether `name` is visible inside `value`
        recursive: bool,
        /// Binder
        name: String,
        /// Bound expression
        value: Arc<Expr>,
        /// Scope of the binding
        body: Arc<Expr>,
    },

    /// Integer literal
    Int {
        /// Literal value
        value: i64,
    },

    /// Boolean literal
    Bool {
        /// Literal value
        value: bool,
    },

    /// String literal
    Str {
        /// Literal value
        value: String,
    },
}

impl Expr {
    /// Human-readable name of the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Var { .. } => "variable",
            Expr::Lambda { .. } => "lambda",
            Expr::App { .. } => "application",
            Expr::If { .. } => "if",
            Expr::Binary { .. } => "binary operation",
            Expr::Let { .. } => "let",
            Expr::Int { .. } => "integer literal",
            Expr::Bool { .. } => "boolean literal",
            Expr::Str { .. } => "string literal",
        }
    }

    /// Check if this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Int { .. } | Expr::Bool { .. } | Expr::Str { .. })
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Mod,
    /// `>`
    Higher,
    /// `<`
    Lower,
    /// `==`
    Equality,
    /// `#`, string concatenation
    Concat,
}

impl BinOp {
    /// All operators, in declaration order.
    pub const ALL: [BinOp; 9] = [
        BinOp::Add,
        BinOp::Subtract,
        BinOp::Multiply,
        BinOp::Divide,
        BinOp::Mod,
        BinOp::Higher,
        BinOp::Lower,
        BinOp::Equality,
        BinOp::Concat,
    ];

    /// Surface syntax of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Mod => "%",
            BinOp::Higher => ">",
            BinOp::Lower => "<",
            BinOp::Equality => "==",
            BinOp::Concat => "#",
        }
    }

    /// Binding strength used when rendering; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Equality => 1,
            BinOp::Higher | BinOp::Lower => 2,
            BinOp::Add | BinOp::Subtract | BinOp::Concat => 3,
            BinOp::Multiply | BinOp::Divide | BinOp::Mod => 4,
        }
    }
}

/// Parameter type annotation as written in the source.
///
/// The evaluator never inspects it; it only travels with the tree so a
/// front end can round-trip what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeAnnotation {
    /// `Int`
    Int,
    /// `Bool`
    Bool,
    /// `String`
    String,
    /// `a -> b`
    Arrow(Box<TypeAnnotation>, Box<TypeAnnotation>),
}
