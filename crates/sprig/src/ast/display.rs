//! Surface-syntax rendering for expression trees

use std::fmt;

use super::{BinOp, Expr, TypeAnnotation};

// Rendering levels. A child is parenthesized when its own level is lower
// than the level its position requires.
const LEVEL_TOP: u8 = 0;
const LEVEL_APP: u8 = 5;
const LEVEL_ATOM: u8 = 6;

fn level(expr: &Expr) -> u8 {
    match expr {
        Expr::Let { .. } | Expr::Lambda { .. } | Expr::If { .. } => LEVEL_TOP,
        Expr::Binary { op, .. } => op.precedence(),
        Expr::App { .. } => LEVEL_APP,
        Expr::Int { value } if *value < 0 => LEVEL_APP,
        Expr::Var { .. } | Expr::Int { .. } | Expr::Bool { .. } | Expr::Str { .. } => LEVEL_ATOM,
    }
}

fn write_at(f: &mut fmt::Formatter<'_>, expr: &Expr, required: u8) -> fmt::Result {
    if level(expr) < required {
        write!(f, "(")?;
        write_expr(f, expr)?;
        write!(f, ")")
    } else {
        write_expr(f, expr)
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Var { name } => write!(f, "{}", name),
        Expr::Int { value } => write!(f, "{}", value),
        Expr::Bool { value } => write!(f, "{}", value),
        Expr::Str { value } => write!(f, "{:?}", value),

        Expr::Lambda {
            param,
            param_ty,
            body,
        } => {
            match param_ty {
                Some(ty) => write!(f, "\\{}: {} => ", param, ty)?,
                None => write!(f, "\\{} => ", param)?,
            }
            write_at(f, body, LEVEL_TOP)
        }

        Expr::App { func, arg } => {
            write_at(f, func, LEVEL_APP)?;
            write!(f, " ")?;
            write_at(f, arg, LEVEL_ATOM)
        }

        Expr::If {
            cond,
            then_branch,
            else_branch,
        } => {
            write!(f, "if ")?;
            write_at(f, cond, LEVEL_TOP)?;
            write!(f, " then ")?;
            write_at(f, then_branch, LEVEL_TOP)?;
            write!(f, " else ")?;
            write_at(f, else_branch, LEVEL_TOP)
        }

        Expr::Binary { left, op, right } => {
            // Left-associative: the right operand needs one level more.
            let prec = op.precedence();
            write_at(f, left, prec)?;
            write!(f, " {} ", op)?;
            write_at(f, right, prec + 1)
        }

        Expr::Let {
            recursive,
            name,
            value,
            body,
        } => {
            if *recursive {
                write!(f, "let rec {} = ", name)?;
            } else {
                write!(f, "let {} = ", name)?;
            }
            write_at(f, value, LEVEL_TOP)?;
            write!(f, " in ")?;
            write_at(f, body, LEVEL_TOP)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::Int => write!(f, "Int"),
            TypeAnnotation::Bool => write!(f, "Bool"),
            TypeAnnotation::String => write!(f, "String"),
            TypeAnnotation::Arrow(from, to) => match from.as_ref() {
                TypeAnnotation::Arrow(..) => write!(f, "({}) -> {}", from, to),
                _ => write!(f, "{} -> {}", from, to),
            },
        }
    }
}
