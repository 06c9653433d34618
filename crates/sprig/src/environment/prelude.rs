//! Standard prelude with the string/character intrinsics

use super::Environment;
use crate::error::EvalError;
use crate::value::{BuiltinFn, Value};

/// Host-native string and character primitives.
///
/// Each intrinsic takes one argument and is exposed to programs as an
/// ordinary callable value under [`name`](Intrinsic::name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// First character of a string, as a one-character string
    FirstChar,
    /// The string without its first character
    RemainingChars,
    /// Code point of the first character
    CharCode,
    /// One-character string for a code point
    CodeChar,
}

impl Intrinsic {
    /// Every intrinsic, in prelude order.
    pub const ALL: [Intrinsic; 4] = [
        Intrinsic::FirstChar,
        Intrinsic::RemainingChars,
        Intrinsic::CharCode,
        Intrinsic::CodeChar,
    ];

    /// Name the intrinsic is bound to in the prelude.
    pub fn name(self) -> &'static str {
        match self {
            Intrinsic::FirstChar => "firstChar",
            Intrinsic::RemainingChars => "remainingChars",
            Intrinsic::CharCode => "charCode",
            Intrinsic::CodeChar => "codeChar",
        }
    }

    /// Find an intrinsic by its prelude name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }

    /// Apply the intrinsic to an argument value.
    pub fn apply(self, arg: &Value) -> Result<Value, EvalError> {
        match self {
            Intrinsic::FirstChar => {
                let (first, _) = self.split_first(arg)?;
                Ok(Value::string(first.to_string()))
            }
            Intrinsic::RemainingChars => {
                let (_, rest) = self.split_first(arg)?;
                Ok(Value::string(rest))
            }
            Intrinsic::CharCode => {
                let (first, _) = self.split_first(arg)?;
                Ok(Value::Int(i64::from(u32::from(first))))
            }
            Intrinsic::CodeChar => {
                let code = arg.as_int().ok_or_else(|| self.invalid_argument("Int", arg))?;
                u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .map(|c| Value::string(c.to_string()))
                    .ok_or(EvalError::InvalidCharCode { code })
            }
        }
    }

    /// Wrap the intrinsic as a builtin function value.
    pub fn to_builtin(self) -> BuiltinFn {
        BuiltinFn::new(self.name(), move |arg| self.apply(arg))
    }

    fn split_first(self, arg: &Value) -> Result<(char, &str), EvalError> {
        let s = arg
            .as_str()
            .ok_or_else(|| self.invalid_argument("String", arg))?;
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => Ok((first, chars.as_str())),
            None => Err(EvalError::EmptyString {
                intrinsic: self.name().to_string(),
            }),
        }
    }

    fn invalid_argument(self, expected: &'static str, found: &Value) -> EvalError {
        EvalError::InvalidArgument {
            intrinsic: self.name().to_string(),
            expected,
            found: found.clone(),
        }
    }
}

impl Environment {
    /// Create an environment with the intrinsics bound.
    pub fn with_prelude() -> Self {
        let mut env = Self::new();
        env.load_prelude();
        env
    }

    /// Bind every intrinsic in this environment.
    pub fn load_prelude(&mut self) {
        for intrinsic in Intrinsic::ALL {
            self.define_builtin(intrinsic.to_builtin());
        }
    }
}
