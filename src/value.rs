/// Coerced argument values handed to command handlers.
///
/// Raw terminal tokens are strings; the coercion step turns each one into a
/// `Value` matching its parameter's declared type before the handler runs, so
/// handlers never re-parse user input.
use std::fmt;

/// A single positional argument after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw string, passed through unchanged (`Str` / `Untyped` parameters).
    Str(String),
    /// Strict integer literal.
    Int(i64),
    /// Numeric literal (integer literals are widened).
    Float(f64),
    /// Literal `true` / `false`.
    Bool(bool),
    /// Decoded JSON array or object.
    Object(serde_json::Value),
}

impl Value {
    /// The string payload, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int`.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload. `Int` widens, since an integer literal is a valid
    /// float argument.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// The boolean payload, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The decoded JSON payload, if this is an `Object`.
    #[must_use]
    pub fn as_object(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Object(v) => write!(f, "{v}"),
        }
    }
}
