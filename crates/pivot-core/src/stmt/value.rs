use crate::Result;

use std::fmt;

/// A scalar column value stored in a pivot row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// String value
    String(String),

    /// An instant in time, used by timestamp columns
    Timestamp(jiff::Timestamp),
}

impl Value {
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp(_))
    }

    pub fn to_timestamp(&self) -> Result<jiff::Timestamp> {
        match self {
            Self::Timestamp(v) => Ok(*v),
            _ => Err(crate::err!("cannot convert value to Timestamp; value={self:?}")),
        }
    }

    /// Returns `true` when writing `other` over `self` would not change the
    /// stored column.
    ///
    /// Values are equivalent when they are equal, or when both are numeric
    /// (an integer, or a string holding an integer) with the same textual
    /// form. `I64(1)` is therefore equivalent to `String("1")`, while
    /// `String("01")` is not.
    pub fn is_equivalent(&self, other: &Value) -> bool {
        if self == other {
            return true;
        }

        match (self.numeric_repr(), other.numeric_repr()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }

    fn numeric_repr(&self) -> Option<String> {
        match self {
            Self::I64(v) => Some(v.to_string()),
            Self::String(v) if v.parse::<i64>().is_ok() => Some(v.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Timestamp(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_owned())
    }
}

impl From<jiff::Timestamp> for Value {
    fn from(src: jiff::Timestamp) -> Self {
        Self::Timestamp(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
