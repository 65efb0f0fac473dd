use super::Value;

use std::fmt;

/// Identifier of a related record.
///
/// Pivot tables key their rows by the identifiers of both sides of the
/// association. Identifiers are either integers or strings.
#[derive(Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Id {
    Int(i64),
    String(String),
}

impl Id {
    /// Converts a scalar value into an identifier.
    ///
    /// Only integers and strings identify records; any other value returns
    /// `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::I64(v) => Some(Self::Int(*v)),
            Value::String(v) => Some(Self::from(v.as_str())),
            _ => None,
        }
    }

    /// Rewrites a string holding an integer in its canonical form (`"5"`,
    /// `"-12"`) as that integer. `"05"` and `"+5"` stay strings.
    pub fn canonicalize(self) -> Self {
        match self {
            Self::String(id) => match id.parse::<i64>() {
                Ok(int) if int.to_string() == id => Self::Int(int),
                _ => Self::String(id),
            },
            id => id,
        }
    }

    pub fn to_value(&self) -> Value {
        self.clone().into()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::String(id) => write!(f, "{id}"),
        }
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => fmt.debug_tuple("Id").field(id).finish(),
            Self::String(id) => fmt.debug_tuple("Id").field(id).finish(),
        }
    }
}

impl From<i64> for Id {
    fn from(src: i64) -> Self {
        Self::Int(src)
    }
}

impl From<i32> for Id {
    fn from(src: i32) -> Self {
        Self::Int(src.into())
    }
}

impl From<String> for Id {
    fn from(src: String) -> Self {
        Self::String(src).canonicalize()
    }
}

impl From<&str> for Id {
    fn from(src: &str) -> Self {
        Self::String(src.to_owned()).canonicalize()
    }
}

impl From<Id> for Value {
    fn from(src: Id) -> Self {
        match src {
            Id::Int(v) => Self::I64(v),
            Id::String(v) => Self::String(v),
        }
    }
}

impl From<&Id> for Value {
    fn from(src: &Id) -> Self {
        src.to_value()
    }
}
