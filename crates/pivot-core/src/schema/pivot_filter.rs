use crate::stmt::{PivotRow, Value};

/// An extra predicate applied to every pivot statement of a relation.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotFilter {
    /// `column = value`
    Eq { column: String, value: Value },

    /// `column IN (values)`
    In { column: String, values: Vec<Value> },
}

impl PivotFilter {
    pub fn column(&self) -> &str {
        match self {
            Self::Eq { column, .. } | Self::In { column, .. } => column,
        }
    }

    /// Evaluates the predicate against a stored row.
    ///
    /// A missing column never matches.
    pub fn matches(&self, row: &PivotRow) -> bool {
        let Some(stored) = row.get(self.column()) else {
            return false;
        };

        match self {
            Self::Eq { value, .. } => stored.is_equivalent(value),
            Self::In { values, .. } => values.iter().any(|value| stored.is_equivalent(value)),
        }
    }
}
