use super::*;

/// Fetch the owner's pivot rows whose related key is one of `ids`.
///
/// The relation's extra pivot filters apply.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPivot {
    pub ids: Vec<Id>,
}

impl From<QueryPivot> for Operation {
    fn from(value: QueryPivot) -> Self {
        Self::QueryPivot(value)
    }
}
