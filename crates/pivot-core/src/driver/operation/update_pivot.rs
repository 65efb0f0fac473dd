use super::*;

/// Update the owner's pivot rows whose related key is one of `ids`.
///
/// The relation's extra pivot filters apply. The driver responds with the
/// number of rows whose stored values actually changed, not the number of
/// rows matched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePivot {
    pub ids: Vec<Id>,

    /// Columns to write
    pub assignments: Attributes,
}

impl From<UpdatePivot> for Operation {
    fn from(value: UpdatePivot) -> Self {
        Self::UpdatePivot(value)
    }
}
