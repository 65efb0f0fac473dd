use super::*;

/// Persist a pivot row through the relation's custom pivot row type.
///
/// The row is keyed by (owner key, `related`). If it exists its columns are
/// updated, otherwise it is inserted. When `timestamps` is set the row type
/// maintains its timestamp columns as part of the save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavePivot {
    pub related: Id,

    pub attributes: Attributes,

    pub timestamps: bool,
}

impl From<SavePivot> for Operation {
    fn from(value: SavePivot) -> Self {
        Self::SavePivot(value)
    }
}
