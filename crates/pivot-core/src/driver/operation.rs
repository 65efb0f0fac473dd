mod attach;
pub use attach::Attach;

mod detach;
pub use detach::Detach;

mod query_pivot;
pub use query_pivot::QueryPivot;

mod save_pivot;
pub use save_pivot::SavePivot;

mod update_pivot;
pub use update_pivot::UpdatePivot;

use crate::stmt::{Attributes, Id, IdsInput};

/// A primitive executed by the underlying relation.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Create association rows
    Attach(Attach),

    /// Remove association rows
    Detach(Detach),

    /// Pluck the related key of every currently related record
    QueryRelatedIds,

    /// Fetch pivot rows by related key
    QueryPivot(QueryPivot),

    /// Update pivot rows by related key
    UpdatePivot(UpdatePivot),

    /// Load the pivot rows currently attached to the owner through the
    /// custom pivot row type. Extra pivot filters do not apply.
    LoadPivots,

    /// Insert or update one pivot row through the custom pivot row type
    SavePivot(SavePivot),

    /// Bump the owner's timestamp if the relation touches its owner
    Touch,
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attach(_) => "attach",
            Self::Detach(_) => "detach",
            Self::QueryRelatedIds => "query_related_ids",
            Self::QueryPivot(_) => "query_pivot",
            Self::UpdatePivot(_) => "update_pivot",
            Self::LoadPivots => "load_pivots",
            Self::SavePivot(_) => "save_pivot",
            Self::Touch => "touch",
        }
    }

    pub fn as_update_pivot(&self) -> Option<&UpdatePivot> {
        match self {
            Self::UpdatePivot(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_save_pivot(&self) -> Option<&SavePivot> {
        match self {
            Self::SavePivot(op) => Some(op),
            _ => None,
        }
    }
}
