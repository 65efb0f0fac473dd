use super::*;

/// Remove association rows through the underlying relation.
#[derive(Debug, Clone)]
pub struct Detach {
    /// Identifiers to detach. `None` detaches every related record.
    pub ids: Option<IdsInput>,

    /// Whether to touch the owning record
    pub touch: bool,
}

impl From<Detach> for Operation {
    fn from(value: Detach) -> Self {
        Self::Detach(value)
    }
}
