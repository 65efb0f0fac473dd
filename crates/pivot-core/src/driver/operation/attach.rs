use super::*;

/// Insert association rows through the underlying relation.
#[derive(Debug, Clone)]
pub struct Attach {
    /// Identifier input exactly as the caller supplied it
    pub ids: IdsInput,

    /// Attributes to write to every new pivot row
    pub attributes: Attributes,

    /// Whether to touch the owning record
    pub touch: bool,
}

impl From<Attach> for Operation {
    fn from(value: Attach) -> Self {
        Self::Attach(value)
    }
}
