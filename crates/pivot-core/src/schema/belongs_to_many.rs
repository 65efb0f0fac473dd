use super::{Builder, PivotFilter};

/// Describes a many-to-many relation and its pivot table.
#[derive(Debug, Clone, PartialEq)]
pub struct BelongsToMany {
    /// Name of the relation, as reported in pivot events.
    pub name: String,

    /// Pivot table name
    pub table: String,

    /// Pivot column holding the owning record's key
    pub foreign_pivot_key: String,

    /// Pivot column holding the related record's key
    pub related_pivot_key: String,

    /// Extra pivot columns tracked by the relation, including timestamp
    /// columns when timestamps are enabled.
    pub pivot_columns: Vec<String>,

    /// Name of the "created" timestamp column
    pub created_at: String,

    /// Name of the "updated" timestamp column
    pub updated_at: String,

    /// Name of the custom pivot row type, if one is configured.
    pub using: Option<String>,

    /// Extra predicates every pivot statement is filtered by.
    pub pivot_filters: Vec<PivotFilter>,
}

impl BelongsToMany {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    /// Returns `true` if the "updated" timestamp column is tracked.
    pub fn tracks_updated_at(&self) -> bool {
        self.pivot_columns.iter().any(|c| *c == self.updated_at)
    }

    /// Returns `true` if the "created" timestamp column is tracked.
    pub fn tracks_created_at(&self) -> bool {
        self.pivot_columns.iter().any(|c| *c == self.created_at)
    }

    /// The timestamp columns this relation maintains.
    ///
    /// A column named like a timestamp that the relation does not track is
    /// an ordinary pivot column.
    pub fn tracked_timestamp_columns(&self) -> impl Iterator<Item = &str> + '_ {
        [&self.created_at, &self.updated_at]
            .into_iter()
            .filter(move |column| self.pivot_columns.contains(column))
            .map(String::as_str)
    }

    pub fn is_timestamp_column(&self, column: &str) -> bool {
        self.tracked_timestamp_columns().any(|c| c == column)
    }

    /// Returns `true` if pivot rows are represented by a custom row type.
    pub fn uses_custom_pivot(&self) -> bool {
        self.using.is_some()
    }

    pub fn has_pivot_filters(&self) -> bool {
        !self.pivot_filters.is_empty()
    }
}
