use super::{BelongsToMany, PivotFilter};
use crate::{stmt::Value, Error, Result};

/// Builds a [`BelongsToMany`] relation descriptor.
#[derive(Debug)]
pub struct Builder {
    name: String,
    table: Option<String>,
    foreign_pivot_key: Option<String>,
    related_pivot_key: Option<String>,
    pivot_columns: Vec<String>,
    timestamps: bool,
    created_at: String,
    updated_at: String,
    using: Option<String>,
    pivot_filters: Vec<PivotFilter>,
}

impl Builder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            foreign_pivot_key: None,
            related_pivot_key: None,
            pivot_columns: vec![],
            timestamps: false,
            created_at: "created_at".to_owned(),
            updated_at: "updated_at".to_owned(),
            using: None,
            pivot_filters: vec![],
        }
    }

    /// Set the pivot table name. Defaults to the relation name.
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    /// Set the pivot columns holding the owning and related keys.
    pub fn keys(
        &mut self,
        foreign_pivot_key: impl Into<String>,
        related_pivot_key: impl Into<String>,
    ) -> &mut Self {
        self.foreign_pivot_key = Some(foreign_pivot_key.into());
        self.related_pivot_key = Some(related_pivot_key.into());
        self
    }

    /// Track extra pivot columns.
    pub fn with_pivot<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for column in columns {
            let column = column.into();
            if !self.pivot_columns.contains(&column) {
                self.pivot_columns.push(column);
            }
        }
        self
    }

    /// Track the created and updated timestamp columns.
    pub fn with_timestamps(&mut self) -> &mut Self {
        self.timestamps = true;
        self
    }

    /// Rename the timestamp columns.
    pub fn timestamp_columns(
        &mut self,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> &mut Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }

    /// Represent pivot rows with a custom row type.
    pub fn using(&mut self, pivot_type: impl Into<String>) -> &mut Self {
        self.using = Some(pivot_type.into());
        self
    }

    /// Filter pivot statements by `column = value`.
    pub fn where_pivot(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.pivot_filters.push(PivotFilter::Eq {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// Filter pivot statements by `column IN (values)`.
    pub fn where_pivot_in<V: Into<Value>>(
        &mut self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        self.pivot_filters.push(PivotFilter::In {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(&self) -> Result<BelongsToMany> {
        let (Some(foreign_pivot_key), Some(related_pivot_key)) =
            (&self.foreign_pivot_key, &self.related_pivot_key)
        else {
            return Err(Error::invalid_schema(format!(
                "relation `{}` is missing its pivot keys",
                self.name
            )));
        };

        if self.name.is_empty() {
            return Err(Error::invalid_schema("relation name must not be empty"));
        }

        if foreign_pivot_key.is_empty() || related_pivot_key.is_empty() {
            return Err(Error::invalid_schema(format!(
                "relation `{}` has an empty pivot key",
                self.name
            )));
        }

        if foreign_pivot_key == related_pivot_key {
            return Err(Error::invalid_schema(format!(
                "relation `{}` uses `{foreign_pivot_key}` for both pivot keys",
                self.name
            )));
        }

        if self.created_at == self.updated_at {
            return Err(Error::invalid_schema(format!(
                "relation `{}` uses `{}` for both timestamp columns",
                self.name, self.created_at
            )));
        }

        let mut pivot_columns = self.pivot_columns.clone();

        if self.timestamps {
            for column in [&self.created_at, &self.updated_at] {
                if !pivot_columns.contains(column) {
                    pivot_columns.push(column.clone());
                }
            }
        }

        Ok(BelongsToMany {
            name: self.name.clone(),
            table: self.table.clone().unwrap_or_else(|| self.name.clone()),
            foreign_pivot_key: foreign_pivot_key.clone(),
            related_pivot_key: related_pivot_key.clone(),
            pivot_columns,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            using: self.using.clone(),
            pivot_filters: self.pivot_filters.clone(),
        })
    }
}
