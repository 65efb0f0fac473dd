use super::{Attributes, Id, Value};

use std::{fmt, sync::Arc};

/// A record that can be attached to a relation.
pub trait Model: fmt::Debug + Send + Sync {
    /// The record's primary key.
    fn key(&self) -> Id;
}

/// Identifier input accepted by pivot operations.
///
/// Callers pass related records in several shapes. The shape decides how
/// identifiers and per-identifier attributes are extracted.
#[derive(Debug, Clone)]
pub enum IdsInput {
    /// A single record
    Model(Arc<dyn Model>),

    /// A collection of records
    Collection(Vec<Arc<dyn Model>>),

    /// Keyed input: each entry is either a bare identifier or an identifier
    /// carrying its own attributes.
    Map(Vec<IdEntry>),

    /// A bare scalar. Integers and strings identify a record; anything else
    /// identifies nothing.
    Scalar(Value),
}

/// One entry of [`IdsInput::Map`].
#[derive(Debug, Clone, PartialEq)]
pub enum IdEntry {
    /// A plain identifier.
    Id(Id),

    /// An identifier with attributes that override the operation's base
    /// attributes.
    WithAttributes(Id, Attributes),
}

impl IdsInput {
    pub fn model(model: impl Model + 'static) -> Self {
        Self::Model(Arc::new(model))
    }

    pub fn collection<M: Model + 'static>(models: impl IntoIterator<Item = M>) -> Self {
        Self::Collection(
            models
                .into_iter()
                .map(|model| Arc::new(model) as Arc<dyn Model>)
                .collect(),
        )
    }

    /// A list of bare identifiers.
    pub fn list<I: Into<Id>>(ids: impl IntoIterator<Item = I>) -> Self {
        Self::Map(ids.into_iter().map(|id| IdEntry::Id(id.into())).collect())
    }

    /// Identifiers each carrying their own attributes.
    pub fn with_attributes<I: Into<Id>>(entries: impl IntoIterator<Item = (I, Attributes)>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(id, attributes)| IdEntry::WithAttributes(id.into(), attributes))
                .collect(),
        )
    }
}

impl From<Id> for IdsInput {
    fn from(src: Id) -> Self {
        Self::Scalar(src.into())
    }
}

impl From<i64> for IdsInput {
    fn from(src: i64) -> Self {
        Self::Scalar(src.into())
    }
}

impl From<i32> for IdsInput {
    fn from(src: i32) -> Self {
        Self::Scalar(src.into())
    }
}

impl From<&str> for IdsInput {
    fn from(src: &str) -> Self {
        Self::Scalar(src.into())
    }
}

impl From<String> for IdsInput {
    fn from(src: String) -> Self {
        Self::Scalar(src.into())
    }
}

impl From<Value> for IdsInput {
    fn from(src: Value) -> Self {
        Self::Scalar(src)
    }
}

impl From<Vec<Id>> for IdsInput {
    fn from(src: Vec<Id>) -> Self {
        Self::list(src)
    }
}

impl From<Vec<i64>> for IdsInput {
    fn from(src: Vec<i64>) -> Self {
        Self::list(src)
    }
}

impl From<Vec<IdEntry>> for IdsInput {
    fn from(src: Vec<IdEntry>) -> Self {
        Self::Map(src)
    }
}

impl From<Arc<dyn Model>> for IdsInput {
    fn from(src: Arc<dyn Model>) -> Self {
        Self::Model(src)
    }
}

impl From<Vec<Arc<dyn Model>>> for IdsInput {
    fn from(src: Vec<Arc<dyn Model>>) -> Self {
        Self::Collection(src)
    }
}
