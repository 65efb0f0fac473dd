//! Pivot lifecycle events for many-to-many relations.
//!
//! [`BelongsToMany`] wraps an existing relation [`Driver`] and emits a
//! [`PivotEvent`] around every attach, detach and pivot update. Pivot
//! updates only bump the "updated" timestamp when a caller-supplied column
//! really changed.

pub mod normalize;
pub use normalize::ids_with_attributes;

pub mod relation;
pub use relation::BelongsToMany;

pub use pivot_core::{
    driver::{self, Driver},
    event::{self, EventSink, PivotEvent},
    schema,
    stmt::{self, Attributes, Id, IdEntry, IdsInput, IdsWithAttributes, Model, PivotRow, Value},
    Error, Result,
};
