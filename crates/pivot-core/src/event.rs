use crate::stmt::{Id, IdsWithAttributes, PivotRow};

use std::sync::Arc;
use tokio::sync::mpsc;

/// Lifecycle notification emitted around pivot operations.
///
/// Every variant carries the relation name and the normalized identifier
/// set. Before-events (`*ing`) are emitted ahead of the underlying
/// primitive, after-events (`*ed`) once it returns.
#[derive(Debug, Clone, PartialEq)]
pub enum PivotEvent {
    Attaching {
        relation: String,
        ids: Vec<Id>,
        ids_attributes: IdsWithAttributes,
    },

    Attached {
        relation: String,
        ids: Vec<Id>,
        ids_attributes: IdsWithAttributes,
    },

    Detaching {
        relation: String,
        ids: Vec<Id>,
    },

    /// `pivots` holds the rows as they were before deletion.
    Detached {
        relation: String,
        ids: Vec<Id>,
        pivots: Vec<PivotRow>,
    },

    Updating {
        relation: String,
        ids: Vec<Id>,
        ids_attributes: IdsWithAttributes,
    },

    /// Only emitted when a non-timestamp column actually changed.
    /// `original` is the row read before the update, if one matched.
    Updated {
        relation: String,
        ids: Vec<Id>,
        ids_attributes: IdsWithAttributes,
        original: Option<PivotRow>,
    },
}

impl PivotEvent {
    /// The event name listeners subscribe to.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attaching { .. } => "pivotAttaching",
            Self::Attached { .. } => "pivotAttached",
            Self::Detaching { .. } => "pivotDetaching",
            Self::Detached { .. } => "pivotDetached",
            Self::Updating { .. } => "pivotUpdating",
            Self::Updated { .. } => "pivotUpdated",
        }
    }

    /// Returns `true` for events emitted before the underlying primitive runs.
    pub fn is_before(&self) -> bool {
        matches!(
            self,
            Self::Attaching { .. } | Self::Detaching { .. } | Self::Updating { .. }
        )
    }

    pub fn relation(&self) -> &str {
        match self {
            Self::Attaching { relation, .. }
            | Self::Attached { relation, .. }
            | Self::Detaching { relation, .. }
            | Self::Detached { relation, .. }
            | Self::Updating { relation, .. }
            | Self::Updated { relation, .. } => relation,
        }
    }

    pub fn ids(&self) -> &[Id] {
        match self {
            Self::Attaching { ids, .. }
            | Self::Attached { ids, .. }
            | Self::Detaching { ids, .. }
            | Self::Detached { ids, .. }
            | Self::Updating { ids, .. }
            | Self::Updated { ids, .. } => ids,
        }
    }

    pub fn ids_attributes(&self) -> Option<&IdsWithAttributes> {
        match self {
            Self::Attaching { ids_attributes, .. }
            | Self::Attached { ids_attributes, .. }
            | Self::Updating { ids_attributes, .. }
            | Self::Updated { ids_attributes, .. } => Some(ids_attributes),
            Self::Detaching { .. } | Self::Detached { .. } => None,
        }
    }
}

/// Receives pivot events.
///
/// Delivery is fire-and-forget: nothing returned by a sink is observed by
/// the operation that emitted the event.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: PivotEvent);
}

/// Creates a sink that calls `f` for every event.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(PivotEvent) + Send + Sync,
{
    FromFn(f)
}

/// Sink returned by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<F> EventSink for FromFn<F>
where
    F: Fn(PivotEvent) + Send + Sync,
{
    fn emit(&self, event: PivotEvent) {
        (self.0)(event)
    }
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: PivotEvent) {
        (**self).emit(event)
    }
}

impl EventSink for mpsc::UnboundedSender<PivotEvent> {
    fn emit(&self, event: PivotEvent) {
        // A closed receiver means nobody is listening anymore.
        let _ = self.send(event);
    }
}
