use crate::{normalize::ids_with_attributes, Result};

use pivot_core::{
    driver::{
        operation::{Attach, Detach, QueryPivot},
        Driver, Operation, Response,
    },
    schema,
    stmt::{Attributes, Id, IdsInput},
    EventSink, PivotEvent,
};
use tracing::{debug, trace};

/// A many-to-many relation that emits pivot events.
///
/// Wraps the underlying relation `D` and reports attach, detach and pivot
/// updates to `S`. Every primitive is forwarded to the driver unchanged;
/// driver errors are returned as-is and stop the operation.
#[derive(Debug)]
pub struct BelongsToMany<D, S> {
    pub(super) driver: D,
    pub(super) events: S,
}

impl<D: Driver, S: EventSink> BelongsToMany<D, S> {
    pub fn new(driver: D, events: S) -> Self {
        Self { driver, events }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn schema(&self) -> &schema::BelongsToMany {
        self.driver.schema()
    }

    /// Name of the relation, as reported in events.
    pub fn name(&self) -> &str {
        &self.schema().name
    }

    /// Attach related records to the owner.
    ///
    /// Emits `pivotAttaching` before and `pivotAttached` after the underlying
    /// attach, whether or not it inserted anything. Returns the driver's
    /// response unchanged.
    pub async fn attach(
        &self,
        ids: impl Into<IdsInput>,
        attributes: Attributes,
        touch: bool,
    ) -> Result<Response> {
        let ids = ids.into();
        let ids_attributes = ids_with_attributes(&ids, &attributes);
        let ids_only = ids_attributes.ids();

        debug!(relation = self.name(), ids = ?ids_only, "attaching pivot rows");

        self.emit(PivotEvent::Attaching {
            relation: self.name().to_owned(),
            ids: ids_only.clone(),
            ids_attributes: ids_attributes.clone(),
        });

        let response = self
            .driver
            .exec(
                Attach {
                    ids,
                    attributes,
                    touch,
                }
                .into(),
            )
            .await?;

        self.emit(PivotEvent::Attached {
            relation: self.name().to_owned(),
            ids: ids_only,
            ids_attributes,
        });

        Ok(response)
    }

    /// Detach related records from the owner.
    ///
    /// With `ids` set to `None`, every currently related record is detached.
    /// The pivot rows are read before deletion so `pivotDetached` can carry
    /// them. Returns the number of rows the driver reports as deleted.
    pub async fn detach(&self, ids: Option<IdsInput>, touch: bool) -> Result<u64> {
        let ids = match ids {
            Some(ids) => ids,
            None => IdsInput::list(self.driver.exec(Operation::QueryRelatedIds).await?.into_ids()?),
        };

        let ids_only = ids_with_attributes(&ids, &Attributes::new()).ids();

        let pivots = self.query_pivot(&ids_only).await?;

        debug!(
            relation = self.name(),
            ids = ?ids_only,
            pivots = pivots.len(),
            "detaching pivot rows"
        );

        self.emit(PivotEvent::Detaching {
            relation: self.name().to_owned(),
            ids: ids_only.clone(),
        });

        let detached = self
            .driver
            .exec(
                Detach {
                    ids: Some(ids),
                    touch,
                }
                .into(),
            )
            .await?
            .into_count()?;

        self.emit(PivotEvent::Detached {
            relation: self.name().to_owned(),
            ids: ids_only,
            pivots,
        });

        Ok(detached)
    }

    pub(super) async fn query_pivot(&self, ids: &[Id]) -> Result<Vec<pivot_core::stmt::PivotRow>> {
        self.driver
            .exec(QueryPivot { ids: ids.to_vec() }.into())
            .await?
            .into_values()
    }

    pub(super) async fn touch_if_requested(&self, touch: bool) -> Result<()> {
        if touch {
            self.driver.exec(Operation::Touch).await?;
        }
        Ok(())
    }

    pub(super) fn emit(&self, event: PivotEvent) {
        trace!(event = event.name(), relation = event.relation(), "emitting pivot event");
        self.events.emit(event);
    }
}
