use super::BelongsToMany;
use crate::{normalize::ids_with_attributes, Result};

use pivot_core::{
    driver::{operation::UpdatePivot, Driver},
    stmt::{Attributes, IdsInput},
    EventSink, PivotEvent,
};
use tracing::debug;

impl<D: Driver, S: EventSink> BelongsToMany<D, S> {
    /// Update the pivot row of an attached record.
    ///
    /// `pivotUpdating` is always emitted. The caller's columns are written
    /// first, without the relation's tracked timestamp columns. Only if that write changed a row is the
    /// "updated" timestamp written, in a second statement, and
    /// `pivotUpdated` emitted with the row as it was before the update.
    /// The two statements are not atomic unless the driver runs them in a
    /// transaction.
    ///
    /// Returns the number of rows whose non-timestamp columns changed.
    pub async fn update_existing_pivot(
        &self,
        id: impl Into<IdsInput>,
        attributes: Attributes,
        touch: bool,
    ) -> Result<u64> {
        let id = id.into();
        let ids_attributes = ids_with_attributes(&id, &attributes);
        let ids_only = ids_attributes.ids();

        self.emit(PivotEvent::Updating {
            relation: self.name().to_owned(),
            ids: ids_only.clone(),
            ids_attributes: ids_attributes.clone(),
        });

        let schema = self.schema();

        if schema.uses_custom_pivot() && !schema.has_pivot_filters() {
            return self
                .update_existing_pivot_using_custom_class(&ids_attributes, &attributes, touch)
                .await;
        }

        let original = self.query_pivot(&ids_only).await?.into_iter().next();

        let assignments = attributes.without(schema.tracked_timestamp_columns());

        let updated = if assignments.is_empty() {
            0
        } else {
            self.driver
                .exec(
                    UpdatePivot {
                        ids: ids_only.clone(),
                        assignments,
                    }
                    .into(),
                )
                .await?
                .into_count()?
        };

        let touch_timestamp = updated > 0 && schema.tracks_updated_at();

        if touch_timestamp {
            let mut timestamps = Attributes::new();
            timestamps.insert(schema.updated_at.clone(), jiff::Timestamp::now());

            self.driver
                .exec(
                    UpdatePivot {
                        ids: ids_only.clone(),
                        assignments: timestamps,
                    }
                    .into(),
                )
                .await?;
        }

        debug!(
            relation = self.name(),
            ids = ?ids_only,
            updated,
            touch_timestamp,
            "updated existing pivot"
        );

        self.touch_if_requested(touch).await?;

        if updated > 0 {
            self.emit(PivotEvent::Updated {
                relation: self.name().to_owned(),
                ids: ids_only,
                ids_attributes,
                original,
            });
        }

        Ok(updated)
    }
}
