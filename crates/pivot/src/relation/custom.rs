use super::BelongsToMany;
use crate::Result;

use pivot_core::{
    driver::{operation::SavePivot, Driver, Operation},
    stmt::{Attributes, IdsWithAttributes},
    EventSink,
};
use tracing::debug;

impl<D: Driver, S: EventSink> BelongsToMany<D, S> {
    /// Pivot update through the relation's custom pivot row type.
    ///
    /// The current row is found among the owner's attached pivots, which are
    /// loaded without the relation's extra filters. A change is detected by
    /// filling a copy of that row; a missing row never counts as changed.
    /// The row is then saved by its composite key, maintaining timestamps
    /// only when something changed.
    pub(super) async fn update_existing_pivot_using_custom_class(
        &self,
        ids_attributes: &IdsWithAttributes,
        attributes: &Attributes,
        touch: bool,
    ) -> Result<u64> {
        let schema = self.schema();

        let Some(related) = ids_attributes.first_id() else {
            debug!(relation = self.name(), "no pivot identifier to update");
            self.touch_if_requested(touch).await?;
            return Ok(0);
        };

        let parent_key = self.driver.parent_key().to_value();
        let related_key = related.to_value();

        let current = self
            .driver
            .exec(Operation::LoadPivots)
            .await?
            .into_values()?
            .into_iter()
            .find(|pivot| {
                pivot
                    .get(&schema.foreign_pivot_key)
                    .is_some_and(|key| key.is_equivalent(&parent_key))
                    && pivot
                        .get(&schema.related_pivot_key)
                        .is_some_and(|key| key.is_equivalent(&related_key))
            });

        let updated = current
            .as_ref()
            .is_some_and(|pivot| pivot.would_change(attributes));

        let timestamps = updated && schema.tracks_updated_at();

        self.driver
            .exec(
                SavePivot {
                    related: related.clone(),
                    attributes: attributes.clone(),
                    timestamps,
                }
                .into(),
            )
            .await?;

        debug!(
            relation = self.name(),
            related = %related,
            updated,
            timestamps,
            "saved pivot through custom pivot type"
        );

        self.touch_if_requested(touch).await?;

        Ok(u64::from(updated))
    }
}
