use super::{Attributes, Id, Value};

/// A persisted pivot table record.
///
/// The row keeps the attributes it was loaded with so callers can tell
/// whether filling new values would change anything.
#[derive(Debug, Default, Clone)]
pub struct PivotRow {
    attributes: Attributes,
    original: Attributes,
}

impl PivotRow {
    /// Creates a row from values as they are stored in the database.
    pub fn from_stored(attributes: Attributes) -> Self {
        Self {
            original: attributes.clone(),
            attributes,
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.attributes.get(column)
    }

    /// Reads `column` as a record identifier.
    pub fn id(&self, column: &str) -> Option<Id> {
        self.get(column).and_then(Id::from_value)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Applies `attributes` over the current values.
    pub fn fill(&mut self, attributes: &Attributes) -> &mut Self {
        self.attributes.extend(attributes.clone());
        self
    }

    /// Returns `true` if any column differs from the stored values.
    pub fn is_dirty(&self) -> bool {
        self.attributes
            .iter()
            .any(|(column, value)| match self.original.get(column) {
                Some(original) => !original.is_equivalent(value),
                None => true,
            })
    }

    /// Returns `true` if filling `attributes` would make the row dirty.
    ///
    /// The check runs against a transient copy; `self` is left untouched.
    pub fn would_change(&self, attributes: &Attributes) -> bool {
        let mut copy = self.clone();
        copy.fill(attributes).is_dirty()
    }

    /// Marks the current values as stored.
    pub fn sync_original(&mut self) {
        self.original = self.attributes.clone();
    }
}

impl PartialEq for PivotRow {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}
