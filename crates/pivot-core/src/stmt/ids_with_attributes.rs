use super::{Attributes, Id};

use indexmap::IndexMap;

/// Normalized identifiers, each mapped to the attributes to write for it.
///
/// Identifiers are unique and keep the order in which they were first seen.
/// The identifier set is the key set of the map, so the two can never
/// disagree.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IdsWithAttributes {
    entries: IndexMap<Id, Attributes>,
}

impl IdsWithAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attributes for `id`.
    ///
    /// Integer-valued string identifiers are stored as integers, so `5` and
    /// `"5"` name the same entry. A repeated identifier keeps its first
    /// position and takes the latest attributes.
    pub fn insert(&mut self, id: Id, attributes: Attributes) {
        self.entries.insert(id.canonicalize(), attributes);
    }

    /// The identifier set, in first-seen order.
    pub fn ids(&self) -> Vec<Id> {
        self.entries.keys().cloned().collect()
    }

    pub fn get(&self, id: &Id) -> Option<&Attributes> {
        self.entries.get(&id.clone().canonicalize())
    }

    pub fn first_id(&self) -> Option<&Id> {
        self.entries.keys().next()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &Attributes)> + '_ {
        self.entries.iter()
    }
}

impl FromIterator<(Id, Attributes)> for IdsWithAttributes {
    fn from_iter<T: IntoIterator<Item = (Id, Attributes)>>(iter: T) -> Self {
        let mut ret = Self::new();
        for (id, attributes) in iter {
            ret.insert(id, attributes);
        }
        ret
    }
}
