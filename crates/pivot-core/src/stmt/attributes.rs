use super::Value;

use indexmap::IndexMap;
use std::ops;

/// Column values to write to a pivot row, in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes {
    columns: IndexMap<String, Value>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Sets `column`, returning the value it replaced.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.columns.insert(column.into(), value.into())
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.columns.shift_remove(column)
    }

    /// Returns a new set holding `self` overridden by `overrides`.
    ///
    /// Columns present in both take the value from `overrides`; columns only
    /// in `overrides` are appended after the columns of `self`.
    pub fn merge(&self, overrides: &Attributes) -> Attributes {
        let mut merged = self.clone();
        merged.extend(overrides.clone());
        merged
    }

    /// Returns a copy without the given columns.
    pub fn without<'a>(&self, columns: impl IntoIterator<Item = &'a str>) -> Attributes {
        let mut ret = self.clone();
        for column in columns {
            ret.remove(column);
        }
        ret
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl ops::Deref for Attributes {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.columns
    }
}

impl Extend<(String, Value)> for Attributes {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.columns.extend(iter);
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(src: [(K, V); N]) -> Self {
        src.into_iter().collect()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
