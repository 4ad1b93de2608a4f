//! The ordered collection of records returned by a range search.

use std::fmt;

use crate::kml::{to_kml, Placemark};

/// An append-only, insertion-ordered list of borrowed records.
///
/// Records stay owned by the tree; the list only holds shared references to them.
#[derive(Debug, Clone)]
pub struct RecordList<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> RecordList<'a, T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a record to the end of the list.
    pub fn push(&mut self, item: &'a T) {
        self.items.push(item);
    }

    /// The record at `index`, or `None` if the index is past the end.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }
}

impl<'a, T: Placemark> RecordList<'a, T> {
    /// Render the records, in order, as a KML document.
    pub fn to_kml(&self) -> String {
        to_kml(self.iter())
    }
}

impl<T> Default for RecordList<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for RecordList<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> FromIterator<&'a T> for RecordList<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for RecordList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}
