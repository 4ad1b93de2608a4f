use std::fmt;

use crate::r#type::CoordNum;

/// The result of a nearest-neighbor search.
///
/// A search over an empty tree yields no item and a distance of `N::max_value()`.
#[derive(Debug)]
pub struct Neighbor<'a, N: CoordNum, T> {
    pub(crate) item: Option<&'a T>,
    pub(crate) distance: N,
}

impl<'a, N: CoordNum, T> Neighbor<'a, N, T> {
    /// The closest item found, if the tree was not empty.
    pub fn item(&self) -> Option<&'a T> {
        self.item
    }

    /// Euclidean distance from the query point to [`item`][Neighbor::item].
    pub fn distance(&self) -> N {
        self.distance
    }

    /// Returns `true` if an item was found.
    pub fn is_found(&self) -> bool {
        self.item.is_some()
    }

    /// Record `item` as the new best candidate if it is strictly closer.
    #[inline]
    pub(crate) fn offer(&mut self, item: &'a T, distance: N) {
        if distance < self.distance {
            self.distance = distance;
            self.item = Some(item);
        }
    }
}

impl<N: CoordNum, T> Clone for Neighbor<'_, N, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: CoordNum, T> Copy for Neighbor<'_, N, T> {}

impl<N: CoordNum, T> Default for Neighbor<'_, N, T> {
    fn default() -> Self {
        Self {
            item: None,
            distance: N::max_value(),
        }
    }
}

impl<N: CoordNum, T: fmt::Display> fmt::Display for Neighbor<'_, N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item {
            Some(item) => write!(f, "Nearest Crime: {}, Distance: {}", item, self.distance),
            None => write!(f, "Nearest Crime: none, Distance: {}", self.distance),
        }
    }
}
