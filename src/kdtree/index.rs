use geo_traits::CoordTrait;

use crate::kdtree::Node;
use crate::r#type::{Coord, CoordNum};

/// A 2-d tree owning one item per inserted coordinate.
///
/// Build it with [`insert`][KDTree::insert] (or [`Extend`]/[`FromIterator`]) and query it with
/// [`range`][KDTree::range], [`nearest`][KDTree::nearest] or one of the traversal orders.
#[derive(Debug)]
pub struct KDTree<N: CoordNum, T> {
    pub(crate) root: Option<Box<Node<N, T>>>,
    pub(crate) num_items: usize,
}

impl<N: CoordNum, T> KDTree<N, T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            num_items: 0,
        }
    }

    /// The number of items in this tree.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree; 0 when empty.
    ///
    /// Sorted input degrades the tree towards a list, in which case this approaches
    /// [`len`][KDTree::len].
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = vec![];
        level.extend(self.root.as_deref());
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node: &Node<N, T>| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Access the root node for manual traversal.
    pub fn root(&self) -> Option<&Node<N, T>> {
        self.root.as_deref()
    }

    /// Add an item at the given point.
    ///
    /// Always succeeds: duplicates are kept, and a value equal to a node's value on that node's
    /// split axis goes into its right subtree.
    pub fn insert(&mut self, x: N, y: N, item: T) {
        let coord = Coord::new(x, y);

        // walk down to the empty child slot, switching axis on each level
        let mut slot = &mut self.root;
        let mut axis = 0;
        while let Some(node) = slot {
            slot = if coord.value(axis) < node.coord.value(axis) {
                &mut node.left
            } else {
                &mut node.right
            };
            axis = 1 - axis;
        }

        *slot = Some(Box::new(Node::new(coord, item)));
        self.num_items += 1;
    }

    /// Add an item at the given coordinate.
    pub fn insert_coord(&mut self, coord: &impl CoordTrait<T = N>, item: T) {
        self.insert(coord.x(), coord.y(), item)
    }
}

impl<N: CoordNum, T> Drop for KDTree<N, T> {
    fn drop(&mut self) {
        // Unlink children before each box drops so teardown never recurses, even when sorted
        // input has degraded the tree to a list.
        let mut stack: Vec<Box<Node<N, T>>> = vec![];
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<N: CoordNum, T> Default for KDTree<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: CoordNum, T> Extend<(Coord<N>, T)> for KDTree<N, T> {
    fn extend<I: IntoIterator<Item = (Coord<N>, T)>>(&mut self, iter: I) {
        for (coord, item) in iter {
            self.insert(coord.x, coord.y, item);
        }
    }
}

impl<N: CoordNum, T> FromIterator<(Coord<N>, T)> for KDTree<N, T> {
    fn from_iter<I: IntoIterator<Item = (Coord<N>, T)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
