//! Utilities to traverse the KDTree structure.

use std::fmt;

use crate::collections::{Queue, Stack};
use crate::kdtree::KDTree;
use crate::r#type::{Coord, CoordNum};

/// A node in the KDTree.
///
/// Each node exclusively owns its two subtrees. Nodes are never modified after creation except
/// to attach a new child.
#[derive(Debug)]
pub struct Node<N: CoordNum, T> {
    pub(crate) coord: Coord<N>,
    pub(crate) item: T,
    pub(crate) left: Option<Box<Node<N, T>>>,
    pub(crate) right: Option<Box<Node<N, T>>>,
}

impl<N: CoordNum, T> Node<N, T> {
    pub(crate) fn new(coord: Coord<N>, item: T) -> Self {
        Self {
            coord,
            item,
            left: None,
            right: None,
        }
    }

    /// The point this node was inserted at.
    pub fn coord(&self) -> &Coord<N> {
        &self.coord
    }

    /// The item stored at this node.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The subtree strictly less than this node on its split axis.
    pub fn left(&self) -> Option<&Node<N, T>> {
        self.left.as_deref()
    }

    /// The subtree greater than or equal to this node on its split axis.
    pub fn right(&self) -> Option<&Node<N, T>> {
        self.right.as_deref()
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
    /// Breadth first, left to right within a level.
    LevelOrder,
    /// Breadth first from the deepest level up, left to right within a level.
    ReverseLevelOrder,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inorder => "Inorder",
            Self::Preorder => "Preorder",
            Self::Postorder => "Postorder",
            Self::LevelOrder => "Level order",
            Self::ReverseLevelOrder => "Reverse level order",
        };
        f.write_str(name)
    }
}

impl<N: CoordNum, T> KDTree<N, T> {
    /// Visit every node once in the given order, passing its coordinate and item to `visit`.
    pub fn traverse(&self, order: TraversalOrder, visit: impl FnMut(&Coord<N>, &T)) {
        match order {
            TraversalOrder::Inorder => self.inorder(visit),
            TraversalOrder::Preorder => self.preorder(visit),
            TraversalOrder::Postorder => self.postorder(visit),
            TraversalOrder::LevelOrder => self.level_order(visit),
            TraversalOrder::ReverseLevelOrder => self.reverse_level_order(visit),
        }
    }

    /// Visit every node: left subtree, node, right subtree.
    pub fn inorder(&self, mut visit: impl FnMut(&Coord<N>, &T)) {
        inorder(self.root(), &mut visit);
    }

    /// Visit every node: node, left subtree, right subtree.
    pub fn preorder(&self, mut visit: impl FnMut(&Coord<N>, &T)) {
        preorder(self.root(), &mut visit);
    }

    /// Visit every node: left subtree, right subtree, node.
    pub fn postorder(&self, mut visit: impl FnMut(&Coord<N>, &T)) {
        postorder(self.root(), &mut visit);
    }

    /// Visit every node breadth first, left child before right child.
    pub fn level_order(&self, mut visit: impl FnMut(&Coord<N>, &T)) {
        let Some(root) = self.root() else {
            return;
        };

        let mut queue = Queue::new();
        queue.enqueue(root);
        while let Some(node) = queue.dequeue() {
            visit(&node.coord, &node.item);
            if let Some(left) = node.left() {
                queue.enqueue(left);
            }
            if let Some(right) = node.right() {
                queue.enqueue(right);
            }
        }
    }

    /// Visit every node level by level from the deepest level up, left to right within a level.
    ///
    /// This is the reverse of a breadth first walk that takes right children before left ones.
    pub fn reverse_level_order(&self, mut visit: impl FnMut(&Coord<N>, &T)) {
        let Some(root) = self.root() else {
            return;
        };

        // breadth first with right before left, then unwind
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        queue.enqueue(root);
        while let Some(node) = queue.dequeue() {
            stack.push(node);
            if let Some(right) = node.right() {
                queue.enqueue(right);
            }
            if let Some(left) = node.left() {
                queue.enqueue(left);
            }
        }

        while let Some(node) = stack.pop() {
            visit(&node.coord, &node.item);
        }
    }
}

fn inorder<N: CoordNum, T, F: FnMut(&Coord<N>, &T)>(node: Option<&Node<N, T>>, visit: &mut F) {
    if let Some(node) = node {
        inorder(node.left(), visit);
        visit(&node.coord, &node.item);
        inorder(node.right(), visit);
    }
}

fn preorder<N: CoordNum, T, F: FnMut(&Coord<N>, &T)>(node: Option<&Node<N, T>>, visit: &mut F) {
    if let Some(node) = node {
        visit(&node.coord, &node.item);
        preorder(node.left(), visit);
        preorder(node.right(), visit);
    }
}

fn postorder<N: CoordNum, T, F: FnMut(&Coord<N>, &T)>(node: Option<&Node<N, T>>, visit: &mut F) {
    if let Some(node) = node {
        postorder(node.left(), visit);
        postorder(node.right(), visit);
        visit(&node.coord, &node.item);
    }
}
