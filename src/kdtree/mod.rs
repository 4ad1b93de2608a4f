//! An insert-only 2-d tree keyed on planar coordinates.
//!
//! Nodes split alternately on x (even depth) and y (odd depth). A node's left subtree holds
//! points strictly less than it on the split axis, its right subtree holds points greater or
//! equal. The tree is never rebalanced, so its shape is fixed by insertion order.

#![warn(missing_docs)]

mod index;
mod neighbor;
mod search;
mod traversal;

pub use index::KDTree;
pub use neighbor::Neighbor;
pub use traversal::{Node, TraversalOrder};
