use geo_traits::{CoordTrait, RectTrait};
use log::debug;

use crate::kdtree::{KDTree, Neighbor, Node};
use crate::list::RecordList;
use crate::r#type::{Coord, CoordNum};

impl<N: CoordNum, T> KDTree<N, T> {
    /// Search the tree for items within a given bounding box. All four edges are inclusive.
    ///
    /// - min_x: bbox
    /// - min_y: bbox
    /// - max_x: bbox
    /// - max_y: bbox
    ///
    /// Returns found items root first, left subtree before right subtree. The box is not
    /// validated: if `min` exceeds `max` on either axis the result is empty or partial.
    pub fn range(&self, min_x: N, min_y: N, max_x: N, max_y: N) -> RecordList<'_, T> {
        let mut result = RecordList::new();

        let mut stack: Vec<(&Node<N, T>, usize)> = vec![];
        stack.extend(self.root().map(|root| (root, 0)));

        while let Some((node, axis)) = stack.pop() {
            // include the node if it's in range
            let Coord { x, y } = node.coord;
            if x >= min_x && x <= max_x && y >= min_y && y <= max_y {
                result.push(&node.item);
            }

            // queue search in halves that intersect the query
            // Note: right is pushed before left so that the left half is popped first
            let gte = if axis == 0 { max_x >= x } else { max_y >= y };
            if gte {
                stack.extend(node.right().map(|right| (right, 1 - axis)));
            }

            let lte = if axis == 0 { min_x <= x } else { min_y <= y };
            if lte {
                stack.extend(node.left().map(|left| (left, 1 - axis)));
            }
        }

        debug!(
            "Range ({}, {}) to ({}, {}) matched {} of {} items",
            min_x,
            min_y,
            max_x,
            max_y,
            result.len(),
            self.len()
        );
        result
    }

    /// Search the tree for items within a given bounding box.
    pub fn range_rect(&self, rect: &impl RectTrait<T = N>) -> RecordList<'_, T> {
        self.range(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// Find the item closest to `(x, y)` by Euclidean distance.
    ///
    /// On ties the first candidate found is kept. The far side of a split is only searched when
    /// the *squared* distance to the splitting line is below the current best *unsquared*
    /// distance. For distances under 1 this only adds visits, but beyond that it can skip a
    /// subtree that holds a closer item.
    pub fn nearest(&self, x: N, y: N) -> Neighbor<'_, N, T> {
        let query = Coord::new(x, y);
        let mut best = Neighbor::default();
        nearest(self.root(), &query, 0, &mut best);
        debug!(
            "Nearest to ({}, {}) found={} at distance {}",
            x,
            y,
            best.is_found(),
            best.distance()
        );
        best
    }

    /// Find the item closest to the given coordinate.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Neighbor<'_, N, T> {
        self.nearest(coord.x(), coord.y())
    }
}

fn nearest<'a, N: CoordNum, T>(
    node: Option<&'a Node<N, T>>,
    query: &Coord<N>,
    axis: usize,
    best: &mut Neighbor<'a, N, T>,
) {
    let Some(node) = node else {
        return;
    };

    best.offer(&node.item, dist(query, &node.coord));

    // search the side of the split holding the query first
    let (near, far) = if query.value(axis) < node.coord.value(axis) {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };
    nearest(near, query, 1 - axis, best);

    let plane = query.value(axis) - node.coord.value(axis);
    if plane * plane < best.distance {
        nearest(far, query, 1 - axis, best);
    }
}

#[inline]
pub(crate) fn dist<N: CoordNum>(a: &Coord<N>, b: &Coord<N>) -> N {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
