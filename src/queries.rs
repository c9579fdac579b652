//! Nearest-neighbor query implementations for [`QuadTree`].
//!
//! Two traversal modes are provided with identical output:
//!
//! - [`QuadTree::query_nearest_into`] streams every indexed point into a
//!   caller-owned [`NearestHeap`], visiting all nodes unconditionally. Cost is
//!   linear in the number of stored points regardless of query locality.
//! - [`QuadTree::query_nearest_k`] additionally prunes: once the selector is
//!   full, a child subtree is skipped when the minimum possible distance from
//!   the target to the child's rectangle already exceeds the worst held
//!   distance, so no point inside could be admitted.

use crate::QuadTree;
use crate::geom::Point;
use crate::nearest::{NearestHeap, Neighbor};

impl QuadTree {
    /// Streams every indexed point's distance to `target` into `heap`
    ///
    /// Exhaustive depth-first traversal; the heap retains the K closest per
    /// its capacity. Reading results back (and any reuse across queries) is
    /// the caller's choice; the tree only offers candidates.
    ///
    /// # Examples
    /// ```
    /// use quadknn::{NearestHeap, Point, QuadTree, Rect};
    ///
    /// let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    /// for x in 0..5 {
    ///     assert!(tree.insert(Point::new(x as f64, 0.0)));
    /// }
    /// let mut heap = NearestHeap::new(2);
    /// tree.query_nearest_into(Point::new(0.0, 0.0), &mut heap);
    /// assert_eq!(heap.worst_distance(), Some(1.0));
    /// ```
    pub fn query_nearest_into(&self, target: Point, heap: &mut NearestHeap) {
        self.collect_nearest(0, target, heap);
    }

    /// Returns up to `k` nearest neighbors of `target`, closest first
    ///
    /// Fewer than `k` results are returned only when the tree holds fewer
    /// than `k` points. Subtrees that cannot contain an admissible candidate
    /// are pruned; the result is identical to the exhaustive mode.
    ///
    /// # Examples
    /// ```
    /// use quadknn::{Point, QuadTree, Rect};
    ///
    /// let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    /// for &(x, y) in &[(1.0, 1.0), (50.0, 50.0), (-3.0, 0.0), (90.0, -90.0)] {
    ///     assert!(tree.insert(Point::new(x, y)));
    /// }
    /// let nearest = tree.query_nearest_k(Point::new(0.0, 0.0), 2);
    /// assert_eq!(nearest.len(), 2);
    /// assert_eq!(nearest[0].point, Point::new(1.0, 1.0));
    /// assert_eq!(nearest[1].point, Point::new(-3.0, 0.0));
    /// ```
    pub fn query_nearest_k(&self, target: Point, k: usize) -> Vec<Neighbor> {
        let mut heap = NearestHeap::new(k);
        self.collect_nearest_pruned(0, target, &mut heap);
        heap.into_sorted()
    }

    /// Returns the single nearest neighbor of `target`, if any point is indexed
    pub fn query_nearest(&self, target: Point) -> Option<Neighbor> {
        self.query_nearest_k(target, 1).pop()
    }

    /// Visits `idx` and all descendants, offering every direct point
    fn collect_nearest(&self, idx: usize, target: Point, heap: &mut NearestHeap) {
        let node = self.node(idx);
        for &point in &node.points {
            heap.offer(point, target.distance(point));
        }
        if let Some(first) = node.first_child {
            for child in first..first + 4 {
                self.collect_nearest(child, target, heap);
            }
        }
    }

    /// As [`collect_nearest`](Self::collect_nearest), skipping unreachable subtrees
    fn collect_nearest_pruned(&self, idx: usize, target: Point, heap: &mut NearestHeap) {
        let node = self.node(idx);
        for &point in &node.points {
            heap.offer(point, target.distance(point));
        }
        if let Some(first) = node.first_child {
            for child in first..first + 4 {
                // Only a full selector gives a bound; a point at exactly the
                // bound would be rejected anyway, so skipping on equality
                // would also be sound.
                if heap.is_full()
                    && let Some(worst) = heap.worst_distance()
                    && self.node(child).boundary.min_distance(target) > worst
                {
                    continue;
                }
                self.collect_nearest_pruned(child, target, heap);
            }
        }
    }
}
