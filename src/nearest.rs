//! Bounded best-candidates selector for nearest-neighbor queries.
//!
//! [`NearestHeap`] keeps the K smallest-distance candidates seen so far in an
//! array-backed binary max-heap keyed on distance. The root is always the worst
//! candidate currently held, so once the heap is full an admission decision is
//! one comparison against the root, and an admission itself is O(log K).

use crate::geom::Point;

/// A candidate result: a stored point and its distance to the query target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    /// The indexed point
    pub point: Point,
    /// Euclidean distance from the query target to `point`
    pub distance: f64,
}

/// Fixed-capacity max-heap retaining the K closest candidates offered to it
///
/// While fewer than `capacity` candidates have been offered, every offer is
/// accepted. Once full, an offer is accepted only if it is strictly closer than
/// the current worst held candidate, which it then replaces. Discarding a
/// too-far candidate is the expected steady state of a query, not a fault.
///
/// Held candidates are in heap order, not distance order; position 0 is always
/// the worst held. Use [`into_sorted`](Self::into_sorted) for ranked results.
///
/// # Examples
/// ```
/// use quadknn::{NearestHeap, Point};
///
/// let mut heap = NearestHeap::new(3);
/// for d in [5.0, 1.0, 9.0, 2.0, 0.5] {
///     heap.offer(Point::new(d, 0.0), d);
/// }
/// assert_eq!(heap.worst_distance(), Some(2.0));
/// let ranked = heap.into_sorted();
/// let distances: Vec<f64> = ranked.iter().map(|n| n.distance).collect();
/// assert_eq!(distances, vec![0.5, 1.0, 2.0]);
/// ```
#[derive(Clone, Debug)]
pub struct NearestHeap {
    /// Heap storage; `entries[0]` is the maximum distance held.
    entries: Vec<Neighbor>,
    /// Maximum number of candidates retained.
    capacity: usize,
}

impl NearestHeap {
    /// Creates an empty selector retaining at most `capacity` candidates
    ///
    /// A zero capacity is allowed and discards every offer.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Offers a candidate; keeps it iff it is among the K closest seen so far
    ///
    /// Below capacity the candidate is appended and sifted up. At capacity it
    /// replaces the root and is sifted down, but only if strictly closer than
    /// the root; otherwise it is discarded.
    pub fn offer(&mut self, point: Point, distance: f64) {
        if self.entries.len() < self.capacity {
            self.entries.push(Neighbor { point, distance });
            self.sift_up(self.entries.len() - 1);
        } else if let Some(worst) = self.entries.first_mut() {
            if distance < worst.distance {
                *worst = Neighbor { point, distance };
                self.sift_down(0);
            }
        }
    }

    /// Number of candidates currently held
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no candidates are held
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the selector holds `capacity` candidates
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// The capacity chosen at construction
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Distance of the worst held candidate, `None` while empty
    ///
    /// Once the selector is full, this is the K-th smallest distance seen so
    /// far: the admission threshold and the query's pruning bound.
    #[inline]
    pub fn worst_distance(&self) -> Option<f64> {
        self.entries.first().map(|n| n.distance)
    }

    /// Held candidates in heap order (position 0 is the worst held)
    #[inline]
    pub fn as_slice(&self) -> &[Neighbor] {
        &self.entries
    }

    /// Consumes the selector, returning candidates sorted by ascending distance
    ///
    /// Equal-distance candidates have no guaranteed relative order.
    pub fn into_sorted(self) -> Vec<Neighbor> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }

    /// Moves `entries[idx]` up until its parent is no closer than it
    fn sift_up(&mut self, idx: usize) {
        let mut child = idx;
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.entries[child].distance > self.entries[parent].distance {
                self.entries.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }

    /// Moves `entries[idx]` down, swapping with its larger child each step
    fn sift_down(&mut self, idx: usize) {
        let mut node = idx;
        loop {
            let left = 2 * node + 1;
            let right = 2 * node + 2;
            let mut largest = node;

            if left < self.entries.len()
                && self.entries[left].distance > self.entries[largest].distance
            {
                largest = left;
            }
            if right < self.entries.len()
                && self.entries[right].distance > self.entries[largest].distance
            {
                largest = right;
            }
            if largest == node {
                break;
            }
            self.entries.swap(node, largest);
            node = largest;
        }
    }
}
