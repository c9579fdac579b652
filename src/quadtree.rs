//! Point quadtree with adaptive subdivision.
//!
//! The tree partitions an axis-aligned universe rectangle: each node holds up to
//! [`NODE_CAPACITY`] points directly, and a node that is full when another point
//! arrives subdivides once into four children (NW, NE, SW, SE) that exactly tile
//! its boundary. Points already stored in a node stay there after subdivision;
//! only later insertions descend.
//!
//! Nodes live in a flat arena (`Vec<Node>`) addressed by index. A subdivided
//! node records the arena index of its NW child; the four children are always
//! allocated contiguously in NW, NE, SW, SE order, so one index addresses the
//! whole block. This keeps the tree a single allocation-friendly buffer and
//! avoids recursive ownership entirely.

use crate::geom::{Point, Rect};

/// Maximum number of points a node holds before it subdivides.
pub const NODE_CAPACITY: usize = 4;

/// Maximum subdivision depth.
///
/// A leaf at this depth stops subdividing and grows past [`NODE_CAPACITY`]
/// instead. Without the cap, a flood of coincident points would subdivide
/// forever: the points can never be separated, so every new arrival would
/// refill a child and split it again.
pub const MAX_DEPTH: usize = 32;

/// One quadtree node: a boundary, its direct points, and an optional child block.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) boundary: Rect,
    /// Direct points; at most `NODE_CAPACITY` unless this node hit `MAX_DEPTH`.
    pub(crate) points: Vec<Point>,
    /// Arena index of the NW child; NE, SW, SE follow contiguously.
    pub(crate) first_child: Option<usize>,
}

impl Node {
    fn leaf(boundary: Rect) -> Self {
        Self {
            boundary,
            points: Vec::new(),
            first_child: None,
        }
    }
}

/// Quadtree spatial index over owned 2D points
///
/// Points are inserted one at a time and owned by the tree; there is no
/// deletion or rebalancing. Queries live in the [`queries`](crate::queries)
/// module.
///
/// # Examples
/// ```
/// use quadknn::{Point, QuadTree, Rect};
///
/// let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert!(tree.insert(Point::new(10.0, 10.0)));
/// assert!(tree.insert(Point::new(-20.0, 35.0)));
/// assert!(!tree.insert(Point::new(500.0, 0.0))); // outside the universe
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree {
    /// Node arena; index 0 is the root.
    nodes: Vec<Node>,
    /// Total number of stored points.
    num_points: usize,
}

impl QuadTree {
    /// Creates an empty tree indexing the universe `boundary`
    ///
    /// Points outside `boundary` are rejected by [`insert`](Self::insert).
    pub fn new(boundary: Rect) -> Self {
        Self {
            nodes: vec![Node::leaf(boundary)],
            num_points: 0,
        }
    }

    /// Inserts a point, returning `false` if it lies outside the universe
    ///
    /// A `false` return means the point was not indexed; it is the caller's
    /// signal to reject the point or choose a larger universe. The tree is
    /// unchanged in that case.
    ///
    /// Routing descends from the root, taking the first child in NW, NE, SW,
    /// SE order whose rectangle contains the point. Points exactly on a shared
    /// quadrant edge are therefore routed deterministically.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.nodes[0].boundary.contains(point) {
            return false;
        }

        let mut idx = 0usize;
        let mut depth = 0usize;
        loop {
            if let Some(first) = self.nodes[idx].first_child {
                match self.route_to_child(first, point) {
                    Some(child) => {
                        idx = child;
                        depth += 1;
                    }
                    // Rounding of a child center can leave a parent-contained
                    // point outside every child interval. Keep it here instead
                    // of losing it.
                    None => {
                        self.nodes[idx].points.push(point);
                        self.num_points += 1;
                        return true;
                    }
                }
                continue;
            }

            if self.nodes[idx].points.len() < NODE_CAPACITY || depth >= MAX_DEPTH {
                self.nodes[idx].points.push(point);
                self.num_points += 1;
                return true;
            }

            // Full leaf: split once, then the loop descends into a child.
            // Existing direct points stay in this node.
            self.subdivide(idx);
        }
    }

    /// First child in the block starting at `first` that contains `point`
    fn route_to_child(&self, first: usize, point: Point) -> Option<usize> {
        (first..first + 4).find(|&child| self.nodes[child].boundary.contains(point))
    }

    /// Splits a childless node into four children exactly tiling its boundary
    ///
    /// Each child has half the parent's half-extents, centered at the parent
    /// center offset by the new half-extents. Called at most once per node.
    fn subdivide(&mut self, idx: usize) {
        debug_assert!(self.nodes[idx].first_child.is_none(), "node already subdivided");

        let Rect { x, y, hw, hh } = self.nodes[idx].boundary;
        let hw = hw / 2.0;
        let hh = hh / 2.0;

        let first = self.nodes.len();
        self.nodes.push(Node::leaf(Rect::new(x - hw, y - hh, hw, hh))); // NW
        self.nodes.push(Node::leaf(Rect::new(x + hw, y - hh, hw, hh))); // NE
        self.nodes.push(Node::leaf(Rect::new(x - hw, y + hh, hw, hh))); // SW
        self.nodes.push(Node::leaf(Rect::new(x + hw, y + hh, hw, hh))); // SE
        self.nodes[idx].first_child = Some(first);
    }

    /// Number of stored points
    #[inline]
    pub fn len(&self) -> usize {
        self.num_points
    }

    /// Whether the tree holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// The universe rectangle passed to [`new`](Self::new)
    #[inline]
    pub fn boundary(&self) -> Rect {
        self.nodes[0].boundary
    }

    /// Number of nodes in the arena (1 for a tree that never subdivided)
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }
}
