//! # quadknn - Quadtree K-Nearest-Neighbor Index
//!
//! A Rust library providing a point quadtree for 2D proximity queries,
//! paired with a bounded max-heap selector for K-nearest-neighbor search.
//!
//! ## Features
//!
//! - **Adaptive Subdivision**: dense regions split into quadrants on demand
//! - **K-NN Queries**: ranked nearest-neighbor results with O(log K) admission
//! - **Distance-Bound Pruning**: subtrees that cannot improve the result are skipped
//! - **Simple API**: insert points, query with a target and K
//!
//! ## Quick Start
//!
//! ```rust
//! use quadknn::prelude::*;
//!
//! // Index a 200x200 universe centered at the origin
//! let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//!
//! // Insert some points; insert() reports whether the point was in bounds
//! assert!(tree.insert(Point::new(1.0, 1.0)));
//! assert!(tree.insert(Point::new(2.0, 2.0)));
//! assert!(tree.insert(Point::new(-40.0, 55.0)));
//! assert!(tree.insert(Point::new(80.0, -15.0)));
//! assert!(!tree.insert(Point::new(300.0, 0.0))); // outside the universe
//!
//! // Query the 2 nearest neighbors of (0, 0), closest first
//! let nearest = tree.query_nearest_k(Point::new(0.0, 0.0), 2);
//! assert_eq!(nearest.len(), 2);
//! assert_eq!(nearest[0].point, Point::new(1.0, 1.0));
//! assert_eq!(nearest[1].point, Point::new(2.0, 2.0));
//! ```
//!
//! ## How It Works
//!
//! The quadtree recursively partitions an axis-aligned universe rectangle.
//! Each node stores up to four points directly; when a full node receives
//! another point it subdivides into four children (NW, NE, SW, SE) that
//! exactly tile its boundary, and the new point descends into the first child
//! containing it. Nodes live in a flat arena indexed by position, so the tree
//! is a single growable buffer rather than a web of owning pointers.
//!
//! A query walks the tree and offers every stored point's distance to a
//! [`NearestHeap`], a fixed-capacity max-heap whose root is always the worst
//! candidate held. Once the heap is full, its root distance bounds what can
//! still be admitted, which also lets the ranked query skip subtrees whose
//! rectangles lie entirely beyond that bound.

pub mod geom;
pub mod nearest;
pub mod prelude;
pub mod quadtree;
pub mod queries;

pub use geom::{Point, Rect};
pub use nearest::{NearestHeap, Neighbor};
pub use quadtree::QuadTree;

#[cfg(test)]
mod component_tests;
