//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadknn::prelude::*;
//! ```

pub use crate::geom::{Point, Rect};
pub use crate::nearest::{NearestHeap, Neighbor};
pub use crate::quadtree::QuadTree;
