//! Geometry primitives: 2D points and axis-aligned rectangles.
//!
//! Rectangles are stored as a center plus half-extents and define *closed*
//! regions: points exactly on an edge are contained. This matters for quadrant
//! routing, where a point on a shared edge could be accepted by more than one
//! child rectangle; the tree resolves such ties by child order.

/// A 2D point with `f64` coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    ///
    /// Deterministic and symmetric; this is the sole ranking key for
    /// nearest-neighbor ordering. Equal distances have no secondary order.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle defined by center and half-extents
///
/// Covers the closed region `[x - hw, x + hw] x [y - hh, y + hh]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Center x coordinate
    pub x: f64,
    /// Center y coordinate
    pub y: f64,
    /// Half-width (>= 0)
    pub hw: f64,
    /// Half-height (>= 0)
    pub hh: f64,
}

impl Rect {
    /// Creates a rectangle from center `(x, y)` and half-extents `(hw, hh)`
    #[inline]
    pub fn new(x: f64, y: f64, hw: f64, hh: f64) -> Self {
        Self { x, y, hw, hh }
    }

    /// Checks whether a point lies within the rectangle (closed bounds)
    ///
    /// # Examples
    /// ```
    /// use quadknn::{Point, Rect};
    ///
    /// let r = Rect::new(0.0, 0.0, 1.0, 1.0);
    /// assert!(r.contains(Point::new(1.0, -1.0))); // corners are inside
    /// assert!(!r.contains(Point::new(1.1, 0.0)));
    /// ```
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x - self.hw
            && p.x <= self.x + self.hw
            && p.y >= self.y - self.hh
            && p.y <= self.y + self.hh
    }

    /// Checks whether two rectangles overlap (closed extents, shared edges count)
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.x + self.hw < other.x - other.hw
            || self.x - self.hw > other.x + other.hw
            || self.y + self.hh < other.y - other.hh
            || self.y - self.hh > other.y + other.hh)
    }

    /// Minimum distance from a point to the rectangle, 0.0 if the point is inside
    ///
    /// Used as the lower bound when deciding whether a subtree can still hold a
    /// closer neighbor than the current worst candidate.
    #[inline]
    pub fn min_distance(&self, p: Point) -> f64 {
        let dx = Self::axis_distance(p.x, self.x - self.hw, self.x + self.hw);
        let dy = Self::axis_distance(p.y, self.y - self.hh, self.y + self.hh);
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance along one axis from a coordinate to a closed interval
    #[inline]
    fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
        if coordinate < min {
            min - coordinate
        } else if coordinate > max {
            coordinate - max
        } else {
            0.0
        }
    }
}
