//! Geometric primitives shared by regions and the coordinate mapper.

use num_traits::{Float, Num, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

// --- Generic Point<T> ---

/// Represents a 2D point with generic coordinates.
///
/// # Type Parameters
///
/// * `T`: The numeric type for the coordinates (e.g., `i32`, `f32`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Point<T: Num + Copy> {
    /// The x-coordinate of the point.
    pub x: T,
    /// The y-coordinate of the point.
    pub y: T,
}

impl<T: Num + Copy + Eq> Eq for Point<T> {}

impl<T: Num + Copy> Point<T> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Calculates the squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: &Self) -> T
    where
        T: Sub<Output = T> + Add<Output = T> + Mul<Output = T>,
    {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl<T: Num + Copy + Float> Point<T> {
    /// Calculates the Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> T {
        self.distance_squared(other).sqrt()
    }
}

impl<T: Num + Copy + fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// --- Generic Size<T> ---

/// Represents a 2D size (width and height) with generic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Size<T: Num + Copy> {
    /// The width component of the size.
    pub width: T,
    /// The height component of the size.
    pub height: T,
}

impl<T: Num + Copy> Size<T> {
    /// Creates a new size with the given width and height.
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    /// Checks if both dimensions are strictly positive.
    pub fn is_positive(&self) -> bool
    where
        T: PartialOrd + Zero,
    {
        self.width > T::zero() && self.height > T::zero()
    }
}

// --- Integer point ---

/// An integer point with `i32` coordinates, used for declared-map positions
/// produced by the coordinate mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointInt {
    pub x: i32,
    pub y: i32,
}

impl PointInt {
    /// Creates a new `PointInt`.
    pub const fn new(x: i32, y: i32) -> Self {
        PointInt { x, y }
    }

    /// Converts to a floating point position for containment tests.
    pub fn to_f32(self) -> Point<f32> {
        Point::new(self.x as f32, self.y as f32)
    }
}

impl fmt::Display for PointInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

// --- Float rectangle given by its edges ---

/// An axis-aligned rectangle stored by its four edges.
///
/// Unlike a size-based rectangle, the edges are kept exactly as given; a
/// rectangle whose `left` exceeds its `right` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Edges {
    /// Creates a rectangle from its edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Edges { left, top, right, bottom }
    }

    /// Smallest sorted rectangle containing all given points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn bounding<I>(points: I) -> Option<Edges>
    where
        I: IntoIterator<Item = Point<f32>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Edges::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.left = bounds.left.min(p.x);
            bounds.top = bounds.top.min(p.y);
            bounds.right = bounds.right.max(p.x);
            bounds.bottom = bounds.bottom.max(p.y);
        }
        Some(bounds)
    }
}
