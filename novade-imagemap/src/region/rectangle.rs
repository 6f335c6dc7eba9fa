//! Rectangle hot zones.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in declared map space.
///
/// No ordering is enforced between opposite edges; a rectangle with
/// `left > right` simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rectangle {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Rectangle { left, top, right, bottom }
    }

    /// Strict containment: points on any of the four edges are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }

    /// The top-left corner.
    pub fn origin(&self) -> Point<f32> {
        Point::new(self.left, self.top)
    }
}
