//! Circle hot zones.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Circle in declared map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center_x: f32,
    pub center_y: f32,
    /// Zero or negative radii are kept as declared; such a circle contains no point.
    pub radius: f32,
}

impl Circle {
    pub const fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Circle { center_x, center_y, radius }
    }

    pub fn center(&self) -> Point<f32> {
        Point::new(self.center_x, self.center_y)
    }

    /// True if the distance to the center is strictly less than the radius.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.center().distance(&Point::new(x, y)) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3.0, 3.0, true)]
    #[case(3.0, 4.0, false)]
    #[case(5.0, 0.0, false)]
    #[case(0.0, 0.0, true)]
    #[case(-4.9, 0.0, true)]
    #[case(6.0, 6.0, false)]
    fn test_circle_contains(#[case] x: f32, #[case] y: f32, #[case] expected: bool) {
        let circle = Circle::new(0.0, 0.0, 5.0);
        assert_eq!(circle.contains(x, y), expected, "point ({}, {})", x, y);
    }

    #[test]
    fn test_zero_and_negative_radius_contain_nothing() {
        assert!(!Circle::new(1.0, 1.0, 0.0).contains(1.0, 1.0));
        assert!(!Circle::new(1.0, 1.0, -3.0).contains(1.0, 1.0));
    }

    #[test]
    fn test_circle_origin_is_center() {
        assert_eq!(Circle::new(7.0, -2.0, 1.0).center(), Point::new(7.0, -2.0));
    }
}
