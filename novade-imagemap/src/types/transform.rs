//! 2D affine transforms for the display surface.

use super::geometry::{Edges, Point};
use serde::{Deserialize, Serialize};

/// A 2D affine transform.
///
/// Row-major 2x3 matrix:
/// ```text
/// [[m00, m01, m02],   (scale_x, skew_x, translate_x)
///  [m10, m11, m12]]   (skew_y, scale_y, translate_y)
/// ```
/// The implicit third row is `[0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub matrix: [[f32; 3]; 2],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub const fn identity() -> Self {
        AffineTransform {
            matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        }
    }

    /// Builds a transform from its six coefficients.
    pub const fn new(
        scale_x: f32,
        skew_x: f32,
        translate_x: f32,
        skew_y: f32,
        scale_y: f32,
        translate_y: f32,
    ) -> Self {
        AffineTransform {
            matrix: [
                [scale_x, skew_x, translate_x],
                [skew_y, scale_y, translate_y],
            ],
        }
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, tx, 0.0, 1.0, ty)
    }

    // Concatenates self with other (result = self * other), so `other` is
    // applied to a point first.
    pub fn then(&self, other: &AffineTransform) -> AffineTransform {
        let s = &self.matrix;
        let o = &other.matrix;
        AffineTransform {
            matrix: [
                [
                    s[0][0] * o[0][0] + s[0][1] * o[1][0],
                    s[0][0] * o[0][1] + s[0][1] * o[1][1],
                    s[0][0] * o[0][2] + s[0][1] * o[1][2] + s[0][2],
                ],
                [
                    s[1][0] * o[0][0] + s[1][1] * o[1][0],
                    s[1][0] * o[0][1] + s[1][1] * o[1][1],
                    s[1][0] * o[0][2] + s[1][1] * o[1][2] + s[1][2],
                ],
            ],
        }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.matrix;
        m[0][0] as f64 * m[1][1] as f64 - m[0][1] as f64 * m[1][0] as f64
    }

    /// Returns the inverse transform, or `None` when the linear part is singular.
    pub fn invert(&self) -> Option<AffineTransform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let m = &self.matrix;
        let (a, b, c) = (m[0][0] as f64, m[0][1] as f64, m[0][2] as f64);
        let (d, e, f) = (m[1][0] as f64, m[1][1] as f64, m[1][2] as f64);
        let inv = 1.0 / det;
        let inverse = AffineTransform::new(
            (e * inv) as f32,
            (-b * inv) as f32,
            ((b * f - c * e) * inv) as f32,
            (-d * inv) as f32,
            (a * inv) as f32,
            ((c * d - a * f) * inv) as f32,
        );
        let finite = inverse.matrix.iter().flatten().all(|v| v.is_finite());
        finite.then_some(inverse)
    }

    pub fn transform_point(&self, point: Point<f32>) -> Point<f32> {
        Point::new(
            self.matrix[0][0] * point.x + self.matrix[0][1] * point.y + self.matrix[0][2],
            self.matrix[1][0] * point.x + self.matrix[1][1] * point.y + self.matrix[1][2],
        )
    }

    /// Maps the four corners of `rect` and returns their sorted bounding box.
    pub fn map_rect(&self, rect: Edges) -> Edges {
        let corners = [
            Point::new(rect.left, rect.top),
            Point::new(rect.right, rect.top),
            Point::new(rect.left, rect.bottom),
            Point::new(rect.right, rect.bottom),
        ];
        Edges::bounding(corners.into_iter().map(|p| self.transform_point(p)))
            .unwrap_or(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point<f32>, b: Point<f32>) {
        assert!(
            (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_identity_invert() {
        let id = AffineTransform::identity();
        assert_eq!(id.invert(), Some(id));
        assert_eq!(AffineTransform::default(), id);
    }

    #[test]
    fn test_invert_scale_translate() {
        let t = AffineTransform::translate(10.0, 20.0).then(&AffineTransform::scale(2.0, 4.0));
        let p = Point::new(3.0, 5.0);
        let mapped = t.transform_point(p);
        assert_close(mapped, Point::new(16.0, 40.0));
        let inv = t.invert().unwrap();
        assert_close(inv.transform_point(mapped), p);
    }

    #[test]
    fn test_invert_with_skew() {
        let t = AffineTransform::new(1.0, 0.5, 3.0, 0.25, 2.0, -1.0);
        let inv = t.invert().unwrap();
        let p = Point::new(-7.0, 11.0);
        assert_close(inv.transform_point(t.transform_point(p)), p);
        assert_close(t.then(&inv).transform_point(p), p);
    }

    #[test]
    fn test_singular_transform_has_no_inverse() {
        assert!(AffineTransform::scale(0.0, 1.0).invert().is_none());
        assert!(AffineTransform::new(1.0, 2.0, 0.0, 2.0, 4.0, 0.0).invert().is_none());
        assert!(AffineTransform::scale(f32::NAN, 1.0).invert().is_none());
    }

    #[test]
    fn test_map_rect_sorts_after_mirroring() {
        let mirror = AffineTransform::scale(-1.0, 1.0);
        let mapped = mirror.map_rect(Edges::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(mapped, Edges::new(-10.0, 0.0, 0.0, 5.0));
    }
}
