//! Display-surface to declared-map coordinate conversion.
//!
//! The display widget draws the image through an affine matrix. To resolve a
//! tap, the matrix is inverted, the tap is taken back into image pixels, and
//! the result is scaled from the image's intrinsic size to the size the map
//! was declared against.

use crate::error::{GeometryError, MapError};
use crate::types::{AffineTransform, Edges, PointInt, Size};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Size of the coordinate space regions are declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapDimensions {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl MapDimensions {
    /// # Errors
    ///
    /// [`MapError::InvalidMapDimensions`] if either side is 0.
    pub fn new(width: u32, height: u32) -> Result<Self, MapError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(MapDimensions { width, height }),
            _ => Err(MapError::InvalidMapDimensions { width, height }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }
}

/// State of the display widget at the moment of a tap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayTransform {
    /// Image-pixel to display-surface matrix.
    pub matrix: AffineTransform,
    /// Unscaled pixel size of the displayed image, `None` when nothing is shown.
    pub intrinsic_size: Option<Size<f32>>,
}

impl DisplayTransform {
    pub fn new(matrix: AffineTransform, intrinsic_size: Option<Size<f32>>) -> Self {
        DisplayTransform { matrix, intrinsic_size }
    }

    /// An image of `width` x `height` drawn through `matrix`.
    pub fn with_image(matrix: AffineTransform, width: f32, height: f32) -> Self {
        Self::new(matrix, Some(Size::new(width, height)))
    }
}

/// Converts display-surface points into declared-map points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    declared: MapDimensions,
}

impl CoordinateMapper {
    pub fn new(declared: MapDimensions) -> Self {
        CoordinateMapper { declared }
    }

    pub fn declared(&self) -> MapDimensions {
        self.declared
    }

    /// Maps a raw surface point, or `None` when the display matrix cannot be
    /// inverted.
    pub fn map_point(&self, raw_x: f32, raw_y: f32, display: &DisplayTransform) -> Option<PointInt> {
        self.try_map_point(raw_x, raw_y, display).ok()
    }

    /// Like [`CoordinateMapper::map_point`], reporting why no mapping exists.
    ///
    /// The rectangle spanning the surface origin and the raw point is taken
    /// through the inverse matrix; its right and bottom edges give the image
    /// position. When no image is displayed, or its intrinsic size is not
    /// positive, the declared/intrinsic scaling is skipped. Coordinates are
    /// rounded half up.
    pub fn try_map_point(
        &self,
        raw_x: f32,
        raw_y: f32,
        display: &DisplayTransform,
    ) -> Result<PointInt, GeometryError> {
        let inverse = display
            .matrix
            .invert()
            .ok_or(GeometryError::NonInvertibleTransform)?;
        let local = inverse.map_rect(Edges::new(0.0, 0.0, raw_x, raw_y));
        let (mut x, mut y) = (local.right, local.bottom);

        if let Some(intrinsic) = display.intrinsic_size.filter(|s| s.is_positive()) {
            x *= self.declared.width() as f32 / intrinsic.width;
            y *= self.declared.height() as f32 / intrinsic.height;
        }

        Ok(PointInt::new(round_half_up(x), round_half_up(y)))
    }
}

fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use pretty_assertions::assert_eq;

    fn dims(w: u32, h: u32) -> MapDimensions {
        MapDimensions::new(w, h).unwrap()
    }

    #[test]
    fn test_map_dimensions_reject_zero() {
        assert!(matches!(
            MapDimensions::new(0, 10),
            Err(MapError::InvalidMapDimensions { width: 0, height: 10 })
        ));
        assert!(MapDimensions::new(10, 0).is_err());
        assert_eq!(dims(640, 480).width(), 640);
        assert_eq!(dims(640, 480).height(), 480);
    }

    #[test]
    fn test_identity_same_size() {
        let mapper = CoordinateMapper::new(dims(100, 100));
        let display = DisplayTransform::with_image(AffineTransform::identity(), 100.0, 100.0);
        assert_eq!(mapper.map_point(50.0, 50.0, &display), Some(PointInt::new(50, 50)));
    }

    #[test]
    fn test_scaled_display_and_declared_ratio() {
        // 200x100 image shown at 2x, regions declared against a 400x200 original.
        let mapper = CoordinateMapper::new(dims(400, 200));
        let display = DisplayTransform::with_image(AffineTransform::scale(2.0, 2.0), 200.0, 100.0);
        assert_eq!(mapper.map_point(100.0, 50.0, &display), Some(PointInt::new(100, 50)));
    }

    #[test]
    fn test_letterboxed_display() {
        let mapper = CoordinateMapper::new(dims(500, 400));
        let matrix = AffineTransform::translate(10.0, 0.0).then(&AffineTransform::scale(0.5, 0.5));
        let display = DisplayTransform::with_image(matrix, 1000.0, 800.0);
        assert_eq!(mapper.map_point(260.0, 200.0, &display), Some(PointInt::new(250, 200)));
    }

    #[test]
    fn test_independent_axis_scales() {
        let mapper = CoordinateMapper::new(dims(300, 50));
        let display = DisplayTransform::with_image(AffineTransform::identity(), 100.0, 100.0);
        assert_eq!(mapper.map_point(10.0, 10.0, &display), Some(PointInt::new(30, 5)));
    }

    #[test]
    fn test_no_image_skips_scaling() {
        let mapper = CoordinateMapper::new(dims(1000, 1000));
        let display = DisplayTransform::new(AffineTransform::scale(2.0, 2.0), None);
        assert_eq!(mapper.map_point(40.0, 20.0, &display), Some(PointInt::new(20, 10)));

        let no_intrinsic = DisplayTransform::with_image(AffineTransform::identity(), -1.0, -1.0);
        assert_eq!(mapper.map_point(40.0, 20.0, &no_intrinsic), Some(PointInt::new(40, 20)));
    }

    #[test]
    fn test_non_invertible_transform_yields_no_mapping() {
        let mapper = CoordinateMapper::new(dims(100, 100));
        let display = DisplayTransform::with_image(AffineTransform::scale(0.0, 1.0), 100.0, 100.0);
        assert_eq!(mapper.map_point(5.0, 5.0, &display), None);
        assert_eq!(
            mapper.try_map_point(5.0, 5.0, &display),
            Err(GeometryError::NonInvertibleTransform)
        );
    }

    #[test]
    fn test_rounds_half_up() {
        let mapper = CoordinateMapper::new(dims(100, 100));
        let display = DisplayTransform::with_image(AffineTransform::identity(), 100.0, 100.0);
        assert_eq!(mapper.map_point(10.4, 10.5, &display), Some(PointInt::new(10, 11)));
    }

    #[test]
    fn test_mirrored_display_uses_far_edge_of_mapped_rect() {
        // x' = 100 - x. The rectangle from the surface origin to (30, 40) spans
        // image x 70..100, so the right edge (100) is used, not the tapped 70.
        let mapper = CoordinateMapper::new(dims(100, 100));
        let matrix = AffineTransform::translate(100.0, 0.0).then(&AffineTransform::scale(-1.0, 1.0));
        let display = DisplayTransform::with_image(matrix, 100.0, 100.0);
        assert_eq!(mapper.map_point(30.0, 40.0, &display), Some(PointInt::new(100, 40)));

        let direct = matrix.invert().unwrap().transform_point(Point::new(30.0, 40.0));
        assert_eq!(direct, Point::new(70.0, 40.0));
    }

    #[test]
    fn test_rotated_display_uses_far_edges_of_mapped_rect() {
        // Image rotated 90 degrees clockwise onto the surface: x' = 100 - y, y' = x.
        // Mapped corners of (0, 0)-(30, 40) span x 0..40 and y 70..100.
        let mapper = CoordinateMapper::new(dims(200, 200));
        let matrix = AffineTransform::new(0.0, -1.0, 100.0, 1.0, 0.0, 0.0);
        let display = DisplayTransform::with_image(matrix, 100.0, 100.0);
        assert_eq!(mapper.map_point(30.0, 40.0, &display), Some(PointInt::new(80, 200)));
    }

    #[test]
    fn test_point_before_surface_origin_maps_to_origin_edge() {
        // The mapped rectangle is sorted, so its right edge never falls left of
        // the surface origin.
        let mapper = CoordinateMapper::new(dims(100, 100));
        let display = DisplayTransform::with_image(AffineTransform::identity(), 100.0, 100.0);
        assert_eq!(mapper.map_point(-5.0, 7.0, &display), Some(PointInt::new(0, 7)));
    }
}
