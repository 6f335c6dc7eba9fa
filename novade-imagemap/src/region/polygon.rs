//! Polygon hot zones: area, centroid and the even-odd containment test.
//!
//! Vertices are integers in declared map space. Internally the vertex list is
//! closed by repeating vertex 0 after the last vertex; [`Polygon::points`]
//! reports the declared vertex count only.

use super::coords::{parse_token, split_tokens};
use crate::error::{DeclarationError, GeometryError};
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned bounding box of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// A simple polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    // Both hold `points + 1` entries; the last one repeats vertex 0.
    xs: Vec<i32>,
    ys: Vec<i32>,
    points: usize,
    bounds: Bounds,
    centroid: Result<Point<f32>, GeometryError>,
}

impl Polygon {
    /// Builds a polygon from explicit vertices.
    ///
    /// # Errors
    ///
    /// [`DeclarationError::EmptyPolygon`] if `vertices` is empty.
    pub fn from_vertices<I>(vertices: I) -> Result<Self, DeclarationError>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut bounds: Option<Bounds> = None;

        for (x, y) in vertices {
            xs.push(x);
            ys.push(y);
            bounds = Some(match bounds {
                None => Bounds { left: x, top: y, right: x, bottom: y },
                Some(b) => Bounds {
                    left: b.left.min(x),
                    top: b.top.min(y),
                    right: b.right.max(x),
                    bottom: b.bottom.max(y),
                },
            });
        }

        let bounds = bounds.ok_or(DeclarationError::EmptyPolygon)?;
        let points = xs.len();
        xs.push(xs[0]);
        ys.push(ys[0]);

        let mut polygon = Polygon {
            xs,
            ys,
            points,
            bounds,
            centroid: Err(GeometryError::DegeneratePolygon { vertices: points }),
        };
        polygon.centroid = polygon.compute_centroid();
        Ok(polygon)
    }

    /// Parses a flat `x1,y1,x2,y2,...` list.
    ///
    /// A trailing unpaired value is ignored without being parsed.
    pub fn parse(coords: &str, trim_whitespace: bool) -> Result<Self, DeclarationError> {
        let tokens = split_tokens(coords);
        let vertices = tokens
            .chunks_exact(2)
            .map(|pair| {
                let x = parse_token::<i32>(pair[0], trim_whitespace)?;
                let y = parse_token::<i32>(pair[1], trim_whitespace)?;
                Ok((x, y))
            })
            .collect::<Result<Vec<_>, DeclarationError>>()?;
        Self::from_vertices(vertices)
    }

    /// Number of declared vertices.
    pub fn points(&self) -> usize {
        self.points
    }

    /// The declared vertices, without the closing repeat.
    pub fn vertices(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.xs[..self.points]
            .iter()
            .copied()
            .zip(self.ys[..self.points].iter().copied())
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Absolute area by the shoelace formula. Zero for collinear or
    /// fewer-than-three-vertex polygons.
    pub fn area(&self) -> f64 {
        let sum: f64 = (0..self.points).map(|i| self.cross(i) as f64).sum();
        (0.5 * sum).abs()
    }

    /// Centroid with both coordinates truncated toward zero and made
    /// non-negative.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegeneratePolygon`] when the area is zero.
    pub fn centroid(&self) -> Result<Point<f32>, GeometryError> {
        self.centroid.clone()
    }

    fn compute_centroid(&self) -> Result<Point<f32>, GeometryError> {
        let area = self.area();
        if area == 0.0 || !area.is_finite() {
            return Err(GeometryError::DegeneratePolygon { vertices: self.points });
        }

        let mut cx = 0.0f64;
        let mut cy = 0.0f64;
        for i in 0..self.points {
            // Negated shoelace term; the sign is discarded below.
            let weight = -(self.cross(i) as f64);
            cx += (self.xs[i] as f64 + self.xs[i + 1] as f64) * weight;
            cy += (self.ys[i] as f64 + self.ys[i + 1] as f64) * weight;
        }
        cx /= 6.0 * area;
        cy /= 6.0 * area;

        Ok(Point::new(cx.trunc().abs() as f32, cy.trunc().abs() as f32))
    }

    // x_i * y_{i+1} - y_i * x_{i+1}
    fn cross(&self, i: usize) -> i64 {
        self.xs[i] as i64 * self.ys[i + 1] as i64 - self.ys[i] as i64 * self.xs[i + 1] as i64
    }

    /// Even-odd ray casting (W. Randolph Franklin's PNPOLY).
    ///
    /// Points exactly on an edge or vertex may land on either side.
    pub fn contains(&self, test_x: f32, test_y: f32) -> bool {
        let n = self.points;
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (self.xs[i], self.ys[i]);
            let (xj, yj) = (self.xs[j], self.ys[j]);
            if ((yi as f32) > test_y) != ((yj as f32) > test_y)
                && test_x
                    < xj.wrapping_sub(xi) as f32 * (test_y - yi as f32)
                        / yj.wrapping_sub(yi) as f32
                        + xi as f32
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
