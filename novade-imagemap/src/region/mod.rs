//! Hot zone regions.
//!
//! A [`Region`] pairs an identifier, an optional display name and a free-form
//! attribute bag with one of three [`Shape`]s:
//!
//! - [`Rectangle`]: strict containment on all four edges.
//! - [`Circle`]: strict containment on the radius.
//! - [`Polygon`]: even-odd ray casting, plus area and centroid.
//!
//! Regions are assembled once (attributes are accumulated while building) and
//! are treated as immutable after being handed to a
//! [`crate::region_set::RegionSet`].

pub mod circle;
pub mod coords;
pub mod polygon;
pub mod rectangle;

pub use circle::Circle;
pub use polygon::{Bounds, Polygon};
pub use rectangle::Rectangle;

use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU32;

/// Non-zero region identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(NonZeroU32);

impl RegionId {
    /// Returns `None` for 0, which never identifies a region.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(RegionId)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The geometry of a region.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Shape keyword as used in declarations.
    pub fn keyword(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rect",
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "poly",
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        match self {
            Shape::Rectangle(rect) => rect.contains(x, y),
            Shape::Circle(circle) => circle.contains(x, y),
            Shape::Polygon(poly) => poly.contains(x, y),
        }
    }

    /// Representative point: top-left corner, center, or centroid.
    ///
    /// `None` only for a polygon without area.
    pub fn origin(&self) -> Option<Point<f32>> {
        match self {
            Shape::Rectangle(rect) => Some(rect.origin()),
            Shape::Circle(circle) => Some(circle.center()),
            Shape::Polygon(poly) => poly.centroid().ok(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(poly: Polygon) -> Self {
        Shape::Polygon(poly)
    }
}

/// A named, identified hot zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: RegionId,
    name: Option<String>,
    attributes: HashMap<String, String>,
    shape: Shape,
}

impl Region {
    pub fn new(id: RegionId, name: Option<String>, shape: impl Into<Shape>) -> Self {
        Region {
            id,
            name,
            attributes: HashMap::new(),
            shape: shape.into(),
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Whether the declared-map point `(x, y)` hits this region.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.shape.contains(x, y)
    }

    /// See [`Shape::origin`].
    pub fn origin(&self) -> Option<Point<f32>> {
        self.shape.origin()
    }

    /// Stores an attribute, replacing any previous value for `key`.
    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Builder form of [`Region::add_value`].
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_value(key, value);
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.shape.keyword(), self.id)?;
        if let Some(name) = &self.name {
            write!(f, " '{}'", name)?;
        }
        match &self.shape {
            Shape::Rectangle(r) => {
                write!(f, " [{}, {}, {}, {}]", r.left, r.top, r.right, r.bottom)
            }
            Shape::Circle(c) => {
                write!(f, " center ({}, {}) radius {}", c.center_x, c.center_y, c.radius)
            }
            Shape::Polygon(p) => {
                let b = p.bounds();
                write!(
                    f,
                    " {} points within [{}, {}, {}, {}]",
                    p.points(),
                    b.left,
                    b.top,
                    b.right,
                    b.bottom
                )
            }
        }
    }
}
