//! Core data types used by the image map.
//!
//! - **Geometry**: [`Point`], [`Size`], [`PointInt`] and the edge-based
//!   rectangle [`Edges`].
//! - **Transform**: [`AffineTransform`], the display-surface matrix.
//!
//! The types are serializable with Serde.

pub mod geometry;
pub mod transform;

pub use geometry::{Edges, Point, PointInt, Size};
pub use transform::AffineTransform;
