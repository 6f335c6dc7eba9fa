//! # NovaDE Image Map (`novade-imagemap`)
//!
//! Hot zones for images: declare rectangular, circular and polygonal regions
//! against an image's own pixel grid, then ask which region a tap on the
//! *displayed* image landed in, however the image has been scaled or moved.
//!
//! ## Layout
//!
//! - [`region`]: [`Region`] and its shapes ([`Rectangle`], [`Circle`],
//!   [`Polygon`]), each with its containment rule. Polygons also provide area
//!   and centroid.
//! - [`region_set`]: [`RegionSet`], an insertion-ordered, thread-safe
//!   collection where the first region added wins on overlap.
//! - [`mapper`]: [`CoordinateMapper`], which inverts the display transform and
//!   rescales a tap into declared-map coordinates.
//! - [`parser`]: [`RegionParser`], which turns attribute-map declarations into
//!   regions and reports (rather than raises) malformed ones.
//! - [`image_map`]: [`ImageMap`], which ties these together with a last-touch
//!   slot and a click listener.
//! - [`config`], [`logging`], [`error`]: configuration loading, `tracing`
//!   setup and the crate's error types.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use novade_imagemap::{
//!     AffineTransform, AreaDeclaration, DisplayTransform, ImageMap, MapDeclaration, ParserConfig,
//! };
//!
//! let declaration = MapDeclaration {
//!     width: 800,
//!     height: 600,
//!     areas: vec![AreaDeclaration::new(1, "rect", "10,10,200,120").with_attribute("title", "Kitchen")],
//! };
//! let (map, report) = ImageMap::load(&declaration, &ParserConfig::default())?;
//! map.set_click_listener(|_, region| println!("clicked {}", region));
//!
//! // The widget shows the 800x600 image at half size.
//! let display = DisplayTransform::with_image(AffineTransform::scale(0.5, 0.5), 800.0, 600.0);
//! map.record_touch(50.0, 30.0);
//! assert!(map.perform_click(&display));
//! ```

pub mod config;
pub mod error;
pub mod image_map;
pub mod logging;
pub mod mapper;
pub mod parser;
pub mod region;
pub mod region_set;
pub mod types;

pub use config::{ConfigLoader, ImageMapConfig, LoggingConfig, ParserConfig};
pub use error::{ConfigError, DeclarationError, GeometryError, LoggingError, MapError};
pub use image_map::{ClickListener, ImageMap};
pub use logging::{init_logging, init_minimal_logging};
pub use mapper::{CoordinateMapper, DisplayTransform, MapDimensions};
pub use parser::{AreaDeclaration, MapDeclaration, ParseReport, RegionParser, SkippedDeclaration};
pub use region::{Bounds, Circle, Polygon, Rectangle, Region, RegionId, Shape};
pub use region_set::RegionSet;
pub use types::{AffineTransform, Edges, Point, PointInt, Size};
