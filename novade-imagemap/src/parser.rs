//! Building regions from already-parsed declarations.
//!
//! The declaration source (markup, JSON, TOML, ...) is read elsewhere; this
//! module receives each area as an identifier plus its attribute map and turns
//! it into a [`Region`]. Malformed declarations are skipped, never raised: the
//! caller gets a [`ParseReport`] describing what was dropped and why.

use crate::config::ParserConfig;
use crate::error::DeclarationError;
use crate::region::coords::parse_exact_f32;
use crate::region::{Circle, Polygon, Rectangle, Region, RegionId, Shape};
use crate::region_set::RegionSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Attribute keys tried, in order, for a region's display name.
pub const NAME_ATTRIBUTES: [&str; 3] = ["name", "title", "alt"];

/// One `<area>`-like declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AreaDeclaration {
    /// Region identifier; 0 means "none" and the declaration is dropped.
    #[serde(default)]
    pub id: u32,
    /// Every declared attribute, verbatim. `shape` and `coords` live here.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl AreaDeclaration {
    pub fn new(id: u32, shape: &str, coords: &str) -> Self {
        AreaDeclaration { id, attributes: HashMap::new() }
            .with_attribute("shape", shape)
            .with_attribute("coords", coords)
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn shape(&self) -> Option<&str> {
        self.attribute("shape")
    }

    pub fn coords(&self) -> Option<&str> {
        self.attribute("coords")
    }

    /// First present of `name`, `title`, `alt`.
    pub fn name(&self) -> Option<&str> {
        NAME_ATTRIBUTES.iter().find_map(|key| self.attribute(key))
    }
}

/// A whole map: declared size plus its areas.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapDeclaration {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub areas: Vec<AreaDeclaration>,
}

/// A declaration that did not produce a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDeclaration {
    /// Position in the declaration list.
    pub index: usize,
    /// Declared identifier (possibly 0).
    pub id: u32,
    pub reason: DeclarationError,
}

/// Outcome of populating a region set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    pub added: usize,
    pub skipped_count: usize,
    /// Empty when [`ParserConfig::record_skipped`] is off.
    pub skipped: Vec<SkippedDeclaration>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_count == 0
    }
}

/// Turns declarations into regions.
#[derive(Debug, Clone, Default)]
pub struct RegionParser {
    config: ParserConfig,
}

impl RegionParser {
    pub fn new(config: ParserConfig) -> Self {
        RegionParser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Builds a region, or `None` if the declaration is malformed.
    pub fn build_region(&self, shape: &str, name: Option<&str>, coords: &str, id: u32) -> Option<Region> {
        self.try_build_region(shape, name, coords, id).ok()
    }

    /// Builds a region from a shape keyword (case-insensitive `rect`,
    /// `circle` or `poly`) and its coordinate list.
    ///
    /// `rect` needs exactly four numbers (left, top, right, bottom), `circle`
    /// exactly three (center x, center y, radius); `poly` takes integer pairs
    /// and ignores an unpaired trailing value. The `shape` and `coords` strings
    /// are stored on the region as attributes.
    pub fn try_build_region(
        &self,
        shape: &str,
        name: Option<&str>,
        coords: &str,
        id: u32,
    ) -> Result<Region, DeclarationError> {
        let id = RegionId::new(id).ok_or(DeclarationError::MissingId)?;
        let trim = self.config.trim_whitespace;

        let region_shape: Shape = if shape.eq_ignore_ascii_case("rect") {
            let v = parse_exact_f32("rect", coords, 4, trim)?;
            Rectangle::new(v[0], v[1], v[2], v[3]).into()
        } else if shape.eq_ignore_ascii_case("circle") {
            let v = parse_exact_f32("circle", coords, 3, trim)?;
            Circle::new(v[0], v[1], v[2]).into()
        } else if shape.eq_ignore_ascii_case("poly") {
            Polygon::parse(coords, trim)?.into()
        } else {
            return Err(DeclarationError::UnknownShape(shape.to_string()));
        };

        Ok(Region::new(id, name.map(str::to_string), region_shape)
            .with_value("shape", shape)
            .with_value("coords", coords))
    }

    /// Builds a region from a full declaration, copying every attribute.
    pub fn try_build_declaration(&self, decl: &AreaDeclaration) -> Result<Region, DeclarationError> {
        let shape = decl.shape().ok_or(DeclarationError::MissingShape)?;
        let coords = decl.coords().ok_or(DeclarationError::MissingCoords)?;
        let mut region = self.try_build_region(shape, decl.name(), coords, decl.id)?;
        for (key, value) in &decl.attributes {
            region.add_value(key.as_str(), value.as_str());
        }
        Ok(region)
    }

    /// Adds every well-formed declaration to `set`, in order.
    pub fn populate(&self, declarations: &[AreaDeclaration], set: &RegionSet) -> ParseReport {
        let mut report = ParseReport::default();
        for (index, decl) in declarations.iter().enumerate() {
            match self.try_build_declaration(decl) {
                Ok(region) => {
                    set.add(region);
                    report.added += 1;
                }
                Err(reason) => {
                    debug!(index, id = decl.id, %reason, "Skipping area declaration");
                    report.skipped_count += 1;
                    if self.config.record_skipped {
                        report.skipped.push(SkippedDeclaration { index, id: decl.id, reason });
                    }
                }
            }
        }
        debug!(added = report.added, skipped = report.skipped_count, "Populated region set");
        report
    }
}
