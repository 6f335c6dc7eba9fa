//! Headless image map: declared regions, the last touch, and click dispatch.
//!
//! An [`ImageMap`] is what a display widget holds on to. The widget reports
//! touches with [`ImageMap::record_touch`] and, on click, calls
//! [`ImageMap::perform_click`] with its current [`DisplayTransform`]. The map
//! converts the touch into declared-map coordinates, hit-tests its regions and
//! hands the first hit to the registered listener.
//!
//! The region set is shared ([`ImageMap::regions`]), so regions may be added or
//! removed from another thread while clicks are being dispatched.

use crate::config::ParserConfig;
use crate::error::{DeclarationError, MapError};
use crate::mapper::{CoordinateMapper, DisplayTransform, MapDimensions};
use crate::parser::{AreaDeclaration, MapDeclaration, ParseReport, RegionParser};
use crate::region::Region;
use crate::region_set::RegionSet;
use crate::types::Point;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Called with the map and the region that was clicked.
pub type ClickListener = Arc<dyn Fn(&ImageMap, &Region) + Send + Sync>;

pub struct ImageMap {
    mapper: CoordinateMapper,
    parser: RegionParser,
    regions: Arc<RegionSet>,
    last_touch: Mutex<Option<Point<f32>>>,
    listener: RwLock<Option<ClickListener>>,
}

impl ImageMap {
    /// An empty map declared against `dimensions`.
    pub fn new(dimensions: MapDimensions, parser_config: ParserConfig) -> Self {
        ImageMap {
            mapper: CoordinateMapper::new(dimensions),
            parser: RegionParser::new(parser_config),
            regions: Arc::new(RegionSet::new()),
            last_touch: Mutex::new(None),
            listener: RwLock::new(None),
        }
    }

    /// Builds a map from a full declaration.
    ///
    /// Malformed areas are skipped and described in the returned report.
    ///
    /// # Errors
    ///
    /// [`MapError::InvalidMapDimensions`] if the declared width or height is 0.
    pub fn load(declaration: &MapDeclaration, parser_config: &ParserConfig) -> Result<(Self, ParseReport), MapError> {
        let dimensions = MapDimensions::new(declaration.width, declaration.height)?;
        let map = ImageMap::new(dimensions, parser_config.clone());
        let report = map.parser.populate(&declaration.areas, &map.regions);
        info!(
            width = dimensions.width(),
            height = dimensions.height(),
            regions = map.regions.len(),
            skipped = report.skipped_count,
            "Loaded image map"
        );
        Ok((map, report))
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.mapper.declared()
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Shared handle to the region set.
    pub fn regions(&self) -> Arc<RegionSet> {
        Arc::clone(&self.regions)
    }

    pub fn add_region(&self, region: Region) -> Arc<Region> {
        self.regions.add(region)
    }

    /// Parses and appends one more declaration.
    pub fn add_declaration(&self, declaration: &AreaDeclaration) -> Result<Arc<Region>, DeclarationError> {
        let region = self.parser.try_build_declaration(declaration)?;
        Ok(self.regions.add(region))
    }

    pub fn remove_region(&self, region: &Arc<Region>) -> bool {
        self.regions.remove(region)
    }

    pub fn set_click_listener<F>(&self, listener: F)
    where
        F: Fn(&ImageMap, &Region) + Send + Sync + 'static,
    {
        *self.listener.write() = Some(Arc::new(listener));
    }

    pub fn clear_click_listener(&self) {
        *self.listener.write() = None;
    }

    pub fn has_click_listener(&self) -> bool {
        self.listener.read().is_some()
    }

    /// Remembers the raw display-surface position of the latest touch.
    pub fn record_touch(&self, x: f32, y: f32) {
        *self.last_touch.lock() = Some(Point::new(x, y));
    }

    pub fn last_touch(&self) -> Option<Point<f32>> {
        *self.last_touch.lock()
    }

    /// Maps a raw surface point and returns the first region under it.
    ///
    /// `None` both for a miss and for a display transform that cannot be
    /// inverted; [`ImageMap::try_resolve`] tells the two apart.
    pub fn resolve(&self, x: f32, y: f32, display: &DisplayTransform) -> Option<Arc<Region>> {
        match self.try_resolve(x, y, display) {
            Ok(hit) => hit,
            Err(e) => {
                warn!(raw_x = x, raw_y = y, "Cannot map touch: {}", e);
                None
            }
        }
    }

    /// # Errors
    ///
    /// [`MapError::Geometry`] when the display transform is not invertible.
    pub fn try_resolve(&self, x: f32, y: f32, display: &DisplayTransform) -> Result<Option<Arc<Region>>, MapError> {
        let point = self.mapper.try_map_point(x, y, display)?;
        debug!(raw_x = x, raw_y = y, map_x = point.x, map_y = point.y, "Mapped touch to map coordinates");
        Ok(self.regions.hit_test_point(point))
    }

    /// Dispatches a click at the last recorded touch.
    ///
    /// Returns `true` when a listener is registered and a region was hit; the
    /// listener has then been called. Returns `false` without a listener, without
    /// a recorded touch, when the display transform cannot be inverted, or when
    /// no region is under the touch.
    pub fn perform_click(&self, display: &DisplayTransform) -> bool {
        // Cloned out so the listener may change listeners or regions itself.
        let Some(listener) = self.listener.read().clone() else {
            return false;
        };
        let Some(touch) = self.last_touch() else {
            return false;
        };
        let Some(region) = self.resolve(touch.x, touch.y, display) else {
            return false;
        };

        debug!(
            region = %region,
            "Area {}[{}] was clicked",
            region.name().unwrap_or_default(),
            region.id()
        );
        listener(self, &region);
        true
    }
}

impl fmt::Debug for ImageMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageMap")
            .field("mapper", &self.mapper)
            .field("regions", &self.regions.len())
            .field("last_touch", &self.last_touch())
            .field("has_listener", &self.has_click_listener())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::region::RegionId;
    use crate::types::AffineTransform;
    use parking_lot::Mutex as TestMutex;
    use static_assertions::assert_impl_all;

    assert_impl_all!(ImageMap: Send, Sync);

    fn identity_display() -> DisplayTransform {
        DisplayTransform::with_image(AffineTransform::identity(), 100.0, 100.0)
    }

    fn kitchen_map() -> ImageMap {
        let declaration = MapDeclaration {
            width: 100,
            height: 100,
            areas: vec![
                AreaDeclaration::new(1, "rect", "10,10,40,40").with_attribute("title", "Kitchen"),
                AreaDeclaration::new(2, "circle", "70,70,10"),
            ],
        };
        let (map, report) = ImageMap::load(&declaration, &ParserConfig::default()).unwrap();
        assert!(report.is_clean());
        map
    }

    #[test]
    fn test_load_rejects_zero_dimensions() {
        let declaration = MapDeclaration { width: 0, height: 10, areas: vec![] };
        assert!(matches!(
            ImageMap::load(&declaration, &ParserConfig::default()),
            Err(MapError::InvalidMapDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_perform_click_invokes_listener() {
        let map = kitchen_map();
        let clicked = Arc::new(TestMutex::new(Vec::new()));
        let sink = Arc::clone(&clicked);
        map.set_click_listener(move |_, region| sink.lock().push(region.id().get()));

        map.record_touch(20.0, 20.0);
        assert!(map.perform_click(&identity_display()));
        map.record_touch(72.0, 68.0);
        assert!(map.perform_click(&identity_display()));
        map.record_touch(95.0, 5.0);
        assert!(!map.perform_click(&identity_display()));

        assert_eq!(*clicked.lock(), vec![1, 2]);
    }

    #[test]
    fn test_perform_click_without_listener_or_touch() {
        let map = kitchen_map();
        map.record_touch(20.0, 20.0);
        assert!(!map.perform_click(&identity_display()));

        let fresh = kitchen_map();
        fresh.set_click_listener(|_, _| {});
        assert!(!fresh.perform_click(&identity_display()));
        assert!(fresh.has_click_listener());
        fresh.clear_click_listener();
        assert!(!fresh.has_click_listener());
    }

    #[test]
    fn test_perform_click_with_singular_transform() {
        let map = kitchen_map();
        map.set_click_listener(|_, _| panic!("listener must not run"));
        map.record_touch(20.0, 20.0);
        let flat = DisplayTransform::with_image(AffineTransform::scale(1.0, 0.0), 100.0, 100.0);
        assert!(!map.perform_click(&flat));
        assert!(matches!(
            map.try_resolve(20.0, 20.0, &flat),
            Err(MapError::Geometry(GeometryError::NonInvertibleTransform))
        ));
        assert_eq!(
            map.try_resolve(20.0, 20.0, &identity_display()).unwrap().map(|r| r.id()),
            RegionId::new(1)
        );
    }

    #[test]
    fn test_listener_can_remove_the_clicked_region() {
        let map = kitchen_map();
        map.set_click_listener(|map, region| {
            if let Some(handle) = map.regions().get(region.id()) {
                map.remove_region(&handle);
            }
        });
        map.record_touch(20.0, 20.0);
        assert!(map.perform_click(&identity_display()));
        assert!(!map.perform_click(&identity_display()));
        assert_eq!(map.regions().len(), 1);
    }

    #[test]
    fn test_resolve_through_scaled_display() {
        let map = kitchen_map();
        // 50x50 image displayed at 4x; the map was declared at 100x100.
        let display = DisplayTransform::with_image(AffineTransform::scale(4.0, 4.0), 50.0, 50.0);
        let hit = map.resolve(50.0, 50.0, &display).map(|r| r.id());
        assert_eq!(hit, RegionId::new(1));
        assert!(map.resolve(10.0, 10.0, &display).is_none());
    }

    #[test]
    fn test_add_declaration_and_region() {
        let map = ImageMap::new(MapDimensions::new(10, 10).unwrap(), ParserConfig::default());
        assert_eq!(
            map.add_declaration(&AreaDeclaration::new(0, "rect", "0,0,5,5")).unwrap_err(),
            DeclarationError::MissingId
        );
        let handle = map.add_declaration(&AreaDeclaration::new(3, "rect", "0,0,5,5")).unwrap();
        assert_eq!(map.resolve(2.0, 2.0, &DisplayTransform::default()).map(|r| r.id()), Some(handle.id()));
        assert!(map.remove_region(&handle));
        assert!(map.regions().is_empty());
    }
}
