// novade-imagemap/tests/hit_testing.rs

use novade_imagemap::{
    AffineTransform, Circle, CoordinateMapper, DisplayTransform, GeometryError, MapDimensions, ParserConfig, Point,
    PointInt, Polygon, Rectangle, Region, RegionId, RegionParser, RegionSet,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn id(raw: u32) -> RegionId {
    RegionId::new(raw).expect("non-zero id")
}

#[rstest]
#[case(15.0, 15.0, true)]
#[case(10.0, 15.0, false)]
#[case(20.0, 20.0, false)]
fn rectangle_containment_is_strict(#[case] x: f32, #[case] y: f32, #[case] inside: bool) {
    let region = Region::new(id(1), None, Rectangle::new(10.0, 10.0, 20.0, 20.0));
    assert_eq!(region.contains(x, y), inside);
}

#[rstest]
#[case(3.0, 4.0, false)]
#[case(3.0, 3.0, true)]
fn circle_containment_is_strict(#[case] x: f32, #[case] y: f32, #[case] inside: bool) {
    let region = Region::new(id(1), None, Circle::new(0.0, 0.0, 5.0));
    assert_eq!(region.contains(x, y), inside);
}

#[test]
fn square_polygon_hit_and_miss() {
    let square = Polygon::from_vertices(vec![(0, 0), (0, 10), (10, 10), (10, 0)]).unwrap();
    assert!(square.contains(5.0, 5.0));
    assert!(!square.contains(15.0, 5.0));
}

#[test]
fn small_square_centroid() {
    let square = Polygon::from_vertices(vec![(0, 0), (0, 2), (2, 2), (2, 0)]).unwrap();
    assert_eq!(square.centroid(), Ok(Point::new(1.0, 1.0)));
}

#[test]
fn collinear_polygon_reports_degenerate_geometry() {
    let line = Polygon::parse("0,0,5,5,10,10", true).unwrap();
    assert_eq!(line.area(), 0.0);
    match line.centroid() {
        Err(GeometryError::DegeneratePolygon { vertices }) => assert_eq!(vertices, 3),
        other => panic!("Expected DegeneratePolygon, got {:?}", other),
    }
    let region = Region::new(id(9), None, line);
    assert!(region.origin().is_none());
}

#[test]
fn overlapping_regions_first_inserted_wins() {
    let set = RegionSet::new();
    set.add(Region::new(id(1), Some("Outer".to_string()), Rectangle::new(0.0, 0.0, 100.0, 100.0)));
    set.add(Region::new(id(2), Some("Inner".to_string()), Circle::new(50.0, 50.0, 10.0)));

    let hit = set.hit_test(50.0, 50.0).expect("a region");
    assert_eq!(hit.id(), id(1));
    assert_eq!(hit.name(), Some("Outer"));
}

#[test]
fn rect_coords_are_kept_verbatim() {
    let parser = RegionParser::new(ParserConfig::default());
    let region = parser.build_region("rect", None, "10,10,20,20", 4).unwrap();
    assert_eq!(region.value("coords"), Some("10,10,20,20"));
}

#[test]
fn malformed_rect_adds_nothing() {
    let parser = RegionParser::default();
    let set = RegionSet::new();
    assert!(parser.build_region("rect", None, "1,2,3", 1).is_none());

    let report = parser.populate(&[novade_imagemap::AreaDeclaration::new(1, "rect", "1,2,3")], &set);
    assert_eq!(report.added, 0);
    assert_eq!(report.skipped_count, 1);
    assert!(set.is_empty());
}

#[test]
fn identity_transform_maps_point_unchanged() {
    let mapper = CoordinateMapper::new(MapDimensions::new(100, 100).unwrap());
    let display = DisplayTransform::with_image(AffineTransform::identity(), 100.0, 100.0);
    assert_eq!(mapper.map_point(50.0, 50.0, &display), Some(PointInt::new(50, 50)));
}

#[test]
fn tap_on_zoomed_and_panned_image_resolves_declared_region() {
    // Regions declared against a 1000x1000 original; a 500x500 rendition is
    // shown at 2x and panned 100px left.
    let set = RegionSet::new();
    set.add(Region::new(id(7), None, Polygon::parse("400,400,600,400,600,600,400,600", true).unwrap()));

    let mapper = CoordinateMapper::new(MapDimensions::new(1000, 1000).unwrap());
    let matrix = AffineTransform::translate(-100.0, 0.0).then(&AffineTransform::scale(2.0, 2.0));
    let display = DisplayTransform::with_image(matrix, 500.0, 500.0);

    // Surface (400, 500) -> image (250, 250) -> declared (500, 500).
    let point = mapper.map_point(400.0, 500.0, &display).unwrap();
    assert_eq!(point, PointInt::new(500, 500));
    assert_eq!(set.hit_test_point(point).map(|r| r.id()), Some(id(7)));
}
