use ewkt::*;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value=f64> {
  prop_oneof![(-1000i32..1000).prop_map(f64::from), -1e6f64..1e6]
}

fn point(dims: Dimension) -> impl Strategy<Value=Point> {
  prop::collection::vec(coord(), dims.ordinates()).prop_map(move |c| Point {
    x: c[0],
    y: c[1],
    z: if dims.has_z() { Some(c[2]) } else { None },
    m: match dims { Dimension::Xym => Some(c[2]), Dimension::Xyzm => Some(c[3]), _ => None },
  })
}

fn dims() -> impl Strategy<Value=Dimension> {
  prop_oneof![Just(Dimension::Xy), Just(Dimension::Xyz), Just(Dimension::Xym), Just(Dimension::Xyzm)]
}

fn ring(dims: Dimension) -> impl Strategy<Value=Ring> {
  prop::collection::vec(point(dims), 3..8).prop_map(|mut points| {
    points.push(points[0]);
    Ring { points }
  })
}

fn polygon(dims: Dimension) -> impl Strategy<Value=Polygon> {
  (ring(dims), prop::collection::vec(ring(dims), 0..3)).prop_map(|(exterior, interiors)| Polygon { exterior, interiors })
}

fn shape(dims: Dimension) -> impl Strategy<Value=Shape> {
  let leaf = prop_oneof![
    point(dims).prop_map(Shape::Point),
    prop::collection::vec(point(dims), 2..6).prop_map(|points| Shape::LineString(LineString { points })),
    polygon(dims).prop_map(Shape::Polygon),
    prop::collection::vec(polygon(dims), 1..3).prop_map(Shape::MultiPolygon),
    prop::collection::vec(point(dims), 1..6).prop_map(Shape::MultiPoint),
    prop::collection::vec(prop::collection::vec(point(dims), 2..4).prop_map(|points| LineString { points }), 1..4)
      .prop_map(Shape::MultiLineString),
  ];
  leaf.prop_recursive(3, 24, 4, |inner| prop::collection::vec(inner, 1..4).prop_map(Shape::GeometryCollection))
}

fn geometry() -> impl Strategy<Value=Geometry> {
  (any::<i32>(), dims()).prop_flat_map(|(srid, dims)| shape(dims).prop_map(move |shape| Geometry { srid, dims, shape }))
}

proptest! {
  /// Writing a geometry and parsing it back gives the same tree.
  #[test]
  fn prop_round_trip(g in geometry()) {
    let text = g.to_ewkt();
    prop_assert_eq!(parse(&text), Ok(g));
  }

  /// Points come out in the order they were written.
  #[test]
  fn prop_linestring_order(xs in prop::collection::vec(-1000i32..1000, 2..40)) {
    let text = format!("LINESTRING({})", xs.iter().map(|x| format!("{} 0", x)).collect::<Vec<_>>().join(", "));
    match parse(&text).map(|g| g.shape) {
      Ok(Shape::LineString(l)) => prop_assert_eq!(l.points.iter().map(|p| p.x as i32).collect::<Vec<_>>(), xs),
      r => prop_assert!(false, "unexpected {:?}", r),
    }
  }

  /// Every point carries exactly the ordinates its text has.
  #[test]
  fn prop_ordinate_count(n in 2usize..5, points in 1usize..10) {
    let coords = vec!["1"; n].join(" ");
    let text = format!("MULTIPOINT({})", vec![coords.as_str(); points].join(", "));
    let g = parse(&text).unwrap();
    prop_assert_eq!(g.dims.ordinates(), n);
    prop_assert_eq!(g.shape.point_count(), points);
  }

  /// Cutting a valid text short never gives a geometry.
  #[test]
  fn prop_truncated_fails(cut in 1usize..38) {
    let text = "POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))";
    prop_assert!(parse(&text[..cut]).is_err());
  }
}
