use crate::fixture::{init_log, WELL_FORMED};
use ewkt::*;

fn xs(points: &[Point]) -> Vec<(f64, f64)> { points.iter().map(|p| (p.x, p.y)).collect() }

#[test]
fn point() {
  init_log();
  let g = parse("POINT(1 2)").unwrap();
  assert_eq!(g.declared_type(), GeometryType::Point);
  assert_eq!(g.dims, Dimension::Xy);
  assert_eq!(g.shape, Shape::Point(Point { x: 1.0, y: 2.0, z: None, m: None }));
}

#[test]
fn linestring_order() {
  let g = parse("LINESTRING(0 0, 1 1, 2 2)").unwrap();
  match g.shape {
    Shape::LineString(l) => assert_eq!(xs(&l.points), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
    s => panic!("unexpected {:?}", s),
  }
}

#[test]
fn polygon() {
  let g = parse("POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))").unwrap();
  match g.shape {
    Shape::Polygon(p) => {
      assert!(p.interiors.is_empty());
      assert_eq!(xs(&p.exterior.points), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    }
    s => panic!("unexpected {:?}", s),
  }
  let g = parse("POLYGON((0 0, 10 0, 10 10, 0 0), (1 1, 2 1, 2 2, 1 1), (5 5, 6 5, 6 6, 5 5))").unwrap();
  match g.shape {
    Shape::Polygon(p) => {
      assert_eq!(p.interiors.len(), 2);
      assert_eq!(p.interiors[0].points[0], Point::xy(1.0, 1.0));
      assert_eq!(p.interiors[1].points[0], Point::xy(5.0, 5.0));
    }
    s => panic!("unexpected {:?}", s),
  }
}

#[test]
fn collection() {
  let g = parse("GEOMETRYCOLLECTION(POINT(0 0), LINESTRING(1 1, 2 2))").unwrap();
  match g.shape {
    Shape::GeometryCollection(shapes) => {
      assert_eq!(shapes.len(), 2);
      assert_eq!(shapes[0], Shape::Point(Point::xy(0.0, 0.0)));
      assert_eq!(shapes[1].kind(), GeometryType::LineString);
    }
    s => panic!("unexpected {:?}", s),
  }
}

#[test]
fn truncated_point() {
  let mut ctx = ParseContext::default();
  parse_into("POINT(1 2", &ParserConfig::default(), &mut ctx);
  assert!(ctx.has_error);
  assert!(ctx.result.is_none());
  assert!(matches!(ctx.error, Some(Error::Syntax { offset: 9, .. })));
}

#[test]
fn multipoint_dialects() {
  let flat = parse("MULTIPOINT(0 0, 1 1)").unwrap();
  let bracketed = parse("MULTIPOINT((0 0), (1 1))").unwrap();
  assert_eq!(flat, bracketed);
  assert_eq!(flat.shape, Shape::MultiPoint(vec![Point::xy(0.0, 0.0), Point::xy(1.0, 1.0)]));
}

#[test]
fn every_keyword() {
  for &(text, kind, count) in WELL_FORMED.iter() {
    let g = parse(text).unwrap_or_else(|e| panic!("{}: {}", text, e));
    assert_eq!(g.declared_type(), kind, "{}", text);
    assert_eq!(g.shape.point_count(), count, "{}", text);
    let lower = parse(&text.to_lowercase()).unwrap();
    assert_eq!(lower, g);
  }
}

#[test]
fn ordinates() {
  let count = |text: &str| {
    let g = parse(text).unwrap();
    let mut dims = Vec::new();
    g.shape.for_each_point(&mut |p| dims.push(p.dims()));
    (g.dims, dims)
  };
  assert_eq!(count("LINESTRING(0 0 1, 1 1 2, 3 3 3)"), (Dimension::Xyz, vec![Dimension::Xyz; 3]));
  assert_eq!(count("LINESTRING(0 0 1 7, 1 1 2 7)"), (Dimension::Xyzm, vec![Dimension::Xyzm; 2]));
  assert_eq!(count("MULTIPOINTM((0 0 1), (1 1 2))"), (Dimension::Xym, vec![Dimension::Xym; 2]));
  let g = parse("POINT(1 2 3 4)").unwrap();
  assert_eq!(g.shape, Shape::Point(Point { x: 1.0, y: 2.0, z: Some(3.0), m: Some(4.0) }));
  let g = parse("POINTM(1 2 3)").unwrap();
  assert_eq!(g.shape, Shape::Point(Point { x: 1.0, y: 2.0, z: None, m: Some(3.0) }));
}

#[test]
fn round_trip() {
  for &(text, _, _) in WELL_FORMED.iter() {
    let g = parse(text).unwrap();
    let written = g.to_ewkt();
    assert_eq!(parse(&written).unwrap(), g, "{} -> {}", text, written);
  }
  assert_eq!(parse("SRID=4326;POINTM(1.5 -2 1e-3)").unwrap().to_string(), "SRID=4326;POINTM(1.5 -2 0.001)");
}

#[test]
fn bounding_box() {
  let g = parse("GEOMETRYCOLLECTION(POINT(-3 4), LINESTRING(1 1, 20 -7))").unwrap();
  assert_eq!(g.mbr(), Mbr { min_x: -3.0, min_y: -7.0, max_x: 20.0, max_y: 4.0 });
}

#[test]
fn closed_rings() {
  let open = "POLYGON((0 0, 10 0, 10 10, 0 10))";
  assert!(parse(open).is_ok());
  let cfg = ParserConfig::from_toml("require_closed_rings = true").unwrap();
  assert_eq!(parse_with(open, &cfg), Err(Error::Build(BuildError::UnclosedRing)));
  assert!(parse_with("POLYGON((0 0, 10 0, 10 10, 0 0))", &cfg).is_ok());
}

#[test]
fn whitespace_and_newlines() {
  let g = parse("\n  LINESTRING (\n 0 0 ,\n 1 1\n )\n").unwrap();
  assert_eq!(g.shape.point_count(), 2);
}
