use ewkt::GeometryType;
use lazy_static::lazy_static;

lazy_static! {
  // one text for every keyword and dimension, with the type it declares and its point count
  pub static ref WELL_FORMED: Vec<(&'static str, GeometryType, usize)> = vec![
    ("POINT(1 2)", GeometryType::Point, 1),
    ("POINT(1 2 3)", GeometryType::Point, 1),
    ("POINT(1 2 3 4)", GeometryType::Point, 1),
    ("POINTM(1 2 3)", GeometryType::Point, 1),
    ("LINESTRING(0 0, 1 1, 2 2)", GeometryType::LineString, 3),
    ("LINESTRING(0 0 0, 1 1 1)", GeometryType::LineString, 2),
    ("LINESTRINGM(0 0 5, 1 1 6)", GeometryType::LineString, 2),
    ("POLYGON((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 3 2, 3 3, 2 2))", GeometryType::Polygon, 9),
    ("POLYGON((0 0 1 9, 10 0 1 9, 10 10 1 9, 0 0 1 9))", GeometryType::Polygon, 4),
    ("POLYGONM((0 0 1, 10 0 1, 10 10 1, 0 0 1))", GeometryType::Polygon, 4),
    ("MULTIPOINT(0 0, 1 1)", GeometryType::MultiPoint, 2),
    ("MULTIPOINT((0 0), (1 1), (2 2))", GeometryType::MultiPoint, 3),
    ("MULTIPOINT((0 0 0))", GeometryType::MultiPoint, 1),
    ("MULTIPOINTM(0 0 1, 1 1 2)", GeometryType::MultiPoint, 2),
    ("MULTILINESTRING((0 0, 1 1), (2 2, 3 3, 4 4))", GeometryType::MultiLineString, 5),
    ("MULTILINESTRINGM((0 0 1, 1 1 1))", GeometryType::MultiLineString, 2),
    ("MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))", GeometryType::MultiPolygon, 8),
    ("MULTIPOLYGONM(((0 0 1, 1 0 1, 1 1 1, 0 0 1)))", GeometryType::MultiPolygon, 4),
    ("GEOMETRYCOLLECTION(POINT(0 0), LINESTRING(1 1, 2 2))", GeometryType::GeometryCollection, 3),
    ("GEOMETRYCOLLECTION(POINT(0 0 0), MULTIPOINT(1 1 1, 2 2 2))", GeometryType::GeometryCollection, 3),
    ("GEOMETRYCOLLECTIONM(POINTM(0 0 1), POLYGONM((0 0 1, 1 0 1, 1 1 1, 0 0 1)))", GeometryType::GeometryCollection, 5),
    ("GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(POINT(1 1)), POINT(2 2), GEOMETRYCOLLECTION(MULTILINESTRING((0 0, 1 1))))",
     GeometryType::GeometryCollection, 4),
  ];
}

pub fn init_log() {
  // every test shares one subscriber, `try_init` fails harmlessly after the first
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}
