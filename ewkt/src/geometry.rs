use std::fmt;

// which ordinates every point of a geometry carries
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Dimension {
  Xy,
  Xyz,
  Xym,
  Xyzm,
}

impl Dimension {
  pub fn ordinates(self) -> usize {
    match self { Dimension::Xy => 2, Dimension::Xyz | Dimension::Xym => 3, Dimension::Xyzm => 4 }
  }

  pub fn has_z(self) -> bool { matches!(self, Dimension::Xyz | Dimension::Xyzm) }
  pub fn has_m(self) -> bool { matches!(self, Dimension::Xym | Dimension::Xyzm) }
}

impl fmt::Display for Dimension {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self { Dimension::Xy => "XY", Dimension::Xyz => "XYZ", Dimension::Xym => "XYM", Dimension::Xyzm => "XYZM" })
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
  pub z: Option<f64>,
  pub m: Option<f64>,
}

impl Point {
  pub fn xy(x: f64, y: f64) -> Point { Point { x, y, z: None, m: None } }

  pub fn dims(&self) -> Dimension {
    match (self.z.is_some(), self.m.is_some()) {
      (false, false) => Dimension::Xy,
      (true, false) => Dimension::Xyz,
      (false, true) => Dimension::Xym,
      (true, true) => Dimension::Xyzm,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
  pub points: Vec<Point>,
}

// a closed sequence of at least 4 points
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
  pub points: Vec<Point>,
}

impl Ring {
  pub fn is_closed(&self) -> bool {
    match (self.points.first(), self.points.last()) {
      (Some(first), Some(last)) => first == last,
      _ => false,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  pub exterior: Ring,
  pub interiors: Vec<Ring>,
}

impl Polygon {
  pub fn rings(&self) -> impl Iterator<Item=&Ring> {
    std::iter::once(&self.exterior).chain(self.interiors.iter())
  }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GeometryType {
  Point,
  LineString,
  Polygon,
  MultiPoint,
  MultiLineString,
  MultiPolygon,
  GeometryCollection,
}

impl GeometryType {
  pub fn keyword(self) -> &'static str {
    match self {
      GeometryType::Point => "POINT",
      GeometryType::LineString => "LINESTRING",
      GeometryType::Polygon => "POLYGON",
      GeometryType::MultiPoint => "MULTIPOINT",
      GeometryType::MultiLineString => "MULTILINESTRING",
      GeometryType::MultiPolygon => "MULTIPOLYGON",
      GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
  Point(Point),
  LineString(LineString),
  Polygon(Polygon),
  MultiPoint(Vec<Point>),
  MultiLineString(Vec<LineString>),
  MultiPolygon(Vec<Polygon>),
  GeometryCollection(Vec<Shape>),
}

impl Shape {
  pub fn kind(&self) -> GeometryType {
    match self {
      Shape::Point(_) => GeometryType::Point,
      Shape::LineString(_) => GeometryType::LineString,
      Shape::Polygon(_) => GeometryType::Polygon,
      Shape::MultiPoint(_) => GeometryType::MultiPoint,
      Shape::MultiLineString(_) => GeometryType::MultiLineString,
      Shape::MultiPolygon(_) => GeometryType::MultiPolygon,
      Shape::GeometryCollection(_) => GeometryType::GeometryCollection,
    }
  }

  pub fn for_each_point<F: FnMut(&Point)>(&self, f: &mut F) {
    match self {
      Shape::Point(p) => f(p),
      Shape::LineString(l) => l.points.iter().for_each(f),
      Shape::Polygon(p) => p.rings().flat_map(|r| r.points.iter()).for_each(f),
      Shape::MultiPoint(ps) => ps.iter().for_each(f),
      Shape::MultiLineString(ls) => ls.iter().flat_map(|l| l.points.iter()).for_each(f),
      Shape::MultiPolygon(ps) => ps.iter().flat_map(|p| p.rings()).flat_map(|r| r.points.iter()).for_each(f),
      Shape::GeometryCollection(shapes) => for s in shapes { s.for_each_point(f); },
    }
  }

  pub fn first_point(&self) -> Option<&Point> {
    match self {
      Shape::Point(p) => Some(p),
      Shape::LineString(l) => l.points.first(),
      Shape::Polygon(p) => p.exterior.points.first(),
      Shape::MultiPoint(ps) => ps.first(),
      Shape::MultiLineString(ls) => ls.first().and_then(|l| l.points.first()),
      Shape::MultiPolygon(ps) => ps.first().and_then(|p| p.exterior.points.first()),
      Shape::GeometryCollection(shapes) => shapes.first().and_then(Shape::first_point),
    }
  }

  pub fn point_count(&self) -> usize {
    let mut n = 0;
    self.for_each_point(&mut |_| n += 1);
    n
  }
}

// minimum bounding rectangle over X and Y
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mbr {
  pub min_x: f64,
  pub min_y: f64,
  pub max_x: f64,
  pub max_y: f64,
}

/// A fully parsed geometry: the outermost shape, its spatial reference id, and the
/// ordinates carried by every point.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
  pub srid: i32,
  pub dims: Dimension,
  pub shape: Shape,
}

impl Geometry {
  /// The geometry type named by the outermost keyword.
  pub fn declared_type(&self) -> GeometryType { self.shape.kind() }

  pub fn mbr(&self) -> Mbr {
    let mut mbr = Mbr { min_x: f64::INFINITY, min_y: f64::INFINITY, max_x: f64::NEG_INFINITY, max_y: f64::NEG_INFINITY };
    self.shape.for_each_point(&mut |p| {
      mbr.min_x = mbr.min_x.min(p.x);
      mbr.min_y = mbr.min_y.min(p.y);
      mbr.max_x = mbr.max_x.max(p.x);
      mbr.max_y = mbr.max_y.max(p.y);
    });
    mbr
  }
}
