use crate::geometry::*;
use std::fmt::{self, Write};

// coordinates are space separated, points and members are separated by a bare comma
// f64's Display is the shortest text that reads back to the same value

fn point(f: &mut dyn Write, p: &Point) -> fmt::Result {
  write!(f, "{} {}", p.x, p.y)?;
  if let Some(z) = p.z { write!(f, " {}", z)?; }
  if let Some(m) = p.m { write!(f, " {}", m)?; }
  Ok(())
}

fn points(f: &mut dyn Write, ps: &[Point]) -> fmt::Result {
  f.write_char('(')?;
  for (i, p) in ps.iter().enumerate() {
    if i != 0 { f.write_char(',')?; }
    point(f, p)?;
  }
  f.write_char(')')
}

fn polygon(f: &mut dyn Write, p: &Polygon) -> fmt::Result {
  f.write_char('(')?;
  for (i, r) in p.rings().enumerate() {
    if i != 0 { f.write_char(',')?; }
    points(f, &r.points)?;
  }
  f.write_char(')')
}

fn list<T>(f: &mut dyn Write, items: &[T], mut each: impl FnMut(&mut dyn Write, &T) -> fmt::Result) -> fmt::Result {
  f.write_char('(')?;
  for (i, item) in items.iter().enumerate() {
    if i != 0 { f.write_char(',')?; }
    each(f, item)?;
  }
  f.write_char(')')
}

// Z and ZM share the plain keyword, M alone gets a suffix
fn shape(f: &mut dyn Write, s: &Shape, dims: Dimension) -> fmt::Result {
  f.write_str(s.kind().keyword())?;
  if dims == Dimension::Xym { f.write_char('M')?; }
  match s {
    Shape::Point(p) => {
      f.write_char('(')?;
      point(f, p)?;
      f.write_char(')')
    }
    Shape::LineString(l) => points(f, &l.points),
    Shape::Polygon(p) => polygon(f, p),
    Shape::MultiPoint(ps) => points(f, ps),
    Shape::MultiLineString(ls) => list(f, ls, |f, l| points(f, &l.points)),
    Shape::MultiPolygon(ps) => list(f, ps, |f, p| polygon(f, p)),
    Shape::GeometryCollection(ss) => list(f, ss, |f, s| shape(f, s, dims)),
  }
}

impl fmt::Display for Geometry {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "SRID={};", self.srid)?;
    shape(f, &self.shape, self.dims)
  }
}

impl Geometry {
  pub fn to_ewkt(&self) -> String { self.to_string() }
}
