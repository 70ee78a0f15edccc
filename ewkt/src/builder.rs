use crate::{geometry::*, BuildError, ParserConfig};

// the factory behind every reduction that constructs geometry
#[derive(Debug, Clone)]
pub struct Builder {
  pub srid: i32,
  pub require_closed_rings: bool,
}

fn check_dims(expected: Dimension, points: &[Point]) -> Result<(), BuildError> {
  match points.iter().find(|p| p.dims() != expected) {
    Some(p) => Err(BuildError::DimensionMismatch { expected, found: p.dims() }),
    None => Ok(()),
  }
}

fn check_count(kind: &'static str, min: usize, found: usize) -> Result<(), BuildError> {
  if found < min { Err(BuildError::TooFewPoints { kind, min, found }) } else { Ok(()) }
}

impl Builder {
  pub fn new(srid: i32, cfg: &ParserConfig) -> Builder {
    Builder { srid, require_closed_rings: cfg.require_closed_rings }
  }

  pub fn make_point(&self, dims: Dimension, coords: &[f64]) -> Result<Point, BuildError> {
    let (x, y, z, m) = match (dims, coords) {
      (Dimension::Xy, &[x, y]) => (x, y, None, None),
      (Dimension::Xyz, &[x, y, z]) => (x, y, Some(z), None),
      (Dimension::Xym, &[x, y, m]) => (x, y, None, Some(m)),
      (Dimension::Xyzm, &[x, y, z, m]) => (x, y, Some(z), Some(m)),
      _ => {
        let found = match coords.len() { 0..=2 => Dimension::Xy, 3 => Dimension::Xyz, _ => Dimension::Xyzm };
        return Err(BuildError::DimensionMismatch { expected: dims, found });
      }
    };
    Ok(Point { x, y, z, m })
  }

  pub fn make_linestring(&self, dims: Dimension, points: Vec<Point>) -> Result<LineString, BuildError> {
    check_count("linestring", 2, points.len())?;
    check_dims(dims, &points)?;
    Ok(LineString { points })
  }

  pub fn make_ring(&self, dims: Dimension, points: Vec<Point>) -> Result<Ring, BuildError> {
    check_count("ring", 4, points.len())?;
    check_dims(dims, &points)?;
    let ring = Ring { points };
    if self.require_closed_rings && !ring.is_closed() {
      return Err(BuildError::UnclosedRing);
    }
    Ok(ring)
  }

  // the first ring is the exterior one
  pub fn make_polygon(&self, dims: Dimension, rings: Vec<Ring>) -> Result<Polygon, BuildError> {
    let mut rings = rings.into_iter();
    let exterior = rings.next().ok_or(BuildError::TooFewPoints { kind: "polygon", min: 4, found: 0 })?;
    let interiors = rings.collect::<Vec<_>>();
    for r in std::iter::once(&exterior).chain(interiors.iter()) {
      check_dims(dims, &r.points)?;
    }
    Ok(Polygon { exterior, interiors })
  }

  pub fn make_multipoint(&self, dims: Dimension, points: Vec<Point>) -> Result<Shape, BuildError> {
    check_count("multipoint", 1, points.len())?;
    check_dims(dims, &points)?;
    Ok(Shape::MultiPoint(points))
  }

  pub fn make_multilinestring(&self, dims: Dimension, lines: Vec<LineString>) -> Result<Shape, BuildError> {
    for l in &lines { check_dims(dims, &l.points)?; }
    Ok(Shape::MultiLineString(lines))
  }

  pub fn make_multipolygon(&self, dims: Dimension, polygons: Vec<Polygon>) -> Result<Shape, BuildError> {
    for r in polygons.iter().flat_map(Polygon::rings) { check_dims(dims, &r.points)?; }
    Ok(Shape::MultiPolygon(polygons))
  }

  // members were checked when they were built, so one point each tells their dimensions
  pub fn make_geometry_collection(&self, dims: Dimension, shapes: Vec<Shape>) -> Result<Shape, BuildError> {
    match shapes.iter().filter_map(Shape::first_point).find(|p| p.dims() != dims) {
      Some(p) => Err(BuildError::DimensionMismatch { expected: dims, found: p.dims() }),
      None => Ok(Shape::GeometryCollection(shapes)),
    }
  }

  // wraps the outermost shape into the parsed geometry
  pub fn finalize_geometry(&self, shape: Shape) -> Result<Geometry, BuildError> {
    let dims = shape.first_point().map(Point::dims).ok_or(BuildError::TooFewPoints { kind: shape.kind().keyword(), min: 1, found: 0 })?;
    Ok(Geometry { srid: self.srid, dims, shape })
  }
}
