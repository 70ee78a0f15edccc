use crate::{builder::Builder, geometry::*, value::*, BuildError, ParseContext};
use std::str::FromStr;

// the behaviour of a rule, named by the `act` of its group in the grammar file
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Build {
  Nop,
  Pass,
  Empty,
  Cons,
  Num,
  Shape,
  Result,
  Point(Dimension),
  LineString(Dimension),
  Ring(Dimension),
  Polygon(Dimension),
  MultiPoint(Dimension),
  MultiLineString(Dimension),
  MultiPolygon(Dimension),
  Collection(Dimension),
}

impl FromStr for Build {
  type Err = String;

  fn from_str(s: &str) -> Result<Build, String> {
    let simple = match s {
      "nop" => Some(Build::Nop),
      "pass" => Some(Build::Pass),
      "empty" => Some(Build::Empty),
      "cons" => Some(Build::Cons),
      "num" => Some(Build::Num),
      "shape" => Some(Build::Shape),
      "result" => Some(Build::Result),
      _ => None,
    };
    if let Some(b) = simple { return Ok(b); }
    let err = || format!("unknown rule act: \"{}\"", s);
    let idx = s.rfind('_').ok_or_else(err)?;
    let dims = match &s[idx + 1..] {
      "xy" => Dimension::Xy,
      "xyz" => Dimension::Xyz,
      "xym" => Dimension::Xym,
      "xyzm" => Dimension::Xyzm,
      _ => return Err(err()),
    };
    Ok(match &s[..idx] {
      "point" => Build::Point(dims),
      "linestring" => Build::LineString(dims),
      "ring" => Build::Ring(dims),
      "polygon" => Build::Polygon(dims),
      "multipoint" => Build::MultiPoint(dims),
      "multilinestring" => Build::MultiLineString(dims),
      "multipolygon" => Build::MultiPolygon(dims),
      "collection" => Build::Collection(dims),
      _ => return Err(err()),
    })
  }
}

fn single(values: Vec<Value>) -> Value {
  values.into_iter().find(|v| !matches!(v, Value::Unit)).unwrap_or(Value::Unit)
}

// `values` are the rhs values in rhs order, keywords and punctuation carry `Value::Unit`
pub fn apply(build: Build, values: Vec<Value>, b: &Builder, ctx: &mut ParseContext) -> Result<Value, BuildError> {
  Ok(match build {
    Build::Nop => Value::Unit,
    Build::Pass | Build::Num => single(values),
    Build::Empty => Value::Nil,
    Build::Cons => {
      let mut it = values.into_iter().filter(|v| !matches!(v, Value::Unit));
      match (it.next(), it.next()) {
        (Some(item), Some(rest)) => rest.cons(item)?,
        (Some(v), None) | (None, Some(v)) => return Err(BuildError::UnexpectedValue(v.kind())),
        (None, None) => return Err(BuildError::UnexpectedValue(Value::Unit.kind())),
      }
    }
    Build::Shape => match single(values) {
      Value::Point(p) => Value::Shape(Shape::Point(p)),
      Value::LineString(l) => Value::Shape(Shape::LineString(l)),
      Value::Polygon(p) => Value::Shape(Shape::Polygon(p)),
      v => return Err(BuildError::UnexpectedValue(v.kind())),
    },
    Build::Result => match single(values) {
      Value::Shape(s) => {
        ctx.result = Some(b.finalize_geometry(s)?);
        Value::Unit
      }
      v => return Err(BuildError::UnexpectedValue(v.kind())),
    },
    Build::Point(d) => Value::Point(b.make_point(d, &gather_nums(values)?)?),
    Build::LineString(d) => Value::LineString(b.make_linestring(d, gather_points(values)?)?),
    Build::Ring(d) => Value::Ring(b.make_ring(d, gather_points(values)?)?),
    Build::Polygon(d) => Value::Polygon(b.make_polygon(d, gather_rings(values)?)?),
    Build::MultiPoint(d) => Value::Shape(b.make_multipoint(d, gather_points(values)?)?),
    Build::MultiLineString(d) => Value::Shape(b.make_multilinestring(d, gather_linestrings(values)?)?),
    Build::MultiPolygon(d) => Value::Shape(b.make_multipolygon(d, gather_polygons(values)?)?),
    Build::Collection(d) => Value::Shape(b.make_geometry_collection(d, gather_shapes(values)?)?),
  })
}
