use crate::{geometry::*, BuildError};

// the semantic value of one parser stack entry
// lists come from right recursive continuations, so they are built newest-last
// (the reverse of declaration order), and are reversed once when gathered into an aggregate
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Unit,
  // an empty continuation, the empty list of any element type
  Nil,
  Num(f64),
  Point(Point),
  Points(Vec<Point>),
  LineString(LineString),
  LineStrings(Vec<LineString>),
  Ring(Ring),
  Rings(Vec<Ring>),
  Polygon(Polygon),
  Polygons(Vec<Polygon>),
  Shape(Shape),
  Shapes(Vec<Shape>),
}

impl Value {
  pub fn kind(&self) -> &'static str {
    match self {
      Value::Unit => "unit",
      Value::Nil => "empty list",
      Value::Num(_) => "number",
      Value::Point(_) => "point",
      Value::Points(_) => "point list",
      Value::LineString(_) => "linestring",
      Value::LineStrings(_) => "linestring list",
      Value::Ring(_) => "ring",
      Value::Rings(_) => "ring list",
      Value::Polygon(_) => "polygon",
      Value::Polygons(_) => "polygon list",
      Value::Shape(_) => "geometry",
      Value::Shapes(_) => "geometry list",
    }
  }

  /// Puts `item` in front of this list. `self` must be a list (or `Nil`) of `item`'s type.
  pub fn cons(self, item: Value) -> Result<Value, BuildError> {
    macro_rules! cons {
      ($list: expr, $item: expr; $($one: ident => $many: ident),*) => {
        match ($list, $item) {
          $(
            (Value::Nil, Value::$one(x)) => Ok(Value::$many(vec![x])),
            (Value::$many(mut l), Value::$one(x)) => { l.push(x); Ok(Value::$many(l)) }
          )*
          (_, item) => Err(BuildError::UnexpectedValue(item.kind())),
        }
      };
    }
    cons!(self, item; Point => Points, LineString => LineStrings, Ring => Rings, Polygon => Polygons, Shape => Shapes)
  }
}

macro_rules! gather {
  ($name: ident, $one: ident, $many: ident, $ty: ty) => {
    /// Flattens single elements and continuation lists, in declaration order.
    pub fn $name(values: impl IntoIterator<Item=Value>) -> Result<Vec<$ty>, BuildError> {
      let mut out = Vec::new();
      for v in values {
        match v {
          Value::$one(x) => out.push(x),
          Value::$many(mut l) => {
            l.reverse();
            out.append(&mut l);
          }
          Value::Nil | Value::Unit => {}
          v => return Err(BuildError::UnexpectedValue(v.kind())),
        }
      }
      Ok(out)
    }
  };
}

gather!(gather_points, Point, Points, Point);
gather!(gather_linestrings, LineString, LineStrings, LineString);
gather!(gather_rings, Ring, Rings, Ring);
gather!(gather_polygons, Polygon, Polygons, Polygon);
gather!(gather_shapes, Shape, Shapes, Shape);

pub fn gather_nums(values: impl IntoIterator<Item=Value>) -> Result<Vec<f64>, BuildError> {
  values.into_iter().filter(|v| !matches!(v, Value::Unit)).map(|v| match v {
    Value::Num(n) => Ok(n),
    v => Err(BuildError::UnexpectedValue(v.kind())),
  }).collect()
}
