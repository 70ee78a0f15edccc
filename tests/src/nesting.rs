use ewkt::*;

// `depth` collections, one inside the other, around a single point
fn nested(depth: usize) -> String {
  format!("{}POINT(1 2){}", "GEOMETRYCOLLECTION(".repeat(depth), ")".repeat(depth))
}

fn depth_of(shape: &Shape) -> usize {
  match shape {
    Shape::GeometryCollection(shapes) => 1 + shapes.iter().map(depth_of).max().unwrap_or(0),
    _ => 0,
  }
}

#[test]
fn below_limit() {
  let cfg = ParserConfig { max_stack_depth: Some(64), ..ParserConfig::default() };
  let g = parse_with(&nested(10), &cfg).unwrap();
  assert_eq!(depth_of(&g.shape), 10);
  assert_eq!(g.shape.first_point(), Some(&Point::xy(1.0, 2.0)));
}

#[test]
fn beyond_limit() {
  let cfg = ParserConfig { max_stack_depth: Some(64), ..ParserConfig::default() };
  let mut ctx = ParseContext::default();
  parse_into(&nested(100), &cfg, &mut ctx);
  assert!(ctx.has_error && ctx.result.is_none());
  assert_eq!(ctx.error, Some(Error::StackOverflow { limit: 64 }));
}

#[test]
fn default_limits() {
  let g = parse(&nested(200)).unwrap();
  assert_eq!(depth_of(&g.shape), 200);
  assert_eq!(parse(&g.to_ewkt()).unwrap(), g);
  assert!(ParserConfig::default().max_stack_depth.is_none());
}

#[test]
fn raised_nesting_limit() {
  let cfg = ParserConfig { max_nesting: 1000, ..ParserConfig::default() };
  let g = parse_with(&nested(600), &cfg).unwrap();
  assert_eq!(depth_of(&g.shape), 600);
  assert!(parse(&nested(600)).is_err());
}

#[test]
fn very_deep_input_fails() {
  // `GEOMETRYCOLLECTION(` is 19 bytes, the rejected bracket is the one past the limit
  let limit = ewkt::config::DEFAULT_MAX_NESTING;
  for &depth in [limit + 1, 6000, 200_000].iter() {
    let mut ctx = ParseContext::default();
    parse_into(&nested(depth), &ParserConfig::default(), &mut ctx);
    assert!(ctx.has_error && ctx.result.is_none());
    assert_eq!(ctx.error, Some(Error::NestingTooDeep { offset: 19 * (limit + 1) - 1, limit }));
  }
}

#[test]
fn long_lists_are_not_nesting() {
  let text = format!("LINESTRING({})", (0..5000).map(|i| format!("{} {}", i, i)).collect::<Vec<_>>().join(", "));
  assert_eq!(parse(&text).unwrap().shape.point_count(), 5000);
}
