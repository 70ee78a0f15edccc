use ewkt::*;

fn fails(text: &str) -> Error {
  let mut ctx = ParseContext::default();
  parse_into(text, &ParserConfig::default(), &mut ctx);
  assert!(ctx.has_error, "{} parsed", text);
  assert!(ctx.result.is_none(), "{} left a result", text);
  ctx.error.unwrap_or_else(|| panic!("{} has no recorded error", text))
}

#[test]
fn syntax_errors() {
  for text in [
    "POINT(1 2",
    "POINT(1 2 3 4 5)",
    "POINT(1)",
    "POINT 1 2",
    "POINT((1 2))",
    "POINTM(1 2)",
    "POINTM(1 2 3 4)",
    "LINESTRING(0 0)",
    "LINESTRING(0 0, 1 1 1)",
    "LINESTRING(0 0, 1 1,)",
    "POLYGON((0 0, 1 1, 0 0))",
    "POLYGON(0 0, 1 0, 1 1, 0 0)",
    "MULTIPOINT(0 0, (1 1))",
    "MULTIPOINT()",
    "MULTILINESTRING(0 0, 1 1)",
    "GEOMETRYCOLLECTION()",
    "GEOMETRYCOLLECTION(POINT(0 0), POINT(1 1 1))",
    "GEOMETRYCOLLECTION(POINTM(0 0 0))",
    "GEOMETRYCOLLECTIONM(POINT(0 0))",
    "POINT(1 2) POINT(3 4)",
    "POINT(1 2))",
    "",
    "1 2",
  ].iter() {
    match fails(text) {
      Error::Syntax { .. } => {}
      e => panic!("{}: unexpected {:?}", text, e),
    }
  }
}

#[test]
fn error_position() {
  match fails("LINESTRING(0 0, 1 1 1)") {
    Error::Syntax { offset, found, .. } => {
      assert_eq!(offset, 20);
      assert_eq!(found, "number");
    }
    e => panic!("unexpected {:?}", e),
  }
  match fails("POINT 1 2") {
    Error::Syntax { offset, expected, .. } => {
      assert_eq!(offset, 6);
      assert_eq!(expected, vec!["'('".to_owned()]);
    }
    e => panic!("unexpected {:?}", e),
  }
  assert!(fails("").to_string().contains("unexpected end of input"));
}

#[test]
fn lexical_errors() {
  assert_eq!(fails("POINT(1 2) @"), Error::Lexical { offset: 11, fragment: "@".into() });
  assert!(matches!(fails("TRIANGLE((0 0, 1 0, 0 1, 0 0))"), Error::Lexical { offset: 0, .. }));
  assert!(matches!(fails("POINT(1e400 0)"), Error::Lexical { offset: 6, .. }));
}

#[test]
fn srid_errors() {
  assert_eq!(fails("POINT(1 2);SRID=4326;"), Error::Lexical { offset: 10, fragment: ";".into() });
  assert_eq!(fails("POINT(SRID=4326; 1 2)"), Error::Srid { offset: 6 });
}

#[test]
fn first_error_is_kept() {
  // the syntax error comes first, the lexical one after it is not recorded
  assert!(matches!(fails("POINT(1 2 3 4 5) @"), Error::Syntax { .. }));
}
