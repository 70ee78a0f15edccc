//! Parser for the Extended Well-Known Text geometry format.
//!
//! The grammar lives in `grammar/ewkt.toml`. Its LALR(1) tables are built once per process,
//! packed into the compressed action/lookahead/offset arrays, and driven by [`Engine`], a
//! shift-reduce machine whose reductions assemble the geometry.
//!
//! ```
//! let g = ewkt::parse("SRID=4326;LINESTRING(0 0, 1 1, 2 2)").unwrap();
//! assert_eq!(g.srid, 4326);
//! assert_eq!(g.declared_type(), ewkt::GeometryType::LineString);
//! assert_eq!(g.to_ewkt(), "SRID=4326;LINESTRING(0 0,1 1,2 2)");
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod lexer;
pub mod reduce;
pub mod tables;
pub mod value;
mod writer;

pub use crate::{config::ParserConfig, context::ParseContext, engine::{Engine, Phase}, error::{BuildError, Error}, geometry::*};

use crate::{builder::Builder, lexer::{Terminal, Token}, value::Value};
use tracing::trace;

pub fn parse(src: &str) -> Result<Geometry, Error> {
  parse_with(src, &ParserConfig::default())
}

pub fn parse_with(src: &str, cfg: &ParserConfig) -> Result<Geometry, Error> {
  let mut ctx = ParseContext::default();
  parse_into(src, cfg, &mut ctx);
  ctx.finish()
}

/// Runs one parse, leaving the outcome in `ctx`.
pub fn parse_into(src: &str, cfg: &ParserConfig, ctx: &mut ParseContext) {
  let tables = match tables::get() {
    Ok(t) => t,
    Err(e) => return ctx.fail(e),
  };
  let mut tokens = lexer::tokens(src).peekable();
  let srid = match tokens.peek() {
    Some(Ok((Token::Srid(srid), _))) => {
      let srid = *srid;
      tokens.next();
      srid
    }
    _ => cfg.default_srid,
  };
  trace!(srid, len = src.len(), "parse");
  let mut engine = Engine::new(tables, Builder::new(srid, cfg), cfg.max_stack_depth).with_max_nesting(cfg.max_nesting);
  for tok in tokens {
    let (tok, span) = match tok {
      Ok(t) => t,
      Err(e) => return ctx.fail(e),
    };
    match (tok.terminal(), tok) {
      (Some(t), Token::Num(n)) => engine.feed(t, Value::Num(n), span.start, ctx),
      (Some(t), _) => engine.feed(t, Value::Unit, span.start, ctx),
      (None, _) => return ctx.fail(Error::Srid { offset: span.start }),
    }
    if engine.is_finished() { return; }
  }
  // one statement per call, ended the way the grammar expects
  engine.feed(Terminal::Newline, Value::Unit, src.len(), ctx);
  engine.feed(Terminal::Eof, Value::Unit, src.len(), ctx);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn srid_prefix() {
    assert_eq!(parse("SRID=3003;POINT(1 2)").unwrap().srid, 3003);
    assert_eq!(parse("POINT(1 2)").unwrap().srid, 0);
    let cfg = ParserConfig { default_srid: 4326, ..ParserConfig::default() };
    assert_eq!(parse_with("POINT(1 2)", &cfg).unwrap().srid, 4326);
    assert_eq!(parse("POINT(1 2) SRID=1;"), Err(Error::Srid { offset: 11 }));
    assert_eq!(parse("SRID=1;SRID=2;POINT(1 2)"), Err(Error::Srid { offset: 7 }));
  }

  #[test]
  fn context_after_failure() {
    let mut ctx = ParseContext::default();
    parse_into("POINT(1 2", &ParserConfig::default(), &mut ctx);
    assert!(ctx.has_error);
    assert!(ctx.result.is_none());
    let mut ctx = ParseContext::default();
    parse_into("POINTM(1 2 3)", &ParserConfig::default(), &mut ctx);
    assert!(!ctx.has_error);
    assert_eq!(ctx.result.map(|g| g.dims), Some(Dimension::Xym));
  }

  #[test]
  fn lexical_error() {
    assert_eq!(parse("POINT(1 2) ;"), Err(Error::Lexical { offset: 11, fragment: ";".into() }));
  }
}
