//! Tokens of the EWKT text format.
//!
//! Keywords are case insensitive. Line breaks are plain whitespace: the grammar's
//! `NEWLINE` terminal is only ever fed by the front-end, once, after the last token.

use crate::Error;
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
  #[token("POINT", ignore(ascii_case))]
  Point,
  #[token("POINTM", ignore(ascii_case))]
  PointM,
  #[token("LINESTRING", ignore(ascii_case))]
  LineString,
  #[token("LINESTRINGM", ignore(ascii_case))]
  LineStringM,
  #[token("POLYGON", ignore(ascii_case))]
  Polygon,
  #[token("POLYGONM", ignore(ascii_case))]
  PolygonM,
  #[token("MULTIPOINT", ignore(ascii_case))]
  MultiPoint,
  #[token("MULTIPOINTM", ignore(ascii_case))]
  MultiPointM,
  #[token("MULTILINESTRING", ignore(ascii_case))]
  MultiLineString,
  #[token("MULTILINESTRINGM", ignore(ascii_case))]
  MultiLineStringM,
  #[token("MULTIPOLYGON", ignore(ascii_case))]
  MultiPolygon,
  #[token("MULTIPOLYGONM", ignore(ascii_case))]
  MultiPolygonM,
  #[token("GEOMETRYCOLLECTION", ignore(ascii_case))]
  GeometryCollection,
  #[token("GEOMETRYCOLLECTIONM", ignore(ascii_case))]
  GeometryCollectionM,
  #[token("(")]
  Open,
  #[token(")")]
  Close,
  #[token(",")]
  Comma,
  // overflowing literals like 1e999 are rejected here, the writer could not reproduce them
  #[regex(r"[-+]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok().filter(|v| v.is_finite()))]
  Num(f64),
  #[regex(r"[Ss][Rr][Ii][Dd]=-?[0-9]+;", srid)]
  Srid(i32),
}

fn srid(lex: &mut logos::Lexer<Token>) -> Option<i32> {
  let s = lex.slice();
  s.get(5..s.len() - 1)?.parse().ok()
}

/// Codes of the grammar's terminals, in the order `grammar/ewkt.toml` declares them.
/// Code 0 is the end of input.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Terminal {
  Eof = 0,
  Newline,
  Point,
  OpenBracket,
  CloseBracket,
  PointM,
  Num,
  Comma,
  LineString,
  LineStringM,
  Polygon,
  PolygonM,
  MultiPoint,
  MultiPointM,
  MultiLineString,
  MultiLineStringM,
  MultiPolygon,
  MultiPolygonM,
  GeometryCollection,
  GeometryCollectionM,
}

impl Terminal {
  pub const ALL: [Terminal; 20] = [
    Terminal::Eof, Terminal::Newline, Terminal::Point, Terminal::OpenBracket, Terminal::CloseBracket,
    Terminal::PointM, Terminal::Num, Terminal::Comma, Terminal::LineString, Terminal::LineStringM,
    Terminal::Polygon, Terminal::PolygonM, Terminal::MultiPoint, Terminal::MultiPointM,
    Terminal::MultiLineString, Terminal::MultiLineStringM, Terminal::MultiPolygon, Terminal::MultiPolygonM,
    Terminal::GeometryCollection, Terminal::GeometryCollectionM,
  ];

  pub fn code(self) -> u32 { self as u32 }

  // the name the grammar file uses
  pub fn name(self) -> &'static str {
    match self {
      Terminal::Eof => common::grammar::EOF,
      Terminal::Newline => "NEWLINE",
      Terminal::Point => "POINT",
      Terminal::OpenBracket => "OPEN_BRACKET",
      Terminal::CloseBracket => "CLOSE_BRACKET",
      Terminal::PointM => "POINT_M",
      Terminal::Num => "NUM",
      Terminal::Comma => "COMMA",
      Terminal::LineString => "LINESTRING",
      Terminal::LineStringM => "LINESTRING_M",
      Terminal::Polygon => "POLYGON",
      Terminal::PolygonM => "POLYGON_M",
      Terminal::MultiPoint => "MULTIPOINT",
      Terminal::MultiPointM => "MULTIPOINT_M",
      Terminal::MultiLineString => "MULTILINESTRING",
      Terminal::MultiLineStringM => "MULTILINESTRING_M",
      Terminal::MultiPolygon => "MULTIPOLYGON",
      Terminal::MultiPolygonM => "MULTIPOLYGON_M",
      Terminal::GeometryCollection => "GEOMETRYCOLLECTION",
      Terminal::GeometryCollectionM => "GEOMETRYCOLLECTION_M",
    }
  }

  // how a diagnostic shows this terminal
  pub fn describe(code: u32) -> &'static str {
    match Terminal::ALL.get(code as usize) {
      Some(Terminal::Eof) | Some(Terminal::Newline) => "end of input",
      Some(Terminal::OpenBracket) => "'('",
      Some(Terminal::CloseBracket) => "')'",
      Some(Terminal::Comma) => "','",
      Some(Terminal::Num) => "number",
      Some(t) => t.name(),
      None => "?",
    }
  }
}

impl Token {
  /// The grammar terminal, None for the SRID prefix which never reaches the parser.
  pub fn terminal(self) -> Option<Terminal> {
    Some(match self {
      Token::Point => Terminal::Point,
      Token::PointM => Terminal::PointM,
      Token::LineString => Terminal::LineString,
      Token::LineStringM => Terminal::LineStringM,
      Token::Polygon => Terminal::Polygon,
      Token::PolygonM => Terminal::PolygonM,
      Token::MultiPoint => Terminal::MultiPoint,
      Token::MultiPointM => Terminal::MultiPointM,
      Token::MultiLineString => Terminal::MultiLineString,
      Token::MultiLineStringM => Terminal::MultiLineStringM,
      Token::MultiPolygon => Terminal::MultiPolygon,
      Token::MultiPolygonM => Terminal::MultiPolygonM,
      Token::GeometryCollection => Terminal::GeometryCollection,
      Token::GeometryCollectionM => Terminal::GeometryCollectionM,
      Token::Open => Terminal::OpenBracket,
      Token::Close => Terminal::CloseBracket,
      Token::Comma => Terminal::Comma,
      Token::Num(_) => Terminal::Num,
      Token::Srid(_) => return None,
    })
  }
}

pub fn tokens(src: &str) -> impl Iterator<Item=Result<(Token, Range<usize>), Error>> + '_ {
  Token::lexer(src).spanned().map(move |(tok, span)| match tok {
    Ok(tok) => Ok((tok, span)),
    Err(()) => Err(Error::Lexical { offset: span.start, fragment: src[span].to_owned() }),
  })
}
