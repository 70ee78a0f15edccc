use crate::geometry::Dimension;
use thiserror::Error;

/// Domain failures raised by the geometry builder while reductions fire.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
  #[error("{kind} needs at least {min} points, found {found}")]
  TooFewPoints { kind: &'static str, min: usize, found: usize },
  #[error("ring is not closed, its first and last points differ")]
  UnclosedRing,
  #[error("expected {expected} coordinates, found {found}")]
  DimensionMismatch { expected: Dimension, found: Dimension },
  #[error("unexpected {0} value on the parser stack")]
  UnexpectedValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("unrecognized input at offset {offset}: {fragment:?}")]
  Lexical { offset: usize, fragment: String },
  #[error("syntax error at offset {offset}: unexpected {found}, expected one of: {}", .expected.join(", "))]
  Syntax { offset: usize, found: String, expected: Vec<String> },
  #[error("parser stack exceeded its limit of {limit} entries")]
  StackOverflow { limit: usize },
  #[error("brackets nested deeper than {limit} levels at offset {offset}")]
  NestingTooDeep { offset: usize, limit: usize },
  #[error(transparent)]
  Build(#[from] BuildError),
  #[error("SRID prefix at offset {offset}, it is only allowed before the geometry")]
  Srid { offset: usize },
  #[error("invalid ewkt grammar: {0}")]
  Grammar(String),
  #[error("parse tables have no goto for symbol {symbol} in state {state}")]
  Internal { state: u32, symbol: u32 },
  #[error("parse tables reduce by unknown rule {rule} in state {state}")]
  UnknownRule { state: u32, rule: u32 },
}
