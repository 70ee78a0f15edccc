use serde::Deserialize;

/// Bracket levels allowed unless configured otherwise. A collection opens one level, a
/// multipolygon three.
pub const DEFAULT_MAX_NESTING: usize = 256;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
  // None lets the stack grow freely
  pub max_stack_depth: Option<usize>,
  // deeper input fails before any geometry is built for it
  pub max_nesting: usize,
  pub require_closed_rings: bool,
  // used when the text has no `SRID=...;` prefix
  pub default_srid: i32,
}

impl Default for ParserConfig {
  fn default() -> Self {
    ParserConfig { max_stack_depth: None, max_nesting: DEFAULT_MAX_NESTING, require_closed_rings: false, default_srid: 0 }
  }
}

impl ParserConfig {
  pub fn from_toml(s: &str) -> Result<ParserConfig, toml::de::Error> { toml::from_str(s) }
}
