use crate::{lexer::Terminal, reduce::Build, Error};
use common::grammar::RawGrammar;
use lazy_static::lazy_static;
use parser_gen::PackedTables;
use tracing::debug;

pub const GRAMMAR: &str = include_str!("../grammar/ewkt.toml");

#[derive(Debug)]
pub struct Tables {
  pub packed: PackedTables,
  // rule id -> what its reduction builds
  pub builds: Vec<Build>,
}

impl Tables {
  pub fn build(src: &str) -> Result<Tables, String> {
    let raw = toml::from_str::<RawGrammar>(src).map_err(|e| format!("invalid grammar toml: {}", e))?;
    let g = raw.extend()?;
    for t in Terminal::ALL.iter() {
      if g.terms.get(t.code() as usize) != Some(&t.name()) {
        return Err(format!("terminal {} is not declared with code {}", t.name(), t.code()));
      }
    }
    let builds = g.prod.iter().map(|p| p.act.parse()).collect::<Result<Vec<Build>, _>>()?;
    let lr1 = lalr1_core::lalr1(&g);
    let (table, conflicts) = lalr1_core::build(&lr1, &g);
    if !conflicts.is_empty() {
      return Err(parser_gen::show::conflict(&g, &conflicts).join("\n"));
    }
    let packed = PackedTables::new(&table, &g);
    debug!(states = packed.n_state, rules = packed.n_rule, symbols = packed.n_symbol,
           action_len = packed.action.len(), "ewkt parse tables built");
    Ok(Tables { packed, builds })
  }
}

lazy_static! {
  static ref TABLES: Result<Tables, String> = Tables::build(GRAMMAR);
}

// built on first use, then shared read-only by every parse
pub fn get() -> Result<&'static Tables, Error> {
  TABLES.as_ref().map_err(|e| Error::Grammar(e.clone()))
}
