pub mod pack;
pub mod show;

pub use pack::*;

use common::grammar::RawGrammar;

pub(crate) fn min_u(x: usize) -> &'static str {
  // I don't think any number beyond `u32` is really possible
  match x { 0..=255 => "u8", 256..=65535 => "u16", _ => "u32" }
}

#[derive(Default)]
pub struct Config {
  // render the full state table
  pub show_tbl: bool,
  // render the lalr1 automaton in dot format
  pub show_fsm: bool,
}

pub struct Output {
  pub tables: PackedTables,
  // one readable message per conflict, the tables are still built from the default choices
  pub conflicts: Vec<String>,
  pub tbl: Option<String>,
  pub fsm: Option<String>,
}

pub fn work(raw: &RawGrammar, cfg: &Config) -> Result<Output, String> {
  let g = raw.extend()?;
  let lr1 = lalr1_core::lalr1(&g);
  let (table, conflicts) = lalr1_core::build(&lr1, &g);
  tracing::debug!(states = table.len(), conflicts = conflicts.len(), "lalr1 table built");
  let conflicts = show::conflict(&g, &conflicts);
  let tbl = if cfg.show_tbl { Some(show::table(&table, &g)) } else { None };
  let fsm = if cfg.show_fsm { Some(show::lr1_dot(&g, &lr1)) } else { None };
  Ok(Output { tables: PackedTables::new(&table, &g), conflicts, tbl, fsm })
}
