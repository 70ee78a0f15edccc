use common::grammar::RawGrammar;
use clap::{App, Arg};
use std::{fs, io, process};
use tracing_subscriber::EnvFilter;
use parser_gen::*;

fn main() -> io::Result<()> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
  let m = App::new("parser_gen")
    .author("MashPlant").about("Read a grammar from a toml file, build its lalr1 tables and report conflicts")
    .arg(Arg::with_name("input").required(true))
    .arg(Arg::with_name("verbose").long("verbose").takes_value(true).value_name("path").help("Print the lr table with its closures to the path"))
    .arg(Arg::with_name("show_fsm").long("show_fsm").takes_value(true).value_name("path").help("Print lr fsm in dot file format to the path"))
    .arg(Arg::with_name("deny_conflict").long("deny_conflict").help("Exit with failure if the grammar has any conflict"))
    .get_matches();
  let cfg = Config { show_tbl: m.is_present("verbose"), show_fsm: m.is_present("show_fsm") };
  // `input` is required, clap has checked it
  let input = fs::read_to_string(m.value_of("input").unwrap_or_default())?;
  let raw = match toml::from_str::<RawGrammar>(&input) {
    Ok(raw) => raw,
    Err(e) => {
      eprintln!("invalid grammar toml: {}", e);
      process::exit(1);
    }
  };
  let out = match work(&raw, &cfg) {
    Ok(out) => out,
    Err(e) => {
      eprintln!("invalid grammar: {}", e);
      process::exit(1);
    }
  };
  for c in &out.conflicts { eprintln!("{}", c); }
  if let (Some(path), Some(tbl)) = (m.value_of("verbose"), &out.tbl) { fs::write(path, tbl)?; }
  if let (Some(path), Some(fsm)) = (m.value_of("show_fsm"), &out.fsm) { fs::write(path, fsm)?; }
  print!("{}", show::summary(&out.tables));
  if m.is_present("deny_conflict") && !out.conflicts.is_empty() { process::exit(2); }
  Ok(())
}
