use crate::{PackedTables, min_u};
use common::grammar::Grammar;
use lalr1_core::{Act, Conflict, ConflictKind, Link, Lr1Fsm, Lr1Node, Lr1Item, Table};
use std::fmt::Write;

fn show_lookahead(g: &Grammar, item: &Lr1Item, s: &mut String) {
  for i in item.lookahead.ones().filter(|&i| i < g.term_num() as usize) {
    *s += g.show_token(i as u32);
    s.push('/');
  }
  s.pop();
}

pub fn table(table: &Table, g: &Grammar) -> String {
  let mut text = String::new();
  for (idx, entry) in table.iter().enumerate() {
    let _ = writeln!(text, "State {}:", idx);
    for item in entry.closure {
      let mut la = String::new();
      show_lookahead(g, item, &mut la);
      let _ = writeln!(text, "  {}, {}", g.show_prod(item.lr0.prod_id, Some(item.lr0.dot)), la);
    }
    text.push('\n');
    let mut acts = entry.act.iter().collect::<Vec<_>>();
    acts.sort_unstable_by_key(|(&ch, _)| ch);
    for (&ch, acts) in acts {
      for (i, a) in acts.iter().enumerate() {
        // selected => ✓, kept but not selected => ✗
        let _ = writeln!(text, "  {} => {:?} ({})", g.show_token(ch), a, if i == 0 { "✓" } else { "✗" });
      }
    }
    text.push('\n');
  }
  text
}

pub fn conflict(g: &Grammar, c: &[Conflict]) -> Vec<String> {
  let mut ret = Vec::new();
  for c in c {
    let ch = g.show_token(c.ch);
    match c.kind {
      ConflictKind::SR { s, r } =>
        ret.push(format!("Shift-reduce conflict at state {} when faced with token `{}`, it can either shift {}, or reduce {}(`{}`).",
                         c.state, ch, s, r, g.show_prod(r, None))),
      ConflictKind::RR { r1, r2 } =>
        ret.push(format!("Reduce-reduce conflict at state {} when faced with token `{}`, it can either reduce {}(`{}`), or reduce {}(`{}`).",
                         c.state, ch, r1, g.show_prod(r1, None), r2, g.show_prod(r2, None))),
      ConflictKind::Many(ref acts) => {
        let mut msg = format!("Too many conflicts at state {} when faced with token `{}`:\n", c.state, ch);
        for a in acts {
          match a {
            Act::Shift(s) => { let _ = writeln!(msg, "  - shift {}", s); }
            Act::Reduce(r) => { let _ = writeln!(msg, "  - reduce {}(`{}`)", r, g.show_prod(*r, None)); }
            _ => {}
          }
        }
        ret.push(msg);
      }
    }
  }
  ret
}

fn show_link(g: &Grammar, link: &Link, idx: usize, s: &mut String) {
  let mut link = link.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>();
  link.sort_unstable_by_key(|kv| kv.1);
  for (k, v) in link {
    let _ = writeln!(s, r#"{} -> {} [label="{}"];"#, idx, v, g.show_token(k));
  }
}

pub fn lr1_dot(g: &Grammar, lr1: &Lr1Fsm) -> String {
  let mut s = "digraph {\n".to_owned();
  for (idx, Lr1Node { closure, link }) in lr1.iter().enumerate() {
    show_link(g, link, idx, &mut s);
    let mut text = String::new();
    for item in closure {
      text += &g.show_prod(item.lr0.prod_id, Some(item.lr0.dot));
      text.push(',');
      show_lookahead(g, item, &mut text);
      text += r#"\n"#;
    }
    text.pop();
    text.pop();
    let _ = writeln!(s, r#"{}[shape=box, label="{}"]"#, idx, text);
  }
  s.push('}');
  s
}

pub fn summary(p: &PackedTables) -> String {
  let code_max = p.no_action_code() as usize;
  let ofst_used = p.shift_offset.iter().chain(p.reduce_offset.iter()).filter(|&&o| o != crate::USE_DEFAULT).count();
  let mut s = String::new();
  let _ = writeln!(s, "states: {}, rules: {}, terminals: {}, symbols: {}", p.n_state, p.n_rule, p.n_terminal, p.n_symbol);
  let _ = writeln!(s, "action/lookahead: {} entries ({} / {})", p.action.len(), min_u(code_max), min_u(p.n_symbol as usize));
  let _ = writeln!(s, "offsets in use: {} of {}", ofst_used, p.n_state * 2);
  let _ = writeln!(s, "states with a default reduce: {}", p.default.iter().filter(|&&d| d != p.error_code()).count());
  s
}
