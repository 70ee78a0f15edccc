use crate::{Lr1Fsm, Lr1Node, Lr1Item, Table, TableEntry, Act};
use common::{grammar::Grammar, HashMap, SmallVec, smallvec};

pub fn mk_table<'a>(lr1: &'a Lr1Fsm<'a>, g: &'a Grammar<'a>) -> Table<'a> {
  let mut table = Vec::with_capacity(lr1.len());
  let term_num = g.term_num() as usize;
  for (idx, Lr1Node { closure, link }) in lr1.iter().enumerate() {
    let mut act = HashMap::default();
    for (&k, &v) in link {
      act.insert(k, smallvec![if g.as_nt(k).is_some() { Act::Goto(v) } else { Act::Shift(v) }]);
    }
    for Lr1Item { lr0, lookahead } in closure {
      if lr0.next().is_none() {
        for ch in lookahead.ones().filter(|&ch| ch < term_num) {
          // maybe conflict here
          act.entry(ch as u32).or_insert_with(SmallVec::new).push(Act::Reduce(lr0.prod_id));
        }
      }
    }
    // the start non-terminal never appears in a rhs, so state 0 has no real goto on it:
    // reaching it means the whole input was reduced
    if idx == 0 { act.insert(g.start(), smallvec![Act::Acc]); }
    table.push(TableEntry { closure, act });
  }
  table
}
