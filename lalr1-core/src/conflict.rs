use crate::{Act, Acts, Table};
use common::smallvec;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ConflictKind {
  SR { s: u32, r: u32 },
  RR { r1: u32, r2: u32 },
  Many(Acts),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Conflict {
  pub kind: ConflictKind,
  pub state: u32,
  pub ch: u32,
}

// the grammar has no precedence declarations, so every conflict is reported,
// and the usual defaults pick the choice placed at [0]:
//   In a shift-reduce conflict, the default is to shift.
//   In a reduce-reduce conflict, the default is to reduce by the earlier grammar rule.
// the other choices are NOT removed
pub fn solve(t: &mut Table) -> Vec<Conflict> {
  use Act::{Reduce, Shift};
  let mut reports = Vec::new();
  for (idx, t) in t.iter_mut().enumerate() {
    let state = idx as u32;
    for (&ch, acts) in &mut t.act {
      let cur = acts.clone();
      match *cur.as_slice() {
        [] | [_] => {}
        [Reduce(r1), Reduce(r2)] => {
          let (r1, r2) = (r1.min(r2), r1.max(r2));
          reports.push(Conflict { kind: ConflictKind::RR { r1, r2 }, state, ch });
          *acts = smallvec![Reduce(r1), Reduce(r2)];
        }
        [Reduce(r), Shift(s)] | [Shift(s), Reduce(r)] => {
          reports.push(Conflict { kind: ConflictKind::SR { s, r }, state, ch });
          *acts = smallvec![Shift(s), Reduce(r)];
        }
        [_, _] => unreachable!("there should be a bug in lr"),
        _ => {
          acts.sort_unstable_by_key(|a| match *a { Shift(s) => (0, s), Reduce(r) => (1, r), _ => (2, 0) });
          reports.push(Conflict { kind: ConflictKind::Many(cur), state, ch });
        }
      }
    }
  }
  // the act map has no order
  reports.sort_unstable_by_key(|c| (c.state, c.ch));
  reports
}
