// "Compilers: Principles, Techniques and Tools" Algorithm 4.63
use crate::{lr1::Lr1Ctx, Lr0Item, Lr1Item, Lr0Fsm, Lr0Node, Lr1Node, Lr1Fsm};
use common::{grammar::Grammar, HashMap, BitSet, BitSetExt};

pub fn work<'a>(lr0: Lr0Fsm<'a>, g: &'a Grammar<'a>) -> Lr1Fsm<'a> {
  let ctx = Lr1Ctx::new(g);
  let (n, err) = (g.lookahead_num() as usize, g.err() as usize);
  let start = g.start();
  // the kernel of state 0 is every start production, elsewhere it's the items with dot > 0
  let is_kernel = |state: usize, item: &Lr0Item|
    item.dot != 0 || (state == 0 && g.prod[item.prod_id as usize].lhs == start);

  let mut lookahead = lr0.iter()
    .map(|Lr0Node { closure, .. }| vec![BitSet::with_capacity(n); closure.len()]).collect::<Vec<_>>();
  // ((from state, from item), (to state, to item))
  let mut prop = Vec::new();

  for (i, item) in lr0[0].closure.iter().enumerate() {
    if is_kernel(0, item) { lookahead[0][i].insert(0); }
  }

  // use err as the special token
  for (i, Lr0Node { closure: state, link }) in lr0.iter().enumerate() {
    for (item_id, &item) in state.iter().enumerate() {
      if !is_kernel(i, &item) { continue; }
      let cl = ctx.closure({
                             let mut lookahead = BitSet::with_capacity(n);
                             lookahead.insert(err);
                             let mut init = HashMap::default();
                             init.insert(item, lookahead);
                             init
                           }, g);
      for Lr1Item { lr0: cl_item, lookahead: cl_lookahead } in &cl {
        let goto_state = match cl_item.next().and_then(|ch| link.get(&ch)) {
          Some(&s) => s as usize,
          None => continue,
        };
        let goto_item_id = cl_item.unique_id() + 1; // dot + 1
        let goto_item_idx = match lr0[goto_state].closure.iter().position(|item| item.unique_id() == goto_item_id) {
          Some(idx) => idx,
          None => continue,
        };
        lookahead[goto_state][goto_item_idx].or(cl_lookahead);
        if cl_lookahead.contains(err) {
          prop.push(((i, item_id), (goto_state, goto_item_idx)));
        }
      }
    }
  }

  let mut changed = true;
  while changed {
    changed = false;
    for &((fs, fi), (ts, ti)) in &prop {
      if (fs, fi) == (ts, ti) { continue; }
      let from = lookahead[fs][fi].clone();
      changed |= lookahead[ts][ti].or(&from);
    }
  }

  for l in &mut lookahead { for l in l { l.set(err, false); } }

  lr0.into_iter().zip(lookahead.into_iter()).map(|(node, lookahead)| Lr1Node {
    closure: ctx.closure(node.closure.into_iter().zip(lookahead.into_iter()).collect(), g),
    link: node.link,
  }).collect()
}
