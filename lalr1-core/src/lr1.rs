use crate::{Lr0Item, Lr1Closure, Lr1Item, First};
use common::{grammar::Grammar, HashMap, BitSet, BitSetExt};
use std::collections::VecDeque;

pub struct Lr1Ctx(pub First);

impl Lr1Ctx {
  pub fn new(g: &Grammar) -> Lr1Ctx { Lr1Ctx(First::new(g)) }

  // one beta, and many a
  pub fn first(&self, beta: &[u32], a: &BitSet) -> BitSet {
    let eps = self.0.eps as usize;
    let mut beta_first = self.0.first(beta);
    if beta_first.contains(eps) {
      beta_first.set(eps, false);
      beta_first.union_with(a);
    }
    beta_first
  }

  pub fn closure<'a>(&self, mut items: HashMap<Lr0Item<'a>, BitSet>, g: &'a Grammar<'a>) -> Lr1Closure<'a> {
    let mut q = items.iter().map(|(&item, lookahead)| (item, lookahead.clone())).collect::<VecDeque<_>>();
    while let Some((item, lookahead)) = q.pop_front() {
      let b = match item.next() {
        Some(b) if g.as_nt(b).is_some() => b,
        _ => continue,
      };
      let first = self.first(&item.prod[item.dot as usize + 1..], &lookahead);
      for new_prod in g.get_prod(b) {
        let new_item = Lr0Item { prod: &new_prod.rhs, prod_id: new_prod.id, dot: 0 };
        match items.get_mut(&new_item) {
          None => {
            items.insert(new_item, first.clone());
            q.push_back((new_item, first.clone()));
          }
          // if look ahead changed, also need to reenter queue
          Some(old_lookahead) => if old_lookahead.or(&first) {
            q.push_back((new_item, first.clone()));
          }
        }
      }
    }
    let mut closure = items.into_iter().map(|(lr0, lookahead)| Lr1Item { lr0, lookahead }).collect::<Vec<_>>();
    // sort it, so that vec's equal implies state's equal
    closure.sort_unstable_by(|l, r| l.lr0.cmp(&r.lr0));
    closure
  }
}
