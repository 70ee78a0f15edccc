use crate::{Lr0Item, Lr0Closure, Lr0Fsm, Lr0Node};
use common::{grammar::Grammar, HashMap, HashSet};
use std::collections::VecDeque;

fn go<'a>(items: &[Lr0Item<'a>], mov: u32, g: &'a Grammar<'a>) -> Lr0Closure<'a> {
  let mut new_items = HashSet::default();
  for &item in items {
    if item.next() == Some(mov) {
      new_items.insert(Lr0Item { dot: item.dot + 1, ..item });
    }
  }
  closure(new_items, g)
}

fn closure<'a>(mut items: HashSet<Lr0Item<'a>>, g: &'a Grammar<'a>) -> Lr0Closure<'a> {
  let mut q = items.iter().copied().collect::<VecDeque<_>>();
  while let Some(item) = q.pop_front() {
    // if the token after dot is a non-terminal
    if let Some(ch) = item.next().filter(|&ch| g.as_nt(ch).is_some()) {
      for new_prod in g.get_prod(ch) {
        let new_item = Lr0Item { prod: &new_prod.rhs, prod_id: new_prod.id, dot: 0 };
        if items.insert(new_item) {
          q.push_back(new_item);
        }
      }
    }
  }
  let mut items = items.into_iter().collect::<Vec<_>>();
  // sort it, so that vec's equal implies state's equal
  items.sort_unstable();
  items
}

// state 0 is the closure of every production of the start non-terminal
pub fn work<'a>(g: &'a Grammar<'a>) -> Lr0Fsm<'a> {
  let token_num = g.token_num();
  let mut ss = HashMap::default();
  let init = closure(g.get_prod(g.start())
                       .map(|p| Lr0Item { prod: &p.rhs, prod_id: p.id, dot: 0 }).collect(), g);
  ss.insert(init.clone(), 0);
  let mut q = VecDeque::new();
  let mut result = Vec::new();
  q.push_back(init);
  while let Some(cur) = q.pop_front() {
    let mut link = HashMap::default();
    for mov in 0..token_num {
      let ns = go(&cur, mov, g);
      if !ns.is_empty() {
        let new_id = ss.len() as u32;
        let id = *ss.entry(ns.clone()).or_insert_with(|| (q.push_back(ns), new_id).1);
        link.insert(mov, id);
      }
    }
    result.push(Lr0Node { closure: cur, link });
  }
  result
}
