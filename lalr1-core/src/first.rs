use common::{grammar::Grammar, BitSet, BitSetExt};

// first.len() == g.nt.len() (calculating the first set of terminal is meaningless)
// every set lives in the lookahead space of the grammar: terminals, then eps
pub struct First {
  pub first: Vec<BitSet>,
  pub eps: u32,
  term_num: u32,
  lookahead_num: u32,
}

impl First {
  pub fn new(g: &Grammar) -> First {
    let (n, eps) = (g.lookahead_num() as usize, g.eps() as usize);
    let mut first = vec![BitSet::with_capacity(n); g.nt.len()];
    let mut tmp = BitSet::with_capacity(n);
    let mut changed = true;
    while changed {
      changed = false;
      for prod in &g.prod {
        let mut all_have_eps = true;
        tmp.clear();
        for &ch in prod.rhs.iter() {
          if let Some(nt) = g.as_nt(ch) {
            let rhs = &first[nt as usize];
            tmp.union_with(rhs);
            tmp.set(eps, false);
            if !rhs.contains(eps) {
              all_have_eps = false;
              break;
            }
          } else {
            tmp.insert(ch as usize);
            all_have_eps = false;
            break;
          }
        }
        if all_have_eps { tmp.insert(eps); }
        let lhs = (prod.lhs - g.term_num()) as usize;
        changed |= first[lhs].or(&tmp);
      }
    }
    First { first, eps: g.eps(), term_num: g.term_num(), lookahead_num: g.lookahead_num() }
  }

  pub fn nt_num(&self) -> u32 { self.first.len() as u32 }

  pub fn first(&self, string: &[u32]) -> BitSet {
    let mut ret = BitSet::with_capacity(self.lookahead_num as usize);
    for &ch in string {
      if ch >= self.term_num {
        let rhs = &self.first[(ch - self.term_num) as usize];
        ret.union_with(rhs);
        ret.set(self.eps as usize, false);
        if !rhs.contains(self.eps as usize) { return ret; }
      } else {
        ret.insert(ch as usize);
        return ret;
      }
    }
    // reach here, so string -> eps
    ret.insert(self.eps as usize);
    ret
  }
}
