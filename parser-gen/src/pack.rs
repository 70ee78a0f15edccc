use common::{grammar::Grammar, HashMap, HashSet, SmallVec};
use lalr1_core::{Act, Table};
use std::cmp::Reverse;

// a state offset with this value has no entries, the default action applies
pub const USE_DEFAULT: i32 = i32::MIN;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Action {
  Shift(u32),
  Reduce(u32),
  Accept,
  Error,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RuleInfo {
  pub lhs: u32,
  pub arity: u32,
}

// the compressed table layout:
// action code < n_state: shift (or goto) to that state
// n_state <= code < n_state + n_rule: reduce by rule code - n_state
// n_state + n_rule: error, n_state + n_rule + 1: accept, n_state + n_rule + 2: no action
#[derive(Debug, Clone)]
pub struct PackedTables {
  pub n_state: u32,
  pub n_rule: u32,
  pub n_terminal: u32,
  pub n_symbol: u32,
  pub action: Vec<u32>,
  pub lookahead: Vec<u32>,
  pub shift_offset: Vec<i32>,
  pub reduce_offset: Vec<i32>,
  pub default: Vec<u32>,
  pub rules: Vec<RuleInfo>,
  // terminals that have an entry in the unpacked table, for diagnostics
  pub expected: Vec<SmallVec<[u32; 4]>>,
}

struct ActTab {
  action: Vec<u32>,
  lookahead: Vec<u32>,
  used: HashSet<i64>,
  no_action: u32,
  empty: u32,
}

impl ActTab {
  fn free(&self, ofst: i64, row: &[(u32, u32)]) -> bool {
    !self.used.contains(&ofst) && row.iter().all(|&(sym, _)| {
      let i = (ofst + sym as i64) as usize;
      i >= self.lookahead.len() || self.lookahead[i] == self.empty
    })
  }

  // first fit; rows never share an offset, so a probe can only hit its own row
  fn insert(&mut self, row: &[(u32, u32)]) -> i32 {
    let min = match row.first() {
      Some(&(sym, _)) => sym as i64,
      None => return USE_DEFAULT,
    };
    let mut ofst = -min;
    while !self.free(ofst, row) { ofst += 1; }
    for &(sym, code) in row {
      let i = (ofst + sym as i64) as usize;
      if i >= self.lookahead.len() {
        self.action.resize(i + 1, self.no_action);
        self.lookahead.resize(i + 1, self.empty);
      }
      self.action[i] = code;
      self.lookahead[i] = sym;
    }
    self.used.insert(ofst);
    ofst as i32
  }
}

impl PackedTables {
  // `table` should have been passed to `lalr1_core::solve`, only the choice at [0] is kept
  pub fn new(table: &Table, g: &Grammar) -> PackedTables {
    let (n_state, n_rule, n_terminal) = (table.len() as u32, g.prod_num(), g.term_num());
    let error = n_state + n_rule;
    let start = g.start();
    let code = |a: Act| match a {
      Act::Shift(s) | Act::Goto(s) => s,
      Act::Reduce(r) => n_state + r,
      Act::Acc => n_state + n_rule + 1,
    };

    let mut default = Vec::with_capacity(table.len());
    let mut expected = Vec::with_capacity(table.len());
    let mut rows = Vec::with_capacity(table.len() * 2);
    for (state, entry) in table.iter().enumerate() {
      let mut shift = Vec::new();
      let mut goto = Vec::new();
      for (&ch, acts) in &entry.act {
        if let Some(&a) = acts.first() {
          if ch < n_terminal { shift.push((ch, code(a))) } else { goto.push((ch, code(a))) }
        }
      }
      shift.sort_unstable();
      goto.sort_unstable();
      expected.push(shift.iter().map(|&(ch, _)| ch).collect());

      // the most frequent reduce becomes the default action, and leaves the row
      // reducing the start symbol accepts, so that reduce only happens on its own lookahead
      let mut count = HashMap::default();
      for &(_, c) in &shift {
        if c >= n_state && c < error && g.prod[(c - n_state) as usize].lhs != start {
          *count.entry(c).or_insert(0u32) += 1;
        }
      }
      let dflt = count.into_iter().max_by_key(|&(c, n)| (n, Reverse(c))).map(|(c, _)| c).unwrap_or(error);
      shift.retain(|&(_, c)| c != dflt);
      default.push(dflt);
      rows.push((state, false, shift));
      rows.push((state, true, goto));
    }

    // big rows first, small rows fill the holes
    rows.sort_by_key(|(state, is_goto, row)| (Reverse(row.len()), *state, *is_goto));
    let mut tab = ActTab {
      action: Vec::new(),
      lookahead: Vec::new(),
      used: HashSet::default(),
      no_action: n_state + n_rule + 2,
      empty: g.token_num(),
    };
    let mut shift_offset = vec![USE_DEFAULT; table.len()];
    let mut reduce_offset = vec![USE_DEFAULT; table.len()];
    for (state, is_goto, row) in &rows {
      let ofst = tab.insert(row);
      if *is_goto { reduce_offset[*state] = ofst; } else { shift_offset[*state] = ofst; }
    }

    PackedTables {
      n_state,
      n_rule,
      n_terminal,
      n_symbol: g.token_num(),
      action: tab.action,
      lookahead: tab.lookahead,
      shift_offset,
      reduce_offset,
      default,
      rules: g.prod.iter().map(|p| RuleInfo { lhs: p.lhs, arity: p.rhs.len() as u32 }).collect(),
      expected,
    }
  }

  pub fn error_code(&self) -> u32 { self.n_state + self.n_rule }
  pub fn accept_code(&self) -> u32 { self.n_state + self.n_rule + 1 }
  pub fn no_action_code(&self) -> u32 { self.n_state + self.n_rule + 2 }

  pub fn decode(&self, code: u32) -> Action {
    if code < self.n_state {
      Action::Shift(code)
    } else if code < self.error_code() {
      Action::Reduce(code - self.n_state)
    } else if code == self.accept_code() {
      Action::Accept
    } else {
      Action::Error
    }
  }

  fn probe(&self, ofst: Option<&i32>, symbol: u32) -> Option<u32> {
    let ofst = match ofst {
      Some(&o) if o != USE_DEFAULT => o as i64,
      _ => return None,
    };
    let idx = ofst + symbol as i64;
    if idx < 0 || idx as usize >= self.action.len() || self.lookahead[idx as usize] != symbol {
      return None;
    }
    Some(self.action[idx as usize])
  }

  // the action for `terminal` on top of `state`, falling back to the state's default
  pub fn resolve_shift(&self, state: u32, terminal: u32) -> u32 {
    self.probe(self.shift_offset.get(state as usize), terminal)
      .unwrap_or_else(|| self.default.get(state as usize).copied().unwrap_or_else(|| self.error_code()))
  }

  // the state to enter after reducing to `nt` with `state` exposed, or the accept code
  // None means the table is broken: a correct reduce sequence always finds an entry
  pub fn resolve_goto(&self, state: u32, nt: u32) -> Option<u32> {
    self.probe(self.reduce_offset.get(state as usize), nt)
  }

  pub fn rule(&self, rule: u32) -> Option<RuleInfo> { self.rules.get(rule as usize).copied() }
}
