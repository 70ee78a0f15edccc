use common::{grammar::Grammar, HashMap, SmallVec, BitSet};
use std::{hash::{Hash, Hasher}, cmp::Ordering};

pub mod first;
pub mod lr0;
pub mod lr1;
pub mod lalr1_by_lr0;
pub mod mk_table;
pub mod conflict;

pub use crate::{conflict::*, first::First, mk_table::mk_table};

// define some common structs and types here

#[derive(Clone, Copy, Debug)]
pub struct Lr0Item<'a> {
  pub prod: &'a [u32],
  pub prod_id: u32,
  // prod[dot] = the token after dot
  pub dot: u32,
}

impl Lr0Item<'_> {
  pub fn unique_id(&self) -> u64 { ((self.prod_id as u64) << 32) | (self.dot as u64) }

  // the symbol right after the dot, None if the item is complete
  pub fn next(&self) -> Option<u32> { self.prod.get(self.dot as usize).copied() }
}

impl Hash for Lr0Item<'_> {
  fn hash<H: Hasher>(&self, state: &mut H) { self.unique_id().hash(state); }
}

impl PartialEq for Lr0Item<'_> {
  fn eq(&self, other: &Lr0Item) -> bool { self.unique_id() == other.unique_id() }
}

impl Eq for Lr0Item<'_> {}

impl PartialOrd for Lr0Item<'_> {
  fn partial_cmp(&self, other: &Lr0Item) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Lr0Item<'_> {
  fn cmp(&self, other: &Self) -> Ordering { self.unique_id().cmp(&other.unique_id()) }
}

#[derive(Clone, Debug)]
pub struct Lr1Item<'a> {
  pub lr0: Lr0Item<'a>,
  pub lookahead: BitSet,
}

pub type Lr0Closure<'a> = Vec<Lr0Item<'a>>;
pub type Lr1Closure<'a> = Vec<Lr1Item<'a>>;

// symbol -> state
pub type Link = HashMap<u32, u32>;

pub struct Lr0Node<'a> {
  pub closure: Lr0Closure<'a>,
  pub link: Link,
}

pub type Lr0Fsm<'a> = Vec<Lr0Node<'a>>;

pub struct Lr1Node<'a> {
  pub closure: Lr1Closure<'a>,
  pub link: Link,
}

pub type Lr1Fsm<'a> = Vec<Lr1Node<'a>>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Act {
  // shift and reduce are for terminal, goto and acc are for non-terminal
  // so they can be together in one table
  Shift(u32),
  Reduce(u32),
  Goto(u32),
  Acc,
}

// in most cases there is no conflict, so the inline capacity is small
pub type Acts = SmallVec<[Act; 2]>;

pub struct TableEntry<'a> {
  pub closure: &'a [Lr1Item<'a>],
  pub act: HashMap<u32, Acts>,
}

pub type Table<'a> = Vec<TableEntry<'a>>;

// the whole pipeline: lr0 automaton, lalr1 lookahead, table, conflict resolution
// the returned table has the selected choice at [0] of every entry
pub fn lalr1<'a>(g: &'a Grammar<'a>) -> Lr1Fsm<'a> {
  lalr1_by_lr0::work(lr0::work(g), g)
}

pub fn build<'a>(lr1: &'a Lr1Fsm<'a>, g: &'a Grammar<'a>) -> (Table<'a>, Vec<Conflict>) {
  let mut table = mk_table(lr1, g);
  let conflicts = conflict::solve(&mut table);
  (table, conflicts)
}
