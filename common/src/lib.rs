pub mod grammar;

use std::hash::BuildHasherDefault;
use ahash::AHasher;

// define some data structures that will be used in other crates, so that they don't need to import them
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<AHasher>>;
pub type IndexSet<K> = indexmap::IndexSet<K, BuildHasherDefault<AHasher>>;
pub type HashMap<K, V> = hashbrown::HashMap<K, V, BuildHasherDefault<AHasher>>;
pub type HashSet<K> = hashbrown::HashSet<K, BuildHasherDefault<AHasher>>;

pub use smallvec::{smallvec, SmallVec};
pub use fixedbitset::FixedBitSet as BitSet;

pub trait BitSetExt {
  // union, and tell whether any bit was newly set
  fn or(&mut self, other: &Self) -> bool;
}

impl BitSetExt for BitSet {
  fn or(&mut self, other: &BitSet) -> bool {
    let changed = !other.is_subset(self);
    self.union_with(other);
    changed
  }
}

// parse a "lhs -> rhs1 rhs2 ..." string
pub fn parse_arrow_prod(s: &str) -> Option<(&str, Vec<&str>)> {
  let mut sp = s.split_whitespace();
  let lhs = sp.next()?;
  match sp.next() { Some("->") => {} _ => return None };
  Some((lhs, sp.collect()))
}
