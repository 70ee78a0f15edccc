use serde::Deserialize;
use crate::{IndexSet, HashMap, SmallVec, parse_arrow_prod};

pub type ProdVec = SmallVec<[u32; 6]>;

// the end of input is always terminal 0, the grammar file doesn't list it
pub const EOF: &str = "$";

#[derive(Debug, Deserialize)]
pub struct RawGrammar {
  pub start: String,
  // terminal names in code order, starting from code 1
  pub terminals: Vec<String>,
  pub rules: Vec<RawRuleGroup>,
}

// a group of productions that share one reduce behaviour
// `act` is opaque here, the parser that owns the grammar gives it a meaning
#[derive(Debug, Deserialize)]
pub struct RawRuleGroup {
  pub act: String,
  pub prod: Vec<String>,
}

pub fn validate_variable_name(s: &str) -> bool {
  let mut chs = s.chars();
  match chs.next() {
    Some(ch) if ch.is_ascii_alphabetic() => chs.all(|ch| ch.is_ascii_alphanumeric() || ch == '_'),
    _ => false,
  }
}

#[derive(Debug)]
pub struct Prod<'a> {
  pub id: u32,
  // symbol code of the lhs non-terminal
  pub lhs: u32,
  pub rhs: ProdVec,
  pub act: &'a str,
}

// about the distribution of symbols on u32:
// terminal: 0..term_num(), non-terminal: term_num()..token_num()
// lookahead sets additionally use term_num() as eps and term_num() + 1 as the propagation marker
#[derive(Debug)]
pub struct Grammar<'a> {
  pub raw: &'a RawGrammar,
  pub terms: Vec<&'a str>,
  pub nt: Vec<&'a str>,
  pub prod: Vec<Prod<'a>>,
  // nt index -> ids of its productions
  pub nt_prod: Vec<Vec<u32>>,
}

impl RawGrammar {
  pub fn extend(&self) -> Result<Grammar, String> {
    let mut terms = vec![EOF];
    let mut term2id = HashMap::default();
    term2id.insert(EOF, 0u32);
    for term in &self.terminals {
      let term = term.as_str();
      if !validate_variable_name(term) {
        return Err(format!("term is not a valid variable name: \"{}\"", term));
      }
      if term2id.insert(term, terms.len() as u32).is_some() {
        return Err(format!("duplicate term: \"{}\"", term));
      }
      terms.push(term);
    }

    // 2 pass scan, so a non-term can be used before declared
    let mut parsed = Vec::new();
    let mut nt = IndexSet::default();
    for group in &self.rules {
      for prod in &group.prod {
        let (lhs, rhs) = parse_arrow_prod(prod).ok_or_else(|| format!("invalid production: \"{}\"", prod))?;
        if !validate_variable_name(lhs) {
          return Err(format!("non-term is not a valid variable name: \"{}\"", lhs));
        } else if term2id.contains_key(lhs) {
          return Err(format!("non-term has a duplicate name with term: \"{}\"", lhs));
        }
        nt.insert(lhs);
        parsed.push((lhs, rhs, group.act.as_str()));
      }
    }
    if parsed.is_empty() {
      return Err("grammar must have at least one production rule".into());
    }
    if !nt.contains(self.start.as_str()) {
      return Err(format!("start non-term has no production: \"{}\"", self.start));
    }

    let term_num = terms.len() as u32;
    let mut prod = Vec::with_capacity(parsed.len());
    let mut nt_prod = vec![Vec::new(); nt.len()];
    for (id, (lhs, rhs, act)) in parsed.into_iter().enumerate() {
      let mut prod_rhs = ProdVec::new();
      for name in rhs {
        if name == self.start {
          return Err(format!("start non-term \"{}\" cannot appear in a production rhs", name));
        }
        match (nt.get_index_of(name), term2id.get(name)) {
          (Some(idx), _) => prod_rhs.push(idx as u32 + term_num),
          (_, Some(&t)) => prod_rhs.push(t),
          _ => return Err(format!("production rhs contains undefined token: \"{}\"", name)),
        }
      }
      // lhs must be present, inserted in the first pass
      let lhs_idx = nt.get_index_of(lhs).unwrap_or_default();
      nt_prod[lhs_idx].push(id as u32);
      prod.push(Prod { id: id as u32, lhs: lhs_idx as u32 + term_num, rhs: prod_rhs, act });
    }
    Ok(Grammar { raw: self, terms, nt: nt.into_iter().collect(), prod, nt_prod })
  }
}

impl<'a> Grammar<'a> {
  pub fn start(&self) -> u32 {
    // checked in `extend`
    self.nt.iter().position(|&n| n == self.raw.start).unwrap_or_default() as u32 + self.term_num()
  }

  pub fn term_num(&self) -> u32 { self.terms.len() as u32 }
  pub fn nt_num(&self) -> u32 { self.nt.len() as u32 }
  pub fn token_num(&self) -> u32 { self.term_num() + self.nt_num() }
  pub fn prod_num(&self) -> u32 { self.prod.len() as u32 }

  pub fn eps(&self) -> u32 { self.term_num() }
  pub fn err(&self) -> u32 { self.term_num() + 1 }
  pub fn lookahead_num(&self) -> u32 { self.term_num() + 2 }

  pub fn as_nt(&self, ch: u32) -> Option<u32> {
    if ch >= self.term_num() && ch < self.token_num() { Some(ch - self.term_num()) } else { None }
  }

  pub fn get_prod<'s>(&'s self, lhs: u32) -> impl Iterator<Item=&'s Prod<'a>> + 's {
    let ids = self.as_nt(lhs).map(|nt| self.nt_prod[nt as usize].as_slice()).unwrap_or(&[]);
    ids.iter().map(move |&id| &self.prod[id as usize])
  }

  pub fn show_token(&self, id: u32) -> &str {
    match self.as_nt(id) {
      Some(nt) => self.nt[nt as usize],
      None => self.terms.get(id as usize).copied().unwrap_or("?"),
    }
  }

  pub fn show_prod(&self, id: u32, dot: Option<u32>) -> String {
    let prod = &self.prod[id as usize];
    let mut s = format!("{} ->", self.show_token(prod.lhs));
    for (idx, &rhs) in prod.rhs.iter().enumerate() {
      s.push(if Some(idx as u32) == dot { '.' } else { ' ' });
      s += self.show_token(rhs);
    }
    if Some(prod.rhs.len() as u32) == dot { s.push('.'); }
    s
  }
}
