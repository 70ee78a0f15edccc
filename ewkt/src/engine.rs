use crate::{builder::Builder, config::DEFAULT_MAX_NESTING, lexer::Terminal, reduce, tables::Tables, value::Value, Error, ParseContext};
use parser_gen::Action;
use tracing::{debug, trace, warn};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
  Running,
  // a syntax error was reported, the rest of the input is dropped
  Discarding,
  Accepted,
  Failed,
}

#[derive(Debug)]
struct Entry {
  state: u32,
  major: u32,
  value: Value,
}

/// The table driven shift-reduce machine. Tokens go in through [`Engine::feed`], one call each,
/// the end of input being `Terminal::Eof`.
pub struct Engine<'t> {
  tables: &'t Tables,
  builder: Builder,
  max_depth: Option<usize>,
  max_nesting: usize,
  // brackets opened and not yet closed
  nesting: usize,
  stack: Vec<Entry>,
  phase: Phase,
}

impl<'t> Engine<'t> {
  pub fn new(tables: &'t Tables, builder: Builder, max_depth: Option<usize>) -> Engine<'t> {
    Engine {
      tables,
      builder,
      max_depth,
      max_nesting: DEFAULT_MAX_NESTING,
      nesting: 0,
      stack: vec![Entry { state: 0, major: 0, value: Value::Unit }],
      phase: Phase::Running,
    }
  }

  pub fn with_max_nesting(mut self, max_nesting: usize) -> Engine<'t> {
    self.max_nesting = max_nesting;
    self
  }

  pub fn phase(&self) -> Phase { self.phase }

  pub fn is_finished(&self) -> bool { matches!(self.phase, Phase::Accepted | Phase::Failed) }

  pub fn depth(&self) -> usize { self.stack.len() }

  fn top(&self) -> u32 { self.stack.last().map(|e| e.state).unwrap_or(0) }

  fn push(&mut self, state: u32, major: u32, value: Value, ctx: &mut ParseContext) -> bool {
    if let Some(limit) = self.max_depth {
      if self.stack.len() >= limit {
        debug!(limit, "parser stack overflow");
        self.fail(Error::StackOverflow { limit }, ctx);
        return false;
      }
    }
    self.stack.push(Entry { state, major, value });
    if self.stack.len() >= 64 && self.stack.len().is_power_of_two() {
      debug!(depth = self.stack.len(), "parser stack grew");
    }
    true
  }

  fn fail(&mut self, e: Error, ctx: &mut ParseContext) {
    trace!(error = %e, "fail");
    ctx.fail(e);
    self.stack.clear();
    self.phase = Phase::Failed;
  }

  fn accept(&mut self) {
    trace!("accepted");
    self.stack.clear();
    self.phase = Phase::Accepted;
  }

  // returns whether the machine can go on
  fn reduce(&mut self, rule: u32, ctx: &mut ParseContext) -> bool {
    let tables = self.tables;
    let p = &tables.packed;
    let info = match p.rule(rule) {
      Some(info) if (info.arity as usize) < self.stack.len() => info,
      _ => {
        let state = self.top();
        self.fail(Error::UnknownRule { state, rule }, ctx);
        return false;
      }
    };
    let at = self.stack.len() - info.arity as usize;
    let values = self.stack.drain(at..).map(|e| e.value).collect::<Vec<_>>();
    trace!(rule, lhs = info.lhs, arity = info.arity, "reduce");
    let value = match reduce::apply(tables.builds[rule as usize], values, &self.builder, ctx) {
      Ok(v) => v,
      Err(e) => {
        self.fail(e.into(), ctx);
        return false;
      }
    };
    let state = self.top();
    match p.resolve_goto(state, info.lhs).map(|code| p.decode(code)) {
      Some(Action::Shift(next)) => self.push(next, info.lhs, value, ctx),
      Some(Action::Accept) => {
        self.accept();
        false
      }
      _ => {
        self.fail(Error::Internal { state, symbol: info.lhs }, ctx);
        false
      }
    }
  }

  fn syntax_error(&mut self, major: u32, offset: usize, ctx: &mut ParseContext) {
    let state = self.top();
    let found = Terminal::describe(major);
    let mut expected = Vec::new();
    if let Some(codes) = self.tables.packed.expected.get(state as usize) {
      for &c in codes {
        // `$` and NEWLINE read the same, the one just found is not worth listing
        let name = Terminal::describe(c);
        if name != found && !expected.iter().any(|e| e == name) { expected.push(name.to_owned()); }
      }
    }
    let e = Error::Syntax { offset, found: found.to_owned(), expected };
    warn!(state, error = %e, "syntax error");
    trace!(stack = ?self.stack.iter().map(|e| e.major).collect::<Vec<_>>(), "symbols on the stack");
    ctx.fail(e);
    self.phase = Phase::Discarding;
  }

  pub fn feed(&mut self, major: Terminal, minor: Value, offset: usize, ctx: &mut ParseContext) {
    if self.phase == Phase::Running {
      match major {
        Terminal::OpenBracket if self.nesting == self.max_nesting => {
          let limit = self.max_nesting;
          debug!(limit, offset, "nesting too deep");
          return self.fail(Error::NestingTooDeep { offset, limit }, ctx);
        }
        Terminal::OpenBracket => self.nesting += 1,
        Terminal::CloseBracket => self.nesting = self.nesting.saturating_sub(1),
        _ => {}
      }
    }
    let major = major.code();
    let mut minor = Some(minor);
    loop {
      match self.phase {
        Phase::Accepted | Phase::Failed => return,
        Phase::Discarding => {
          trace!(major, "discard");
          if major == Terminal::Eof.code() { self.fail_at_end(); }
          return;
        }
        Phase::Running => {}
      }
      let tables = self.tables;
      let p = &tables.packed;
      let state = self.top();
      match p.decode(p.resolve_shift(state, major)) {
        Action::Shift(next) => {
          trace!(state, lookahead = Terminal::describe(major), next, "shift");
          let value = minor.take().unwrap_or(Value::Unit);
          self.push(next, major, value, ctx);
          return;
        }
        Action::Reduce(rule) => if !self.reduce(rule, ctx) { return; },
        Action::Accept => {
          self.accept();
          return;
        }
        Action::Error => {
          self.syntax_error(major, offset, ctx);
          if major == Terminal::Eof.code() { self.fail_at_end(); }
          return;
        }
      }
    }
  }

  fn fail_at_end(&mut self) {
    trace!("parse failed");
    self.stack.clear();
    self.phase = Phase::Failed;
  }
}
