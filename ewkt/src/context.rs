use crate::{geometry::Geometry, Error};

/// State shared by every reduction of one parse, read by the caller once the input is fed.
#[derive(Debug, Default)]
pub struct ParseContext {
  pub result: Option<Geometry>,
  pub has_error: bool,
  // the first failure, later ones are not recorded
  pub error: Option<Error>,
}

impl ParseContext {
  pub fn fail(&mut self, e: Error) {
    if self.error.is_none() { self.error = Some(e); }
    self.has_error = true;
    self.result = None;
  }

  pub fn finish(self) -> Result<Geometry, Error> {
    match (self.has_error, self.error, self.result) {
      (false, _, Some(g)) => Ok(g),
      (_, Some(e), _) => Err(e),
      // accepted without a geometry, only possible if the tables accept an empty input
      _ => Err(Error::Syntax { offset: 0, found: "end of input".into(), expected: Vec::new() }),
    }
  }
}
