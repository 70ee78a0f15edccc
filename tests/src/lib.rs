#[cfg(test)]
mod fixture;
#[cfg(test)]
mod scenario;
#[cfg(test)]
mod malformed;
#[cfg(test)]
mod nesting;
#[cfg(test)]
mod prop;
