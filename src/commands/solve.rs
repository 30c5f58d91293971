//! `solve` command: two values compute, three verify.

use super::{prepare, traced};
use crate::engine::result::Report;
use crate::input::fields::{solve, RawFields};
use crate::Config;

/// Run auto mode on `key=value` arguments.
pub fn run<S: AsRef<str>>(assignments: &[S], config: &Config) -> Report {
    let outcome = RawFields::from_assignments(assignments)
        .map(|fields| prepare(fields, config))
        .and_then(|fields| solve(&fields));

    traced(Report::from_outcome(outcome))
}
