//! `calc` command: derive the missing side.

use super::{prepare, traced};
use crate::engine::calculate;
use crate::engine::result::{Mode, Report, Solution};
use crate::input::fields::RawFields;
use crate::Config;

/// Run calculate mode on the given text values.
pub fn run(a: Option<&str>, b: Option<&str>, c: Option<&str>, config: &Config) -> Report {
    let fields = prepare(RawFields::new(a, b, c), config);

    let outcome = fields
        .request()
        .and_then(|request| calculate(&request))
        .map(Solution::from);

    traced(Report::new(Some(Mode::Calculate), outcome))
}
