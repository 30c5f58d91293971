//! `verify` command: check three sides.

use super::{prepare, traced};
use crate::engine::result::{Mode, Report, Solution};
use crate::engine::{verify, Side};
use crate::input::fields::RawFields;
use crate::{Config, TriangleError};

/// Run verify mode on three text values.
pub fn run(a: &str, b: &str, c: &str, config: &Config) -> Report {
    let fields = prepare(RawFields::new(Some(a), Some(b), Some(c)), config);

    let outcome = fields.request().and_then(|request| {
        let side = |side: Side| {
            request
                .get(side)
                .ok_or_else(|| TriangleError::invalid(side, "value is required to verify"))
        };
        verify(side(Side::A)?, side(Side::B)?, side(Side::C)?).map(Solution::from)
    });

    traced(Report::new(Some(Mode::Verify), outcome))
}
