//! Command handlers for pythagoras
//!
//! - `calc`: compute the missing side from two known sides
//! - `verify`: check three sides for a right angle
//! - `solve`: pick calc or verify from how many values are given
//!
//! Handlers never fail: rejected input is carried inside the [`Report`].

pub mod calc;
pub mod solve;
pub mod verify;

use crate::engine::result::Report;
use crate::input::fields::RawFields;
use crate::input::normalize_decimal_comma;
use crate::Config;

/// Apply front-end text normalization before parsing.
fn prepare(fields: RawFields, config: &Config) -> RawFields {
    if config.decimal_comma {
        fields.map_values(normalize_decimal_comma)
    } else {
        fields
    }
}

/// Log a rejected request at debug level and hand the report back.
fn traced(report: Report) -> Report {
    if let Err(err) = &report.outcome {
        tracing::debug!(kind = %err.kind(), error = %err, "request rejected");
    }
    report
}
