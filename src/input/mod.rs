//! Input boundary.
//!
//! Turns loosely typed text (command-line values, form fields) into
//! validated side lengths before anything reaches the engine.

pub mod fields;

use crate::engine::{validate_side, Side};
use crate::TriangleError;

/// Parse and validate a single text field.
///
/// `None`, empty, or whitespace-only text means the side is unknown and
/// yields `Ok(None)`. Anything else must parse as an `f64` and pass
/// [`validate_side`]. A decimal comma is not a number here; front ends that
/// accept one call [`normalize_decimal_comma`] first.
pub fn parse_value(side: Side, text: Option<&str>) -> Result<Option<f64>, TriangleError> {
    let trimmed = match text.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(t) => t,
    };

    let value: f64 = trimmed
        .parse()
        .map_err(|_| TriangleError::invalid(side, "value must be a number"))?;

    validate_side(side, value).map(Some)
}

/// Trim and replace decimal commas with points: `" 3,5 "` becomes `"3.5"`.
pub fn normalize_decimal_comma(text: &str) -> String {
    text.trim().replace(',', ".")
}
