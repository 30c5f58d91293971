//! Triangle engine.
//!
//! Pure computation with no I/O: validate side lengths, derive a missing
//! side, or verify three sides against the Pythagorean relation.

pub mod calculate;
pub mod result;
pub mod tolerance;
pub mod triangle;
pub mod verify;

pub use calculate::{calculate, Calculation, CalculationRequest};
pub use triangle::{Oriented, Side, SideLength, Triangle};
pub use verify::{verify, Verification};

use crate::TriangleError;

/// Check that a side length is finite and strictly positive.
pub fn validate_side(side: Side, value: f64) -> Result<f64, TriangleError> {
    if !value.is_finite() {
        return Err(TriangleError::invalid(
            side,
            "value must be finite (not NaN or infinity)",
        ));
    }
    if value <= 0.0 {
        return Err(TriangleError::invalid(side, "value must be greater than zero"));
    }
    Ok(value)
}
