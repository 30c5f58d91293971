//! Verify mode: check whether three sides form a right triangle.

use serde::Serialize;
use tracing::debug;

use super::tolerance::approx_eq;
use super::triangle::{Side, Triangle};
use super::validate_side;
use crate::TriangleError;

/// Verdict for three given sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Verification {
    /// Whether the two shorter sides and the longest satisfy the
    /// Pythagorean relation within tolerance.
    pub is_right: bool,
    /// Whether the two shorter sides sum to more than the longest.
    pub is_possible: bool,
    /// Input slot holding the longest side.
    pub hypotenuse: Side,
    /// The sides exactly as supplied.
    pub triangle: Triangle,
}

/// Check whether `a`, `b`, `c` form a right triangle.
///
/// The sides may be given in any order; the longest is treated as the
/// hypotenuse candidate. A negative verdict is a result, not an error, and
/// degenerate inputs (`x + y <= z`) are reported through `is_possible`.
///
/// # Errors
///
/// [`TriangleError::InvalidInput`] when any side is not a positive finite
/// number.
pub fn verify(a: f64, b: f64, c: f64) -> Result<Verification, TriangleError> {
    let a = validate_side(Side::A, a)?;
    let b = validate_side(Side::B, b)?;
    let c = validate_side(Side::C, c)?;

    let triangle = Triangle::new(a, b, c);
    let oriented = triangle.oriented();
    let [short, middle] = oriented.legs;
    let longest = oriented.hypotenuse;

    // Compare on sides scaled by the hypotenuse so squares stay in range.
    let x = short.length / longest.length;
    let y = middle.length / longest.length;
    let is_right = approx_eq(x * x + y * y, 1.0);
    let is_possible = short.length + middle.length > longest.length;

    debug!(a, b, c, hypotenuse = %longest.side, is_right, is_possible, "verified sides");

    Ok(Verification {
        is_right,
        is_possible,
        hypotenuse: longest.side,
        triangle,
    })
}
