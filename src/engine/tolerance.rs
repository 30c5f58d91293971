//! Numerical tolerance for the right-angle check.
//!
//! Two squared magnitudes are treated as equal when they differ by no more
//! than `max(ABS_TOLERANCE, REL_TOLERANCE * max(lhs, rhs))`. The relative
//! term absorbs rounding from `sqrt` and squaring at any scale; the absolute
//! floor keeps the comparison meaningful when both values are near zero.

/// Relative tolerance applied to the larger of the two squared magnitudes.
pub const REL_TOLERANCE: f64 = 1e-9;

/// Absolute floor for the comparison.
pub const ABS_TOLERANCE: f64 = 1e-12;

/// Whether `lhs` and `rhs` are equal within tolerance.
///
/// Returns `false` if either value is NaN.
pub fn approx_eq(lhs: f64, rhs: f64) -> bool {
    let diff = (lhs - rhs).abs();
    diff <= ABS_TOLERANCE.max(REL_TOLERANCE * lhs.abs().max(rhs.abs()))
}
