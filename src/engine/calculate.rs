//! Calculate mode: derive the missing side from the other two.

use serde::Serialize;
use tracing::debug;

use super::triangle::{Side, Triangle};
use super::validate_side;
use crate::TriangleError;

/// Input for calculate mode; `None` marks a side as unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculationRequest {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

impl CalculationRequest {
    pub fn new(a: Option<f64>, b: Option<f64>, c: Option<f64>) -> Self {
        CalculationRequest { a, b, c }
    }

    /// Request with both legs known.
    pub fn legs(a: f64, b: f64) -> Self {
        CalculationRequest::new(Some(a), Some(b), None)
    }

    /// Value supplied for `side`, if any.
    pub fn get(&self, side: Side) -> Option<f64> {
        match side {
            Side::A => self.a,
            Side::B => self.b,
            Side::C => self.c,
        }
    }

    /// Sides with no value, in slot order.
    pub fn missing(&self) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|side| self.get(*side).is_none())
            .collect()
    }
}

/// A completed triangle and the side that was derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub triangle: Triangle,
    pub computed: Side,
}

impl Calculation {
    /// Length of the derived side.
    pub fn computed_value(&self) -> f64 {
        self.triangle.side(self.computed)
    }
}

/// Compute the single unknown side of a right triangle.
///
/// With both legs known the hypotenuse is `hypot(a, b)`. With the hypotenuse
/// and one leg known, the hypotenuse must be strictly longer than that leg.
///
/// # Errors
///
/// * [`TriangleError::InvalidInput`] when not exactly one side is unknown, or
///   a known value is not a positive finite number, or the derived side is
///   not representable.
/// * [`TriangleError::ImpossibleTriangle`] when the hypotenuse does not
///   exceed the known leg.
pub fn calculate(request: &CalculationRequest) -> Result<Calculation, TriangleError> {
    let (unknown, value, a, b, c) = match (request.a, request.b, request.c) {
        (Some(a), Some(b), None) => {
            let a = validate_side(Side::A, a)?;
            let b = validate_side(Side::B, b)?;
            let c = a.hypot(b);
            (Side::C, c, a, b, c)
        }
        (Some(a), None, Some(c)) => {
            let a = validate_side(Side::A, a)?;
            let c = validate_side(Side::C, c)?;
            let b = missing_leg(a, c)?;
            (Side::B, b, a, b, c)
        }
        (None, Some(b), Some(c)) => {
            let b = validate_side(Side::B, b)?;
            let c = validate_side(Side::C, c)?;
            let a = missing_leg(b, c)?;
            (Side::A, a, a, b, c)
        }
        _ => {
            return Err(TriangleError::invalid_request(
                "Enter exactly two values to compute the missing one, or all three values to verify.",
            ))
        }
    };

    if !value.is_finite() || value <= 0.0 {
        return Err(TriangleError::invalid_request(format!(
            "Computed side {} is not representable as a positive finite number.",
            unknown
        )));
    }

    debug!(a, b, c, computed = %unknown, "calculated missing side");

    Ok(Calculation {
        triangle: Triangle::new(a, b, c),
        computed: unknown,
    })
}

/// `sqrt(c² - leg²)`, factored as `sqrt((c - leg)(c + leg))`. Falls back to
/// scaling by the hypotenuse when the product leaves the normal range.
fn missing_leg(leg: f64, hypotenuse: f64) -> Result<f64, TriangleError> {
    if hypotenuse <= leg {
        return Err(TriangleError::impossible(
            "Hypotenuse c must be greater than the known leg.",
        ));
    }
    let product = (hypotenuse - leg) * (hypotenuse + leg);
    if product.is_normal() {
        return Ok(product.sqrt());
    }
    let ratio = leg / hypotenuse;
    Ok(hypotenuse * ((1.0 - ratio) * (1.0 + ratio)).sqrt())
}
