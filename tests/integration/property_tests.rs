//! Property tests for the Pythagorean invariants.

use proptest::prelude::*;

use pythagoras::engine::tolerance::approx_eq;
use pythagoras::{calculate, verify, CalculationRequest, ErrorKind};

/// Side lengths across many orders of magnitude.
fn side() -> impl Strategy<Value = f64> {
    (1.0f64..10.0, -6i32..=6).prop_map(|(mantissa, exp)| mantissa * 10f64.powi(exp))
}

/// Legs whose ratio stays within a range where both contribute to the sum.
fn comparable_legs() -> impl Strategy<Value = (f64, f64)> {
    (side(), 0.01f64..100.0).prop_map(|(a, ratio)| (a, a * ratio))
}

proptest! {
    #[test]
    fn hypotenuse_satisfies_relation((a, b) in comparable_legs()) {
        let calc = calculate(&CalculationRequest::legs(a, b)).unwrap();
        let c = calc.triangle.c();
        prop_assert!(approx_eq(a * a + b * b, c * c));
    }

    #[test]
    fn leg_satisfies_relation(a in side(), extra in 0.01f64..100.0) {
        let c = a * (1.0 + extra);
        let calc = calculate(&CalculationRequest::new(Some(a), None, Some(c))).unwrap();
        let b = calc.triangle.b();
        prop_assert!(b > 0.0);
        prop_assert!(approx_eq(a * a + b * b, c * c));
    }

    #[test]
    fn hypotenuse_not_longer_than_leg_is_impossible(c in side(), shrink in 0.0f64..0.99) {
        let a = c / (1.0 - shrink);
        let err = calculate(&CalculationRequest::new(Some(a), None, Some(c))).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ImpossibleTriangle);
    }

    #[test]
    fn calculated_triangles_verify_as_right((a, b) in comparable_legs()) {
        let calc = calculate(&CalculationRequest::legs(a, b)).unwrap();
        let (a, b, c) = calc.triangle.sides();
        prop_assert!(verify(a, b, c).unwrap().is_right);
        // order does not matter
        prop_assert!(verify(c, a, b).unwrap().is_right);
    }

    #[test]
    fn calculated_legs_verify_as_right(leg in side(), extra in 0.01f64..100.0) {
        let hyp = leg * (1.0 + extra);

        let calc = calculate(&CalculationRequest::new(Some(leg), None, Some(hyp))).unwrap();
        let (a, b, c) = calc.triangle.sides();
        prop_assert!(verify(a, b, c).unwrap().is_right);
        prop_assert!(verify(b, c, a).unwrap().is_right);
        prop_assert!(verify(c, a, b).unwrap().is_right);

        let calc = calculate(&CalculationRequest::new(None, Some(leg), Some(hyp))).unwrap();
        let (a, b, c) = calc.triangle.sides();
        prop_assert!(verify(a, b, c).unwrap().is_right);
        prop_assert!(verify(b, c, a).unwrap().is_right);
        prop_assert!(verify(c, a, b).unwrap().is_right);
    }

    #[test]
    fn verify_is_pure(a in side(), b in side(), c in side()) {
        prop_assert_eq!(verify(a, b, c), verify(a, b, c));
    }

    #[test]
    fn non_positive_sides_rejected(bad in -1e6f64..=0.0, b in side(), c in side()) {
        let err = verify(bad, b, c).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
