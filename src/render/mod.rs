//! Triangle rendering.
//!
//! The engine hands a [`Figure`] to a [`Renderer`]; the renderer decides
//! how to draw it. [`AsciiRenderer`] draws for terminals.

pub mod ascii;

pub use ascii::AsciiRenderer;

use crate::engine::result::Solution;
use crate::engine::{Calculation, Side, SideLength, Verification};

/// A right-triangle drawing: two legs meeting at the right-angle corner and
/// the hypotenuse opposite it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    /// Leg drawn upward from the corner
    pub vertical: SideLength,
    /// Leg drawn along the base
    pub horizontal: SideLength,
    pub hypotenuse: SideLength,
    /// Whether the sides were confirmed to form a right angle
    pub right_angle: bool,
    /// Side derived by calculate mode, if any
    pub computed: Option<Side>,
}

impl From<&Calculation> for Figure {
    fn from(calc: &Calculation) -> Self {
        let t = &calc.triangle;
        Figure {
            vertical: SideLength {
                side: Side::A,
                length: t.a(),
            },
            horizontal: SideLength {
                side: Side::B,
                length: t.b(),
            },
            hypotenuse: SideLength {
                side: Side::C,
                length: t.c(),
            },
            right_angle: true,
            computed: Some(calc.computed),
        }
    }
}

/// The shortest side goes up, the middle one along the base.
impl From<&Verification> for Figure {
    fn from(verdict: &Verification) -> Self {
        let oriented = verdict.triangle.oriented();
        Figure {
            vertical: oriented.legs[0],
            horizontal: oriented.legs[1],
            hypotenuse: oriented.hypotenuse,
            right_angle: verdict.is_right,
            computed: None,
        }
    }
}

impl From<&Solution> for Figure {
    fn from(solution: &Solution) -> Self {
        match solution {
            Solution::Calculated(calc) => Figure::from(calc),
            Solution::Verified(verdict) => Figure::from(verdict),
        }
    }
}

/// Draws a figure into text.
pub trait Renderer {
    fn render(&self, figure: &Figure) -> String;
}

/// Format a length with up to six significant digits, dropping trailing
/// zeros: `5.315072906` becomes `5.31507`, `1e9 * √2` becomes `1.41421e9`.
pub fn format_length(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    // Round first so a carry into a new digit moves the exponent.
    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = match scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)))
    {
        Some(parts) => parts,
        None => return scientific,
    };

    if (-5..6).contains(&exponent) {
        let decimals = (5 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        format!("{}e{}", trim_fraction(mantissa), exponent)
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
