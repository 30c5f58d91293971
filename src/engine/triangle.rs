//! Triangle and side types shared by the engine and its callers.

use serde::Serialize;
use std::fmt;

/// One of the three sides of a triangle.
///
/// `A` and `B` are the leg slots, `C` is the hypotenuse slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
    C,
}

impl Side {
    /// All sides in slot order.
    pub const ALL: [Side; 3] = [Side::A, Side::B, Side::C];

    /// Lowercase name used in labels and messages.
    pub fn name(self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
            Side::C => "c",
        }
    }

    /// Whether this is the hypotenuse slot.
    pub fn is_hypotenuse(self) -> bool {
        self == Side::C
    }

    /// Look a side up by its name.
    pub fn from_name(name: &str) -> Option<Side> {
        match name {
            "a" => Some(Side::A),
            "b" => Some(Side::B),
            "c" => Some(Side::C),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A side length tagged with the slot it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SideLength {
    pub side: Side,
    pub length: f64,
}

/// Sides arranged by size: two legs and the hypotenuse.
///
/// `legs[0] <= legs[1] <= hypotenuse`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oriented {
    pub legs: [SideLength; 2],
    pub hypotenuse: SideLength,
}

/// Three positive, finite side lengths.
///
/// Only the engine builds triangles, after validating every side, so a
/// `Triangle` in hand always has positive finite sides. Whether the sides
/// satisfy `a² + b² = c²` depends on how it was produced: always for
/// [`calculate`](crate::engine::calculate), not necessarily for
/// [`verify`](crate::engine::verify).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Callers must have validated every side.
    pub(crate) fn new(a: f64, b: f64, c: f64) -> Self {
        debug_assert!(
            [a, b, c].iter().all(|v| v.is_finite() && *v > 0.0),
            "triangle sides must be positive and finite"
        );
        Triangle { a, b, c }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Length of the given side.
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
            Side::C => self.c,
        }
    }

    /// Sides in slot order `(a, b, c)`.
    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Arrange the sides by size; the largest becomes the hypotenuse.
    ///
    /// Ties keep slot order, so a triangle from `calculate` keeps `c` as its
    /// hypotenuse even when a leg has the same length after rounding.
    pub fn oriented(&self) -> Oriented {
        let mut sides = Side::ALL.map(|side| SideLength {
            side,
            length: self.side(side),
        });
        sides.sort_by(|x, y| x.length.total_cmp(&y.length));
        Oriented {
            legs: [sides[0], sides[1]],
            hypotenuse: sides[2],
        }
    }

    /// Perimeter of the triangle.
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle(a = {}, b = {}, c = {})", self.a, self.b, self.c)
    }
}
