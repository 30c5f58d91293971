//! Engine outcomes and their summary for callers.
//!
//! A [`Report`] pairs the mode a request ran in with either a [`Solution`]
//! or the error that stopped it, and maps the outcome to a [`Status`].

use serde::Serialize;

use super::calculate::Calculation;
use super::triangle::{Side, Triangle};
use super::verify::Verification;
use crate::TriangleError;

/// Which engine operation handled a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One side unknown, derived from the other two
    Calculate,
    /// All three sides given, checked for a right angle
    Verify,
}

/// Successful engine result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    Calculated(Calculation),
    Verified(Verification),
}

impl Solution {
    pub fn mode(&self) -> Mode {
        match self {
            Solution::Calculated(_) => Mode::Calculate,
            Solution::Verified(_) => Mode::Verify,
        }
    }

    pub fn triangle(&self) -> &Triangle {
        match self {
            Solution::Calculated(calc) => &calc.triangle,
            Solution::Verified(verdict) => &verdict.triangle,
        }
    }

    /// Calculated triangles are right by construction.
    pub fn is_right(&self) -> bool {
        match self {
            Solution::Calculated(_) => true,
            Solution::Verified(verdict) => verdict.is_right,
        }
    }

    /// Human-readable summary of the result.
    pub fn message(&self) -> String {
        match self {
            Solution::Calculated(calc) if calc.computed == Side::C => {
                "Hypotenuse calculated".to_string()
            }
            Solution::Calculated(_) => "Leg calculated".to_string(),
            Solution::Verified(verdict) => {
                // The tolerance verdict wins: a leg far below the tolerance
                // can leave `x + y == z` in floating point on a right triangle.
                let verdict_text = if verdict.is_right {
                    "Triangle is RIGHT"
                } else if !verdict.is_possible {
                    "Triangle is impossible: the two shorter sides do not exceed the longest"
                } else {
                    "Triangle is NOT right"
                };
                format!(
                    "Largest side {} treated as hypotenuse. {}",
                    verdict.hypotenuse, verdict_text
                )
            }
        }
    }
}

impl From<Calculation> for Solution {
    fn from(calc: Calculation) -> Self {
        Solution::Calculated(calc)
    }
}

impl From<Verification> for Solution {
    fn from(verdict: Verification) -> Self {
        Solution::Verified(verdict)
    }
}

/// Overall status of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Side computed, or sides verified as a right triangle
    Solved,
    /// Sides verified and found not to form a right triangle
    NotRight,
    /// Input rejected with an error
    Rejected,
}

impl Status {
    /// Process exit code for this status.
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Solved => 0,
            Status::NotRight => 1,
            Status::Rejected => 2,
        }
    }
}

/// Outcome of one request
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Mode the request ran in; `None` when it was rejected before dispatch
    pub mode: Option<Mode>,
    pub outcome: Result<Solution, TriangleError>,
}

impl Report {
    pub fn new(mode: Option<Mode>, outcome: Result<Solution, TriangleError>) -> Self {
        Report { mode, outcome }
    }

    /// Report for a result whose mode follows from the solution itself.
    pub fn from_outcome(outcome: Result<Solution, TriangleError>) -> Self {
        let mode = outcome.as_ref().ok().map(Solution::mode);
        Report { mode, outcome }
    }

    pub fn status(&self) -> Status {
        match &self.outcome {
            Ok(solution) if solution.is_right() => Status::Solved,
            Ok(_) => Status::NotRight,
            Err(_) => Status::Rejected,
        }
    }

    /// Solution message, or the error text.
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(solution) => solution.message(),
            Err(err) => err.to_string(),
        }
    }
}
