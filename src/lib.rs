//! pythagoras library
//!
//! Compute, verify, and draw right-angled triangles.
//!
//! - [`engine`]: validate side lengths, derive a missing side, verify three sides
//! - [`input`]: parse text fields and pick calculate or verify mode
//! - [`render`]: draw a triangle with labelled sides
//! - [`cli`] and [`commands`]: the `pythagoras` command-line front end
//!
//! # Example
//!
//! ```
//! use pythagoras::{calculate, verify, CalculationRequest, Side};
//!
//! let calc = calculate(&CalculationRequest::legs(3.0, 4.0)).unwrap();
//! assert_eq!(calc.computed, Side::C);
//! assert_eq!(calc.triangle.c(), 5.0);
//!
//! let verdict = verify(2.0, 3.0, 4.0).unwrap();
//! assert!(!verdict.is_right);
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod input;
pub mod render;
pub mod version;

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use cli::args::{Args, OutputFormat};

// Re-exports for public API
pub use engine::result::{Report, Solution, Status};
pub use engine::{
    calculate, validate_side, verify, Calculation, CalculationRequest, Side, Triangle,
    Verification,
};
pub use input::fields::{solve, RawFields};

/// Kind of a [`TriangleError`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A value is missing, non-numeric, non-finite, zero, or negative
    InvalidInput,
    /// The sides cannot belong to any right triangle
    ImpossibleTriangle,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::ImpossibleTriangle => write!(f, "impossible triangle"),
        }
    }
}

/// Error types for triangle operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangleError {
    /// Input rejected before any geometry was attempted
    #[error("{}", field_message(.field, .reason))]
    InvalidInput { field: Option<Side>, reason: String },
    /// Side relationships that no right triangle can have
    #[error("{reason}")]
    ImpossibleTriangle { reason: String },
}

fn field_message(field: &Option<Side>, reason: &str) -> String {
    match field {
        Some(side) => format!("Field {}: {}.", side, reason),
        None => reason.to_string(),
    }
}

impl TriangleError {
    /// Invalid value for a specific side.
    pub fn invalid(side: Side, reason: impl Into<String>) -> Self {
        TriangleError::InvalidInput {
            field: Some(side),
            reason: reason.into(),
        }
    }

    /// Invalid request as a whole (wrong number of values, unknown keys).
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        TriangleError::InvalidInput {
            field: None,
            reason: reason.into(),
        }
    }

    pub fn impossible(reason: impl Into<String>) -> Self {
        TriangleError::ImpossibleTriangle {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TriangleError::InvalidInput { .. } => ErrorKind::InvalidInput,
            TriangleError::ImpossibleTriangle { .. } => ErrorKind::ImpossibleTriangle,
        }
    }

    /// Side the error refers to, if it concerns a single field.
    pub fn field(&self) -> Option<Side> {
        match self {
            TriangleError::InvalidInput { field, .. } => *field,
            TriangleError::ImpossibleTriangle { .. } => None,
        }
    }
}

/// Front-end configuration gathered from arguments and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Output format
    pub format: OutputFormat,
    /// Use ANSI colors in text output
    pub color: bool,
    /// Debug logging and extra detail
    pub verbose: bool,
    /// Print only the result line
    pub quiet: bool,
    /// Draw the triangle in text output
    pub figure: bool,
    /// Accept `,` as the decimal separator
    pub decimal_comma: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            color: true,
            verbose: false,
            quiet: false,
            figure: true,
            decimal_comma: false,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let no_color = args.no_color || std::env::var_os("NO_COLOR").is_some();

        Config {
            format: args.format,
            color: !no_color,
            verbose: args.verbose,
            quiet: args.quiet,
            figure: !args.no_figure,
            decimal_comma: args.decimal_comma,
        }
    }
}
