//! Output formatting for pythagoras.
//!
//! Provides terminal and JSON formatters for a [`Report`].
//!
//! All formatters produce output for any report, including rejected input.
//! No function in this module will panic.

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::engine::result::{Mode, Report, Solution, Status};
use crate::engine::{Side, Triangle};
use crate::render::{format_length, AsciiRenderer, Figure, Renderer};
use crate::{Config, ErrorKind};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a report into a string
    fn format(&self, report: &Report) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    quiet: bool,
    figure: bool,
    renderer: AsciiRenderer,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool, quiet: bool, figure: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            quiet,
            figure,
            renderer: AsciiRenderer::default(),
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn length(&self, value: f64) -> String {
        if self.verbose {
            value.to_string()
        } else {
            format_length(value)
        }
    }

    fn sides_line(&self, triangle: &Triangle, computed: Option<Side>) -> String {
        Side::ALL
            .iter()
            .map(|side| {
                let text = format!("{} = {}", side, self.length(triangle.side(*side)));
                if computed == Some(*side) {
                    self.yellow(&text)
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_quiet(&self, report: &Report) -> String {
        match &report.outcome {
            Ok(Solution::Calculated(calc)) => {
                format!("{} = {}", calc.computed, self.length(calc.computed_value()))
            }
            Ok(Solution::Verified(verdict)) if verdict.is_right => "right".to_string(),
            Ok(Solution::Verified(_)) => "not right".to_string(),
            Err(err) => format!("Error: {}", err),
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &Report) -> String {
        if self.quiet {
            return self.format_quiet(report);
        }

        let solution = match &report.outcome {
            Ok(solution) => solution,
            Err(err) => return format!("{} {}", self.red("Error:"), err),
        };

        let mut output = String::new();

        let message = solution.message();
        let headline = match report.status() {
            Status::Solved => self.green(&message),
            _ => self.red(&message),
        };
        output.push_str(&headline);
        output.push('\n');

        let computed = match solution {
            Solution::Calculated(calc) => Some(calc.computed),
            Solution::Verified(_) => None,
        };
        output.push_str(&self.sides_line(solution.triangle(), computed));

        if self.verbose {
            output.push_str(&format!(
                "\nPerimeter: {}",
                solution.triangle().perimeter()
            ));
            if let Solution::Verified(verdict) = solution {
                output.push_str(&format!(
                    "\nHypotenuse candidate: {}\nTriangle inequality holds: {}",
                    verdict.hypotenuse, verdict.is_possible
                ));
            }
        }

        if self.figure {
            output.push_str("\n\n");
            output.push_str(&self.renderer.render(&Figure::from(solution)));
        }

        output
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    triangle: Option<&'a Triangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    computed: Option<JsonComputed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<JsonVerdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

#[derive(Serialize)]
struct JsonComputed {
    side: Side,
    value: f64,
}

#[derive(Serialize)]
struct JsonVerdict {
    is_right: bool,
    is_possible: bool,
    hypotenuse: Side,
}

#[derive(Serialize)]
struct JsonError {
    kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Side>,
    reason: String,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> String {
        let mut json = JsonReport {
            status: report.status(),
            mode: report.mode,
            message: report.message(),
            triangle: None,
            computed: None,
            verdict: None,
            error: None,
        };

        match &report.outcome {
            Ok(solution) => {
                json.triangle = Some(solution.triangle());
                match solution {
                    Solution::Calculated(calc) => {
                        json.computed = Some(JsonComputed {
                            side: calc.computed,
                            value: calc.computed_value(),
                        });
                    }
                    Solution::Verified(verdict) => {
                        json.verdict = Some(JsonVerdict {
                            is_right: verdict.is_right,
                            is_possible: verdict.is_possible,
                            hypotenuse: verdict.hypotenuse,
                        });
                    }
                }
            }
            Err(err) => {
                let reason = match err {
                    crate::TriangleError::InvalidInput { reason, .. }
                    | crate::TriangleError::ImpossibleTriangle { reason } => reason.clone(),
                };
                json.error = Some(JsonError {
                    kind: err.kind(),
                    field: err.field(),
                    reason,
                });
            }
        }

        let result = if self.pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        };

        result.unwrap_or_else(|e| {
            serde_json::json!({ "status": "error", "message": e.to_string() }).to_string()
        })
    }
}

/// Get a formatter based on the configuration
pub fn get_formatter(config: &Config) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(
            config.color,
            config.verbose,
            config.quiet,
            config.figure,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
