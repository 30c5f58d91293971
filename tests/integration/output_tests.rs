//! Output formatting tests.
//!
//! Tests for terminal and JSON output formatters.

use pythagoras::cli::args::OutputFormat;
use pythagoras::cli::output::{get_formatter, JsonFormatter, OutputFormatter, TerminalFormatter};
use pythagoras::engine::result::Mode;
use pythagoras::{
    calculate, verify, CalculationRequest, Config, Report, Side, TriangleError,
};
use serde_json::Value;

fn calc_report() -> Report {
    Report::from_outcome(Ok(calculate(&CalculationRequest::legs(3.0, 4.0))
        .unwrap()
        .into()))
}

fn verify_report(a: f64, b: f64, c: f64) -> Report {
    Report::from_outcome(Ok(verify(a, b, c).unwrap().into()))
}

fn json(report: &Report) -> Value {
    serde_json::from_str(&JsonFormatter::new(true).format(report)).unwrap()
}

#[test]
fn test_terminal_includes_figure() {
    let formatter = TerminalFormatter::new(false, false, false, true);
    let output = formatter.format(&calc_report());
    assert!(output.starts_with("Hypotenuse calculated\na = 3, b = 4, c = 5\n\n"));
    assert!(output.contains("c = 5 (computed)"));
    assert!(output.contains('+'));
}

#[test]
fn test_terminal_verbose_details() {
    let formatter = TerminalFormatter::new(false, true, false, false);
    let output = formatter.format(&verify_report(4.0, 5.0, 3.0));
    assert!(output.contains("Perimeter: 12"));
    assert!(output.contains("Hypotenuse candidate: b"));
    assert!(output.contains("Triangle inequality holds: true"));
}

#[test]
fn test_terminal_not_right_figure_note() {
    let formatter = TerminalFormatter::new(false, false, false, true);
    let output = formatter.format(&verify_report(2.0, 3.0, 4.0));
    assert!(output.starts_with("Largest side c treated as hypotenuse. Triangle is NOT right"));
    assert!(output.contains("note: not a right triangle"));
}

#[test]
fn test_json_calculated() {
    let value = json(&calc_report());
    assert_eq!(value["status"], "solved");
    assert_eq!(value["mode"], "calculate");
    assert_eq!(value["message"], "Hypotenuse calculated");
    assert_eq!(value["triangle"]["a"], 3.0);
    assert_eq!(value["triangle"]["c"], 5.0);
    assert_eq!(value["computed"]["side"], "c");
    assert_eq!(value["computed"]["value"], 5.0);
    assert!(value.get("verdict").is_none());
    assert!(value.get("error").is_none());
}

#[test]
fn test_json_verified() {
    let value = json(&verify_report(2.0, 3.0, 4.0));
    assert_eq!(value["status"], "not_right");
    assert_eq!(value["mode"], "verify");
    assert_eq!(value["verdict"]["is_right"], false);
    assert_eq!(value["verdict"]["is_possible"], true);
    assert_eq!(value["verdict"]["hypotenuse"], "c");
    assert!(value.get("computed").is_none());
}

#[test]
fn test_json_invalid_input() {
    let report = Report::new(
        Some(Mode::Verify),
        Err(TriangleError::invalid(Side::A, "value must be greater than zero")),
    );
    let value = json(&report);
    assert_eq!(value["status"], "rejected");
    assert_eq!(value["message"], "Field a: value must be greater than zero.");
    assert_eq!(value["error"]["kind"], "invalid_input");
    assert_eq!(value["error"]["field"], "a");
    assert_eq!(value["error"]["reason"], "value must be greater than zero");
}

#[test]
fn test_get_formatter_follows_config() {
    let config = Config {
        format: OutputFormat::Json,
        ..Config::default()
    };
    let output = get_formatter(&config).format(&calc_report());
    assert!(serde_json::from_str::<Value>(&output).is_ok());

    let config = Config {
        color: false,
        figure: false,
        ..Config::default()
    };
    let output = get_formatter(&config).format(&calc_report());
    assert_eq!(output, "Hypotenuse calculated\na = 3, b = 4, c = 5");
}
