//! CLI integration tests.
//!
//! Tests for argument parsing and configuration.

use clap::Parser;

use pythagoras::cli::args::{Args, Command, OutputFormat};
use pythagoras::Config;

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["pythagoras"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_calc_command() {
    let args = parse(&["calc", "-a", "3", "-b", "4"]);
    assert_eq!(
        args.command,
        Command::Calc {
            a: Some("3".to_string()),
            b: Some("4".to_string()),
            c: None,
        }
    );
}

#[test]
fn test_calc_long_options() {
    let args = parse(&["calc", "--leg-a", "3", "--hypotenuse", "5"]);
    assert_eq!(
        args.command,
        Command::Calc {
            a: Some("3".to_string()),
            b: None,
            c: Some("5".to_string()),
        }
    );
}

#[test]
fn test_verify_command() {
    let args = parse(&["verify", "3", "4", "5"]);
    assert_eq!(
        args.command,
        Command::Verify {
            a: "3".to_string(),
            b: "4".to_string(),
            c: "5".to_string(),
        }
    );
}

#[test]
fn test_verify_requires_three_values() {
    assert!(Args::try_parse_from(["pythagoras", "verify", "3", "4"]).is_err());
}

#[test]
fn test_solve_command() {
    let args = parse(&["solve", "a=3", "c=5"]);
    assert_eq!(
        args.command,
        Command::Solve {
            fields: vec!["a=3".to_string(), "c=5".to_string()],
        }
    );
}

#[test]
fn test_version_command() {
    let args = parse(&["version"]);
    assert_eq!(args.command, Command::Version);
}

#[test]
fn test_global_options_after_subcommand() {
    let args = parse(&["verify", "3", "4", "5", "--format", "json", "--no-figure"]);
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.no_figure);
}

#[test]
fn test_format_equals_syntax() {
    let args = parse(&["--format=json", "version"]);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn test_missing_command_is_error() {
    assert!(Args::try_parse_from(["pythagoras"]).is_err());
}

#[test]
fn test_config_from_args() {
    let args = parse(&["--no-color", "--no-figure", "--decimal-comma", "-q", "version"]);
    let config = Config::from_args(&args);
    assert!(!config.color);
    assert!(!config.figure);
    assert!(config.decimal_comma);
    assert!(config.quiet);
    assert!(!config.verbose);
}
