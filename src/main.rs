//! pythagoras CLI entry point
//!
//! Compute, verify, and draw right-angled triangles.

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pythagoras::cli::args::{Args, Command, OutputFormat};
use pythagoras::cli::output::get_formatter;
use pythagoras::commands;
use pythagoras::version::get_build_info;
use pythagoras::{Config, Status};

use std::process::ExitCode;

const USAGE_ERROR: u8 = 3;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here too
            let code = match e.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
                _ => USAGE_ERROR,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    let config = Config::from_args(&args);
    init_logging(&config);

    let report = match &args.command {
        Command::Version => {
            print_version(&config);
            return ExitCode::SUCCESS;
        }
        Command::Calc { a, b, c } => {
            commands::calc::run(a.as_deref(), b.as_deref(), c.as_deref(), &config)
        }
        Command::Verify { a, b, c } => commands::verify::run(a, b, c, &config),
        Command::Solve { fields } => commands::solve::run(fields, &config),
    };

    let formatter = get_formatter(&config);
    let output = formatter.format(&report);
    let status = report.status();

    // Text errors go to stderr; JSON is always a single document on stdout.
    if status == Status::Rejected && config.format == OutputFormat::Text {
        eprintln!("{}", output);
    } else {
        println!("{}", output);
    }

    ExitCode::from(status.exit_code())
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(config: &Config) {
    let default_level = if config.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pythagoras={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_target(false)
        .try_init();
}

fn print_version(config: &Config) {
    let info = get_build_info();
    match config.format {
        OutputFormat::Text => println!("{}", info),
        OutputFormat::Json => match serde_json::to_string_pretty(&info) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
    }
}
