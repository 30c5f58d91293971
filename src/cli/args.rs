//! Command line arguments for pythagoras.

use clap::{Parser, Subcommand, ValueEnum};

const EXIT_CODES: &str = "\
EXIT CODES:
    0   Side computed, or sides form a right triangle
    1   Sides verified but do not form a right triangle
    2   Input rejected (invalid value or impossible triangle)
    3   Usage error";

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Parsed command line arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pythagoras",
    version,
    about = "Compute, verify, and draw right-angled triangles",
    after_help = EXIT_CODES
)]
pub struct Args {
    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "PYTHAGORAS_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    /// Disable colored output (also set by NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not draw the triangle in text output
    #[arg(long, global = true)]
    pub no_figure: bool,

    /// Accept a comma as the decimal separator (3,5 = 3.5)
    #[arg(long, global = true)]
    pub decimal_comma: bool,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print only the result line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Command to execute
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute the missing side from the other two
    #[command(allow_negative_numbers = true)]
    Calc {
        /// First leg
        #[arg(short = 'a', long = "leg-a", value_name = "A", allow_hyphen_values = true)]
        a: Option<String>,
        /// Second leg
        #[arg(short = 'b', long = "leg-b", value_name = "B", allow_hyphen_values = true)]
        b: Option<String>,
        /// Hypotenuse
        #[arg(short = 'c', long = "hypotenuse", value_name = "C", allow_hyphen_values = true)]
        c: Option<String>,
    },
    /// Check whether three sides form a right triangle (any order)
    #[command(allow_negative_numbers = true)]
    Verify {
        a: String,
        b: String,
        c: String,
    },
    /// Compute with two values or verify with three, given as key=value
    Solve {
        /// Side values such as a=3 b=4 (blank values count as missing)
        #[arg(value_name = "SIDE=VALUE")]
        fields: Vec<String>,
    },
    /// Print version and build information
    Version,
}
