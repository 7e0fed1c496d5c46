//! CLI options.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use zerolock::driver::OutputFormat;

/// Prints the mean of the last three non-zero readings after every line of
/// input. A zero is not averaged and blocks further readings for one second.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opts {
    /// Read readings from this file instead of standard input
    #[arg(short, long, conflicts_with = "interactive")]
    pub input: Option<PathBuf>,

    /// Report format (`text` or `json`)
    #[arg(short, long, env = "ZEROLOCK_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Ask for each reading with an interactive prompt
    #[arg(long)]
    pub interactive: bool,

    /// Increases log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse() -> Opts {
    Opts::parse()
}
