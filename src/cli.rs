use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "stride",
    about = "Print distance, speed and calories for running, walking and swimming sessions"
)]
pub struct Cli {
    /// JSON file with packages, e.g. `[["RUN", [15000, 1, 75]]]`.
    ///
    /// Default: the built-in sample readings.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print each summary as a JSON object instead of a text line.
    #[arg(long)]
    pub json: bool,

    /// Exit with an error if any package failed.
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
